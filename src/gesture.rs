//! Gesture classification and the collaborator contract.
//!
//! Every pointer event is reduced to a [`GestureInput`] and classified into
//! exactly one route. The start policy ([`classify_start`]) runs for the
//! first contact on the board; the continue policy ([`classify_continue`])
//! runs for every later move and release captured on the document.
//!
//! Precedence at start:
//!
//! 1. Secondary button with a drag pending cancels the drag.
//! 2. Shift or secondary button with drawing enabled starts a drawing.
//! 3. Anything else starts a drag. View-only boards still route here; the
//!    drag collaborator is the one that refuses.
//!
//! After start, drawing claims the event under the same modifier rule, drag
//! claims it when the board is interactive, and otherwise nothing happens.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::event::{PointerInput, is_right_button};
use crate::geom::Key;
use crate::state::BoardState;

/// Drag and draw operations the dispatch layer routes to.
///
/// Each operation must tolerate being called without its preconditions (for
/// example a move with no drag in progress) and do nothing in that case.
pub trait Gestures {
    fn drag_start(&self, state: &mut BoardState, input: &PointerInput);
    fn drag_move(&self, state: &mut BoardState, input: &PointerInput);
    fn drag_end(&self, state: &mut BoardState, input: &PointerInput);
    fn draw_start(&self, state: &mut BoardState, input: &PointerInput);
    fn draw_move(&self, state: &mut BoardState, input: &PointerInput);
    fn draw_end(&self, state: &mut BoardState, input: &PointerInput);
}

/// Everything the policy looks at, captured once per event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureInput {
    pub secondary: bool,
    pub shift: bool,
    pub draw_enabled: bool,
    pub view_only: bool,
    /// Origin square of the drag in progress, if any.
    pub pending_drag: Option<Key>,
}

impl GestureInput {
    #[must_use]
    pub fn capture(state: &BoardState, input: &PointerInput) -> Self {
        Self {
            secondary: is_right_button(input),
            shift: input.shift,
            draw_enabled: state.drawable.enabled,
            view_only: state.view_only,
            pending_drag: state.draggable.current.map(|current| current.orig),
        }
    }

    /// Whether the draw collaborator claims this event.
    #[must_use]
    pub fn wants_draw(&self) -> bool {
        (self.shift || self.secondary) && self.draw_enabled
    }
}

/// Outcome of the first contact on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartRoute {
    /// Drop the pending drag without calling a collaborator.
    CancelPending,
    Draw,
    Drag,
}

/// Outcome of a move or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContinueRoute {
    Draw,
    Drag,
    Ignore,
}

/// Move or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Move,
    End,
}

#[must_use]
pub fn classify_start(gesture: GestureInput) -> StartRoute {
    if gesture.secondary && gesture.pending_drag.is_some() {
        StartRoute::CancelPending
    } else if gesture.wants_draw() {
        StartRoute::Draw
    } else {
        StartRoute::Drag
    }
}

#[must_use]
pub fn classify_continue(gesture: GestureInput) -> ContinueRoute {
    if gesture.wants_draw() {
        ContinueRoute::Draw
    } else if !gesture.view_only {
        ContinueRoute::Drag
    } else {
        ContinueRoute::Ignore
    }
}

/// Classify a gesture start and hand it to at most one collaborator.
pub fn start(state: &mut BoardState, gestures: &dyn Gestures, input: &PointerInput) -> StartRoute {
    let route = classify_start(GestureInput::capture(state, input));
    log::trace!("gesture start: {route:?}");
    match route {
        StartRoute::CancelPending => {
            state.cancel_pending_drag();
        }
        StartRoute::Draw => gestures.draw_start(state, input),
        StartRoute::Drag => gestures.drag_start(state, input),
    }
    route
}

/// Classify a move or release and hand it to at most one collaborator.
pub fn proceed(state: &mut BoardState, gestures: &dyn Gestures, phase: Phase, input: &PointerInput) -> ContinueRoute {
    let route = classify_continue(GestureInput::capture(state, input));
    match (route, phase) {
        (ContinueRoute::Draw, Phase::Move) => gestures.draw_move(state, input),
        (ContinueRoute::Draw, Phase::End) => gestures.draw_end(state, input),
        (ContinueRoute::Drag, Phase::Move) => gestures.drag_move(state, input),
        (ContinueRoute::Drag, Phase::End) => gestures.drag_end(state, input),
        (ContinueRoute::Ignore, _) => {}
    }
    route
}

//! Normalized pointer input.
//!
//! Mouse, pointer and touch events carry their contact point in different
//! places. [`PointerInput`] flattens the parts the gesture policy cares about
//! into one value so the classification and the collaborators never touch a
//! host event type directly.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use crate::consts::{SECONDARY_BUTTON, SECONDARY_BUTTONS_MASK};
use crate::geom::NumberPair;

/// Host-agnostic snapshot of a pointer or touch event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerInput {
    /// Direct client coordinates, present for mouse and pointer events.
    pub client: Option<NumberPair>,
    /// Client coordinates of the active touches on the target, first contact first.
    pub touches: Vec<NumberPair>,
    /// Button that changed state (`MouseEvent.button`), if reported.
    pub button: Option<i16>,
    /// Bitmask of held buttons (`MouseEvent.buttons`).
    pub buttons: u16,
    /// Shift key held.
    pub shift: bool,
}

impl PointerInput {
    /// A primary-button mouse event at `(x, y)`.
    #[must_use]
    pub fn mouse(x: f64, y: f64) -> Self {
        Self { client: Some((x, y)), button: Some(0), buttons: 1, ..Self::default() }
    }

    /// A touch event with the given active contacts.
    #[must_use]
    pub fn touch(touches: Vec<NumberPair>) -> Self {
        Self { touches, ..Self::default() }
    }

    /// Same event, reported as a secondary-button press.
    #[must_use]
    pub fn with_secondary(mut self) -> Self {
        self.button = Some(SECONDARY_BUTTON);
        self.buttons = SECONDARY_BUTTONS_MASK;
        self
    }

    /// Same event, with shift held.
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// A host event that can be read as pointer input and have its default suppressed.
pub trait HostEvent {
    /// Normalized view of the event.
    fn pointer(&self) -> PointerInput;

    /// Cancel the host's default action for this event.
    fn prevent_default(&self);

    /// Stop the event from reaching further listeners.
    fn stop_propagation(&self);
}

/// Primary contact point of the event in viewport pixels.
///
/// Client coordinates win when present, `(0, 0)` included. Otherwise the
/// first active touch is used. A touch release has no active touches and
/// yields `None`; callers abort the current gesture step instead of failing.
#[must_use]
pub fn event_position(input: &PointerInput) -> Option<NumberPair> {
    input.client.or_else(|| input.touches.first().copied())
}

/// Whether the event came from the secondary (usually right) button.
///
/// Checks both the instantaneous `button` code and the held-buttons mask, so
/// legacy mouse events and pointer events classify the same way.
#[must_use]
pub fn is_right_button(input: &PointerInput) -> bool {
    input.button == Some(SECONDARY_BUTTON) || input.buttons == SECONDARY_BUTTONS_MASK
}

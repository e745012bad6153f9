//! Board state shared between the dispatch layer and the gesture collaborators.
//!
//! DESIGN
//! ======
//! The dispatch layer reads the configuration flags and the pending drag, and
//! writes only when a secondary-button press cancels a pending placement.
//! Everything else in here belongs to the collaborators.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashMap;
use std::rc::Rc;

use crate::config::BoardConfig;
use crate::geom::{Bounds, Color, Key, Piece};
use crate::util::Memo;

/// A drag in progress, started by the drag collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragCurrent {
    /// Square the piece was lifted from. For a new piece, the square it is shown on.
    pub orig: Key,
    pub piece: Piece,
    /// The piece came from outside the board and is not placed yet.
    pub new_piece: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draggable {
    pub current: Option<DragCurrent>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Drawable {
    pub enabled: bool,
}

/// Host geometry cached for the collaborators.
#[derive(Debug)]
pub struct DomState {
    /// Board rectangle in viewport pixels, recomputed lazily after invalidation.
    pub bounds: Rc<Memo<Bounds>>,
}

/// Interactive board state.
#[derive(Debug)]
pub struct BoardState {
    pub pieces: HashMap<Key, Piece>,
    pub selected: Option<Key>,
    pub orientation: Color,
    pub view_only: bool,
    pub disable_context_menu: bool,
    pub resizable: bool,
    pub draggable: Draggable,
    pub drawable: Drawable,
    pub dom: DomState,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(Memo::new(Bounds::default))
    }
}

impl BoardState {
    /// Empty board whose bounds come from `bounds`, configured with [`BoardConfig::default`].
    #[must_use]
    pub fn new(bounds: Memo<Bounds>) -> Self {
        let mut state = Self {
            pieces: HashMap::new(),
            selected: None,
            orientation: Color::White,
            view_only: false,
            disable_context_menu: false,
            resizable: false,
            draggable: Draggable::default(),
            drawable: Drawable::default(),
            dom: DomState { bounds: Rc::new(bounds) },
        };
        state.configure(&BoardConfig::default());
        state
    }

    /// Copy the configuration flags into the state.
    pub fn configure(&mut self, config: &BoardConfig) {
        self.view_only = config.view_only;
        self.disable_context_menu = config.disable_context_menu;
        self.resizable = config.resizable;
        self.orientation = config.orientation;
        self.drawable.enabled = config.drawable.enabled;
    }

    /// Current configuration flags as a [`BoardConfig`].
    #[must_use]
    pub fn config(&self) -> BoardConfig {
        BoardConfig {
            view_only: self.view_only,
            disable_context_menu: self.disable_context_menu,
            resizable: self.resizable,
            orientation: self.orientation,
            drawable: crate::config::DrawableConfig { enabled: self.drawable.enabled },
        }
    }

    /// Abandon the pending drag.
    ///
    /// A new piece that was never placed is removed from the board. The
    /// selection is cleared either way. Returns whether a drag was pending.
    pub fn cancel_pending_drag(&mut self) -> bool {
        let Some(current) = self.draggable.current.take() else {
            return false;
        };
        if current.new_piece {
            self.pieces.remove(&current.orig);
        }
        self.selected = None;
        true
    }

    /// Mark the cached bounds stale.
    pub fn mark_bounds_dirty(&self) {
        self.dom.bounds.clear();
    }

    /// Whether the board is shown from white's side.
    #[must_use]
    pub fn as_white(&self) -> bool {
        self.orientation == Color::White
    }
}

//! Owner of one board's listener lifecycle.
//!
//! [`BoardInput`] holds the board and document [`Unbind`] handles between
//! bind cycles. Reconfiguring a board whose binding-relevant flags change
//! revokes both and binds again from scratch.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::binder::bind_board;
use crate::config::BoardConfig;
use crate::dispatcher::{Redraw, bind_document};
use crate::error::Error;
use crate::geom::Bounds;
use crate::gesture::Gestures;
use crate::host::Host;
use crate::state::BoardState;
use crate::subscription::Unbind;
use crate::util::Memo;

pub struct BoardInput<H: Host> {
    host: H,
    state: Rc<RefCell<BoardState>>,
    bounds: Rc<Memo<Bounds>>,
    gestures: Rc<dyn Gestures>,
    redraw_all: Redraw,
    board: Option<Unbind>,
    document: Option<Unbind>,
}

impl<H: Host> BoardInput<H> {
    /// Create an unbound controller owning `state`. Call [`BoardInput::bind`] to start listening.
    pub fn new(host: H, state: BoardState, gestures: Rc<dyn Gestures>, redraw_all: Redraw) -> Self {
        let bounds = Rc::clone(&state.dom.bounds);
        Self {
            host,
            state: Rc::new(RefCell::new(state)),
            bounds,
            gestures,
            redraw_all,
            board: None,
            document: None,
        }
    }

    /// Bind board and document listeners, releasing any previous cycle first.
    ///
    /// # Errors
    ///
    /// Propagates bind failures. Nothing stays bound when this fails.
    pub fn bind(&mut self) -> Result<(), Error> {
        self.unbind();
        let board = bind_board(&self.host, &self.state, &self.gestures)?;
        match bind_document(&self.host, &self.state, &self.gestures, &self.redraw_all) {
            Ok(document) => {
                self.board = Some(board);
                self.document = Some(document);
                Ok(())
            }
            Err(err) => {
                board.revoke();
                Err(err)
            }
        }
    }

    /// Release every listener of the current cycle. No-op when unbound.
    pub fn unbind(&mut self) {
        if let Some(document) = self.document.take() {
            document.revoke();
        }
        if let Some(board) = self.board.take() {
            board.revoke();
        }
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.board.is_some() || self.document.is_some()
    }

    /// Apply `config`, rebinding when a flag that shapes the listener set changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] without applying anything if the state is
    /// borrowed elsewhere, and propagates bind failures from the rebind.
    pub fn reconfigure(&mut self, config: &BoardConfig) -> Result<(), Error> {
        let rebind = {
            let mut state = self.state.try_borrow_mut().map_err(|_| Error::Busy("reconfigure"))?;
            let rebind = state.config().needs_rebind(config);
            state.configure(config);
            rebind
        };
        if rebind && self.is_bound() {
            log::debug!("board config changed; rebinding listeners");
            self.bind()?;
        }
        Ok(())
    }

    /// Mark the cached board bounds stale, for layout changes the viewport listeners cannot see.
    ///
    /// Works while the board state is borrowed, for example from inside a collaborator.
    pub fn mark_bounds_dirty(&self) {
        self.bounds.clear();
    }

    #[must_use]
    pub fn state(&self) -> &Rc<RefCell<BoardState>> {
        &self.state
    }

    /// Number of listeners currently held, board and document together.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.board.as_ref().map_or(0, Unbind::len) + self.document.as_ref().map_or(0, Unbind::len)
    }
}

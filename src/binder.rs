//! Gesture-start listeners on the board surface.
//!
//! The first contact of every gesture lands here. The handler snapshots the
//! state, classifies the press and forwards it to exactly one collaborator
//! (or cancels a pending placement), see [`crate::gesture::start`].

#[cfg(test)]
#[path = "binder_test.rs"]
mod binder_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::consts::{CONTEXT_MENU_EVENT, START_EVENTS};
use crate::error::Error;
use crate::event::HostEvent;
use crate::gesture::{self, Gestures};
use crate::host::{EventOf, Host};
use crate::state::BoardState;
use crate::subscription::{Listener, ListenerOptions, Unbind};

/// Bind the start listeners and the context-menu suppressor on the board.
///
/// View-only boards get no start listeners. The suppressor is bound when the
/// context menu is disabled explicitly or drawing is enabled, so a right-drag
/// never opens the native menu.
///
/// # Errors
///
/// Returns the first [`Error::Bind`]; listeners bound before it are released.
pub fn bind_board<H: Host>(host: &H, state: &Rc<RefCell<BoardState>>, gestures: &Rc<dyn Gestures>) -> Result<Unbind, Error> {
    let (view_only, suppress_menu) = {
        let s = state.borrow();
        (s.view_only, s.disable_context_menu || s.drawable.enabled)
    };

    let board = host.board();
    let mut unbind = Unbind::new();

    if !view_only {
        let on_start = start_listener::<H>(state, gestures);
        for event in START_EVENTS {
            if let Err(err) = unbind.bind(&board, event, Rc::clone(&on_start), ListenerOptions::default()) {
                unbind.revoke();
                return Err(err);
            }
        }
    }

    if suppress_menu {
        let on_menu: Listener<EventOf<H>> = Rc::new(|ev: &EventOf<H>| {
            ev.prevent_default();
            ev.stop_propagation();
        });
        if let Err(err) = unbind.bind(&board, CONTEXT_MENU_EVENT, on_menu, ListenerOptions::default()) {
            unbind.revoke();
            return Err(err);
        }
    }

    log::debug!("board bound: {} listeners (view_only={view_only})", unbind.len());
    Ok(unbind)
}

fn start_listener<H: Host>(state: &Rc<RefCell<BoardState>>, gestures: &Rc<dyn Gestures>) -> Listener<EventOf<H>> {
    let state = Rc::clone(state);
    let gestures = Rc::clone(gestures);
    Rc::new(move |ev: &EventOf<H>| {
        let input = ev.pointer();
        let Ok(mut s) = state.try_borrow_mut() else {
            log::warn!("board state busy; dropping gesture start");
            return;
        };
        gesture::start(&mut s, &*gestures, &input);
    })
}

//! Document and window scoped listeners for the lifetime of an interactive board.
//!
//! A drag or draw keeps going after the pointer leaves the board, so move
//! and release are captured on the document and routed with the same policy
//! used at start (see [`crate::gesture::proceed`]). Viewport changes only
//! invalidate the cached board bounds; the explicit board-resize notification
//! also schedules a full redraw.
//!
//! TRADE-OFFS
//! ==========
//! Scroll and window resize are registered passive and never redraw on their
//! own. The next collaborator that needs the bounds pays for recomputing
//! them, which keeps scrolling free of layout work.

#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod dispatcher_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::consts::{END_EVENTS, MOVE_EVENTS, RESIZE_EVENT, SCROLL_EVENT, WINDOW_RESIZE_EVENT};
use crate::error::Error;
use crate::event::HostEvent;
use crate::geom::Bounds;
use crate::gesture::{self, Gestures, Phase};
use crate::host::{EventOf, Host};
use crate::state::BoardState;
use crate::subscription::{Listener, ListenerOptions, Unbind};
use crate::util::Memo;

/// Redraw callback supplied by the board's owner.
pub type Redraw = Rc<dyn Fn()>;

/// Bind document and window listeners; the returned [`Unbind`] releases all of them.
///
/// Move/release listeners are skipped for view-only boards and the resize
/// notification is only observed for resizable ones. Scroll and window resize
/// are always observed.
///
/// # Errors
///
/// Returns the first [`Error::Bind`]; listeners bound before it are released.
pub fn bind_document<H: Host>(
    host: &H,
    state: &Rc<RefCell<BoardState>>,
    gestures: &Rc<dyn Gestures>,
    redraw_all: &Redraw,
) -> Result<Unbind, Error> {
    let mut unbind = Unbind::new();
    match register(&mut unbind, host, state, gestures, redraw_all) {
        Ok(()) => {
            log::debug!("document bound: {} listeners", unbind.len());
            Ok(unbind)
        }
        Err(err) => {
            unbind.revoke();
            Err(err)
        }
    }
}

fn register<H: Host>(
    unbind: &mut Unbind,
    host: &H,
    state: &Rc<RefCell<BoardState>>,
    gestures: &Rc<dyn Gestures>,
    redraw_all: &Redraw,
) -> Result<(), Error> {
    let (view_only, resizable, bounds) = {
        let s = state.borrow();
        (s.view_only, s.resizable, Rc::clone(&s.dom.bounds))
    };

    if !view_only {
        let document = host.document();
        let on_move = phase_listener::<H>(state, gestures, Phase::Move);
        let on_end = phase_listener::<H>(state, gestures, Phase::End);
        for event in MOVE_EVENTS {
            unbind.bind(&document, event, Rc::clone(&on_move), ListenerOptions::default())?;
        }
        for event in END_EVENTS {
            unbind.bind(&document, event, Rc::clone(&on_end), ListenerOptions::default())?;
        }
    }

    if resizable {
        let on_resize = resize_listener(host, &bounds, redraw_all);
        unbind.bind(&host.resize_signal(), RESIZE_EVENT, on_resize, ListenerOptions::default())?;
    }

    let window = host.window();
    let on_scroll: Listener<EventOf<H>> = Rc::new(move |_ev: &EventOf<H>| bounds.clear());
    unbind.bind(&window, SCROLL_EVENT, Rc::clone(&on_scroll), ListenerOptions::PASSIVE)?;
    unbind.bind(&window, WINDOW_RESIZE_EVENT, on_scroll, ListenerOptions::PASSIVE)?;
    Ok(())
}

fn phase_listener<H: Host>(state: &Rc<RefCell<BoardState>>, gestures: &Rc<dyn Gestures>, phase: Phase) -> Listener<EventOf<H>> {
    let state = Rc::clone(state);
    let gestures = Rc::clone(gestures);
    Rc::new(move |ev: &EventOf<H>| {
        let input = ev.pointer();
        let Ok(mut s) = state.try_borrow_mut() else {
            log::warn!("board state busy; dropping gesture {phase:?}");
            return;
        };
        let route = gesture::proceed(&mut s, &*gestures, phase, &input);
        log::trace!("gesture {phase:?}: {route:?}");
    })
}

fn resize_listener<H: Host>(host: &H, bounds: &Rc<Memo<Bounds>>, redraw_all: &Redraw) -> Listener<EventOf<H>> {
    let host = host.clone();
    let bounds = Rc::clone(bounds);
    let redraw_all = Rc::clone(redraw_all);
    Rc::new(move |_ev: &EventOf<H>| {
        bounds.clear();
        let redraw = Rc::clone(&redraw_all);
        if let Err(err) = host.request_frame(Box::new(move || redraw())) {
            log::warn!("{err}; redrawing immediately");
            redraw_all();
        }
    })
}

use std::cell::Cell;

use super::*;
use crate::event::PointerInput;
use crate::fixtures::{Call, FakeHost, RecordingGestures};

struct Harness {
    host: FakeHost,
    state: Rc<RefCell<BoardState>>,
    recorder: Rc<RecordingGestures>,
    gestures: Rc<dyn Gestures>,
    redraws: Rc<Cell<u32>>,
    redraw_all: Redraw,
    bounds_calls: Rc<Cell<u32>>,
}

fn harness(configure: impl FnOnce(&mut BoardState)) -> Harness {
    let bounds_calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&bounds_calls);
    let mut state = BoardState::new(Memo::new(move || {
        counter.set(counter.get() + 1);
        Bounds { left: 10.0, top: 10.0, width: 480.0, height: 480.0 }
    }));
    configure(&mut state);

    let recorder = Rc::new(RecordingGestures::default());
    let gestures: Rc<dyn Gestures> = recorder.clone();
    let redraws = Rc::new(Cell::new(0));
    let redraw_counter = Rc::clone(&redraws);
    let redraw_all: Redraw = Rc::new(move || redraw_counter.set(redraw_counter.get() + 1));

    Harness {
        host: FakeHost::default(),
        state: Rc::new(RefCell::new(state)),
        recorder,
        gestures,
        redraws,
        redraw_all,
        bounds_calls,
    }
}

impl Harness {
    fn bind(&self) -> Unbind {
        bind_document(&self.host, &self.state, &self.gestures, &self.redraw_all).unwrap()
    }

    fn bounds(&self) -> Bounds {
        self.state.borrow().dom.bounds.get()
    }
}

// =============================================================
// Registration
// =============================================================

#[test]
fn interactive_board_binds_move_end_and_viewport() {
    let h = harness(|_| {});
    let unbind = h.bind();
    assert_eq!(unbind.events(), vec!["touchmove", "mousemove", "touchend", "mouseup", "scroll", "resize"]);
    assert_eq!(h.host.document.total(), 4);
    assert_eq!(h.host.window.total(), 2);
    assert_eq!(h.host.body.total(), 0);
}

#[test]
fn resizable_board_listens_for_resize_signal() {
    let h = harness(|s| s.resizable = true);
    let unbind = h.bind();
    assert_eq!(h.host.body.count(crate::consts::RESIZE_EVENT), 1);
    assert_eq!(unbind.len(), 7);
}

#[test]
fn view_only_board_binds_viewport_only() {
    let h = harness(|s| s.view_only = true);
    let unbind = h.bind();
    assert_eq!(unbind.events(), vec!["scroll", "resize"]);
    assert_eq!(h.host.document.total(), 0);
}

#[test]
fn viewport_listeners_are_passive() {
    let h = harness(|_| {});
    let _unbind = h.bind();
    assert_eq!(h.host.window.options("scroll"), vec![ListenerOptions::PASSIVE]);
    assert_eq!(h.host.window.options("resize"), vec![ListenerOptions::PASSIVE]);
    assert_eq!(h.host.document.options("mousemove"), vec![ListenerOptions::default()]);
}

#[test]
fn revoke_tears_down_every_listener() {
    let h = harness(|s| s.resizable = true);
    h.bind().revoke();
    assert_eq!(h.host.document.total() + h.host.window.total() + h.host.body.total(), 0);

    h.host.document.fire("mousemove", PointerInput::mouse(1.0, 1.0));
    h.host.document.fire("mouseup", PointerInput::mouse(1.0, 1.0));
    assert!(h.recorder.calls().is_empty());
}

#[test]
fn rebind_after_revoke_starts_fresh() {
    let h = harness(|_| {});
    h.bind().revoke();
    let unbind = h.bind();
    assert_eq!(h.host.document.count("mousemove"), 1);
    h.host.document.fire("mousemove", PointerInput::mouse(1.0, 1.0));
    assert_eq!(h.recorder.calls(), vec![Call::DragMove]);
    unbind.revoke();
}

#[test]
fn failed_bind_releases_earlier_listeners() {
    let h = harness(|_| {});
    h.host.window.refuse("resize");
    let result = bind_document(&h.host, &h.state, &h.gestures, &h.redraw_all);
    assert!(matches!(result, Err(Error::Bind { event: "resize", .. })));
    assert_eq!(h.host.document.total() + h.host.window.total(), 0);
}

// =============================================================
// Move / end routing
// =============================================================

#[test]
fn plain_move_and_release_route_to_drag() {
    let h = harness(|_| {});
    let _unbind = h.bind();
    h.host.document.fire("mousemove", PointerInput::mouse(40.0, 40.0));
    h.host.document.fire("mouseup", PointerInput::mouse(40.0, 40.0));
    assert_eq!(h.recorder.calls(), vec![Call::DragMove, Call::DragEnd]);
}

#[test]
fn touch_release_without_position_still_routes() {
    let h = harness(|_| {});
    let _unbind = h.bind();
    h.host.document.fire("touchmove", PointerInput::touch(vec![(3.0, 4.0)]));
    h.host.document.fire("touchend", PointerInput::touch(Vec::new()));
    assert_eq!(h.recorder.calls(), vec![Call::DragMove, Call::DragEnd]);
    assert_eq!(crate::event::event_position(&h.recorder.inputs()[1]), None);
}

#[test]
fn right_drag_with_draw_mode_routes_to_draw() {
    let h = harness(|_| {});
    let _unbind = h.bind();
    h.host.document.fire("mousemove", PointerInput::mouse(40.0, 40.0).with_secondary());
    h.host.document.fire("mouseup", PointerInput::mouse(40.0, 40.0).with_secondary());
    assert_eq!(h.recorder.calls(), vec![Call::DrawMove, Call::DrawEnd]);
}

#[test]
fn shift_move_without_draw_mode_routes_to_drag() {
    let h = harness(|s| s.drawable.enabled = false);
    let _unbind = h.bind();
    h.host.document.fire("mousemove", PointerInput::mouse(40.0, 40.0).with_shift());
    assert_eq!(h.recorder.calls(), vec![Call::DragMove]);
}

#[test]
fn each_event_reaches_one_collaborator() {
    let h = harness(|_| {});
    let _unbind = h.bind();
    for input in [PointerInput::mouse(1.0, 1.0), PointerInput::mouse(1.0, 1.0).with_shift()] {
        h.recorder.clear();
        h.host.document.fire("mousemove", input);
        assert_eq!(h.recorder.calls().len(), 1);
    }
}

#[test]
fn view_only_flip_after_bind_stops_drag_routing() {
    let h = harness(|s| s.drawable.enabled = false);
    let _unbind = h.bind();
    h.state.borrow_mut().view_only = true;
    h.host.document.fire("mousemove", PointerInput::mouse(1.0, 1.0));
    h.host.document.fire("touchend", PointerInput::touch(Vec::new()));
    assert!(h.recorder.calls().is_empty());
}

// =============================================================
// Bounds invalidation
// =============================================================

#[test]
fn scroll_invalidates_bounds_without_redraw() {
    let h = harness(|_| {});
    let _unbind = h.bind();
    h.bounds();
    assert_eq!(h.bounds_calls.get(), 1);

    h.host.window.fire("scroll", PointerInput::default());
    h.bounds();

    assert_eq!(h.bounds_calls.get(), 2);
    assert_eq!(h.host.pending_frames(), 0);
    assert_eq!(h.redraws.get(), 0);
}

#[test]
fn window_resize_invalidates_bounds() {
    let h = harness(|_| {});
    let _unbind = h.bind();
    h.bounds();
    h.host.window.fire("resize", PointerInput::default());
    assert!(!h.state.borrow().dom.bounds.is_cached());
}

#[test]
fn resize_signal_invalidates_and_schedules_redraw() {
    let h = harness(|s| s.resizable = true);
    let _unbind = h.bind();
    h.bounds();

    h.host.body.fire(crate::consts::RESIZE_EVENT, PointerInput::default());

    assert!(!h.state.borrow().dom.bounds.is_cached());
    assert_eq!(h.redraws.get(), 0);
    assert_eq!(h.host.run_frames(), 1);
    assert_eq!(h.redraws.get(), 1);
}

#[test]
fn refused_frame_redraws_immediately() {
    let h = harness(|s| s.resizable = true);
    let _unbind = h.bind();
    h.host.refuse_frames();
    h.host.body.fire(crate::consts::RESIZE_EVENT, PointerInput::default());
    assert_eq!(h.redraws.get(), 1);
}

#[test]
fn scroll_while_state_is_borrowed_still_invalidates() {
    let h = harness(|_| {});
    let _unbind = h.bind();
    h.bounds();
    let held = h.state.borrow_mut();
    h.host.window.fire("scroll", PointerInput::default());
    drop(held);
    assert!(!h.state.borrow().dom.bounds.is_cached());
}

#[test]
fn revoked_viewport_listeners_leave_bounds_cached() {
    let h = harness(|_| {});
    h.bind().revoke();
    h.bounds();
    h.host.window.fire("scroll", PointerInput::default());
    assert!(h.state.borrow().dom.bounds.is_cached());
}

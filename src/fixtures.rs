//! In-memory host and recording collaborators for unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::Error;
use crate::event::{HostEvent, PointerInput};
use crate::gesture::Gestures;
use crate::host::Host;
use crate::state::BoardState;
use crate::subscription::{EventTarget, Listener, ListenerOptions};

// =============================================================
// Events
// =============================================================

/// Event dispatched by hand on a [`FakeTarget`].
#[derive(Debug, Default)]
pub struct SyntheticEvent {
    pub input: PointerInput,
    pub default_prevented: Cell<bool>,
    pub propagation_stopped: Cell<bool>,
}

impl SyntheticEvent {
    pub fn new(input: PointerInput) -> Self {
        Self { input, ..Self::default() }
    }
}

impl HostEvent for SyntheticEvent {
    fn pointer(&self) -> PointerInput {
        self.input.clone()
    }

    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }
}

// =============================================================
// Targets
// =============================================================

struct Registered {
    id: u64,
    event: &'static str,
    listener: Listener<SyntheticEvent>,
    options: ListenerOptions,
}

#[derive(Default)]
struct TargetLog {
    next_id: u64,
    listeners: Vec<Registered>,
    refused: Vec<&'static str>,
    removals: Vec<&'static str>,
}

/// Event target that records registrations and dispatches synchronously.
#[derive(Clone, Default)]
pub struct FakeTarget {
    log: Rc<RefCell<TargetLog>>,
}

impl FakeTarget {
    /// Invoke every listener for `event`; returns how many ran.
    pub fn dispatch(&self, event: &'static str, ev: &SyntheticEvent) -> usize {
        let listeners: Vec<Listener<SyntheticEvent>> = self
            .log
            .borrow()
            .listeners
            .iter()
            .filter(|r| r.event == event)
            .map(|r| Rc::clone(&r.listener))
            .collect();
        for listener in &listeners {
            listener(ev);
        }
        listeners.len()
    }

    pub fn fire(&self, event: &'static str, input: PointerInput) -> usize {
        self.dispatch(event, &SyntheticEvent::new(input))
    }

    pub fn count(&self, event: &str) -> usize {
        self.log.borrow().listeners.iter().filter(|r| r.event == event).count()
    }

    pub fn total(&self) -> usize {
        self.log.borrow().listeners.len()
    }

    pub fn options(&self, event: &str) -> Vec<ListenerOptions> {
        self.log.borrow().listeners.iter().filter(|r| r.event == event).map(|r| r.options).collect()
    }

    /// Event names in the order their listeners were removed.
    pub fn removals(&self) -> Vec<&'static str> {
        self.log.borrow().removals.clone()
    }

    /// Make future registrations for `event` fail.
    pub fn refuse(&self, event: &'static str) {
        self.log.borrow_mut().refused.push(event);
    }
}

impl EventTarget for FakeTarget {
    type Event = SyntheticEvent;
    type Registration = u64;

    fn add_listener(
        &self,
        name: &'static str,
        listener: Listener<SyntheticEvent>,
        options: ListenerOptions,
    ) -> Result<u64, Error> {
        let mut log = self.log.borrow_mut();
        if log.refused.contains(&name) {
            return Err(Error::Bind { event: name, reason: "refused by fake target".into() });
        }
        log.next_id += 1;
        let id = log.next_id;
        log.listeners.push(Registered { id, event: name, listener, options });
        Ok(id)
    }

    fn remove_listener(&self, name: &'static str, registration: &u64) {
        let mut log = self.log.borrow_mut();
        let before = log.listeners.len();
        log.listeners.retain(|r| !(r.id == *registration && r.event == name));
        if log.listeners.len() != before {
            log.removals.push(name);
        }
    }
}

// =============================================================
// Host
// =============================================================

type FrameQueue = Rc<RefCell<Vec<Box<dyn FnOnce()>>>>;

/// Host with separate fake targets and a manual frame queue.
#[derive(Clone, Default)]
pub struct FakeHost {
    pub board: FakeTarget,
    pub document: FakeTarget,
    pub window: FakeTarget,
    pub body: FakeTarget,
    frames: FrameQueue,
    refuse_frames: Rc<Cell<bool>>,
}

impl FakeHost {
    /// Run queued frame callbacks; returns how many ran.
    pub fn run_frames(&self) -> usize {
        let frames: Vec<Box<dyn FnOnce()>> = self.frames.borrow_mut().drain(..).collect();
        let count = frames.len();
        for frame in frames {
            frame();
        }
        count
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn refuse_frames(&self) {
        self.refuse_frames.set(true);
    }
}

impl Host for FakeHost {
    type Target = FakeTarget;

    fn board(&self) -> FakeTarget {
        self.board.clone()
    }

    fn document(&self) -> FakeTarget {
        self.document.clone()
    }

    fn window(&self) -> FakeTarget {
        self.window.clone()
    }

    fn resize_signal(&self) -> FakeTarget {
        self.body.clone()
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), Error> {
        if self.refuse_frames.get() {
            return Err(Error::Frame("refused by fake host".into()));
        }
        self.frames.borrow_mut().push(callback);
        Ok(())
    }
}

// =============================================================
// Collaborators
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Call {
    DragStart,
    DragMove,
    DragEnd,
    DrawStart,
    DrawMove,
    DrawEnd,
}

/// Gesture collaborator that records every call it receives.
#[derive(Debug, Default)]
pub struct RecordingGestures {
    calls: RefCell<Vec<(Call, PointerInput)>>,
}

impl RecordingGestures {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().iter().map(|(call, _)| *call).collect()
    }

    pub fn inputs(&self) -> Vec<PointerInput> {
        self.calls.borrow().iter().map(|(_, input)| input.clone()).collect()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: Call, input: &PointerInput) {
        self.calls.borrow_mut().push((call, input.clone()));
    }
}

impl Gestures for RecordingGestures {
    fn drag_start(&self, _state: &mut BoardState, input: &PointerInput) {
        self.record(Call::DragStart, input);
    }

    fn drag_move(&self, _state: &mut BoardState, input: &PointerInput) {
        self.record(Call::DragMove, input);
    }

    fn drag_end(&self, _state: &mut BoardState, input: &PointerInput) {
        self.record(Call::DragEnd, input);
    }

    fn draw_start(&self, _state: &mut BoardState, input: &PointerInput) {
        self.record(Call::DrawStart, input);
    }

    fn draw_move(&self, _state: &mut BoardState, input: &PointerInput) {
        self.record(Call::DrawMove, input);
    }

    fn draw_end(&self, _state: &mut BoardState, input: &PointerInput) {
        self.record(Call::DrawEnd, input);
    }
}

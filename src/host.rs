//! Host seam: where listeners go and how redraws are scheduled.
//!
//! The binder and dispatcher only talk to a [`Host`]. The browser
//! implementation lives in [`crate::dom`]; tests drive an in-memory host.

use crate::error::Error;
use crate::subscription::EventTarget;

/// Event type delivered by a host's targets.
pub type EventOf<H> = <<H as Host>::Target as EventTarget>::Event;

/// The environment the board lives in.
pub trait Host: Clone + 'static {
    type Target: EventTarget;

    /// The board surface element.
    fn board(&self) -> Self::Target;

    /// Document scope, for move and release events that leave the board.
    fn document(&self) -> Self::Target;

    /// Window scope, for viewport scroll and resize.
    fn window(&self) -> Self::Target;

    /// Stable element that receives the board-resize notification.
    fn resize_signal(&self) -> Self::Target;

    /// Run `callback` at the next animation opportunity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Frame`] when nothing could be scheduled.
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), Error>;
}

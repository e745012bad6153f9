//! Pointer and touch gesture dispatch for an interactive board surface.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It decides,
//! for every low-level pointer event on the board, whether the user is
//! dragging a piece, drawing an annotation, or cancelling a pending
//! placement, and hands the event to the matching [`gesture::Gestures`]
//! collaborator. The collaborators own the actual drag physics and shape
//! rendering; this crate owns the routing and the lifetime of every listener
//! it installs.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geom`] | Square keys, positions, distances and pixel translation |
//! | [`event`] | Normalized pointer input and position extraction |
//! | [`util`] | Memoized values and the elapsed-time [`util::Timer`] |
//! | [`subscription`] | Revocable listener handles and the aggregate [`subscription::Unbind`] |
//! | [`gesture`] | Gesture classification and the collaborator contract |
//! | [`binder`] | Gesture-start listeners on the board surface |
//! | [`dispatcher`] | Document/window scoped move, end and viewport listeners |
//! | [`controller`] | Owner of a bind cycle; rebinds on reconfiguration |
//! | [`state`] | Board state shared with the collaborators |
//! | [`config`] | Serializable board configuration |
//! | [`host`] | Host seam: event targets and frame scheduling |
//! | [`dom`] | Browser implementation of the host seam |
//! | [`style`] | Transform property negotiation, cached once |
//! | [`consts`] | Event names and shared constants |
//! | [`error`] | Crate error type |

pub mod binder;
pub mod config;
pub mod consts;
pub mod controller;
pub mod dispatcher;
pub mod dom;
pub mod error;
pub mod event;
pub mod geom;
pub mod gesture;
pub mod host;
pub mod state;
pub mod style;
pub mod subscription;
pub mod util;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::Error;

/// Route `log` records to the browser console.
///
/// Safe to call more than once; later calls keep the first logger.
#[cfg(feature = "console")]
pub fn init_logging(level: log::Level) {
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
}

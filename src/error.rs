//! Crate error type.

/// Errors surfaced while binding to the host or loading configuration.
///
/// The gesture routing itself never fails; these only come from the host
/// runtime refusing a request or from malformed input at the edges.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host refused to register a listener.
    #[error("failed to bind `{event}` listener: {reason}")]
    Bind {
        /// Event name that was being bound.
        event: &'static str,
        /// Host-provided description of the failure.
        reason: String,
    },
    /// Neither an animation frame nor a timer tick could be scheduled.
    #[error("frame request refused: {0}")]
    Frame(String),
    /// The host rejected some other request.
    #[error("host refused to {op}: {reason}")]
    Host {
        /// What was being attempted.
        op: &'static str,
        /// Host-provided description of the failure.
        reason: String,
    },
    /// The shared board state was already borrowed when it had to be updated.
    #[error("board state busy; cannot {0}")]
    Busy(&'static str),
    /// A required host object (window, document, body) is unavailable.
    #[error("missing host element: {0}")]
    MissingElement(&'static str),
    /// Board configuration JSON could not be parsed.
    #[error("invalid board config: {0}")]
    Config(#[from] serde_json::Error),
    /// Text did not name one of the 64 squares.
    #[error("invalid square key: {0:?}")]
    InvalidKey(String),
}

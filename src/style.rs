//! Transform property negotiation.
//!
//! Older engines only expose a vendor-prefixed transform property. The
//! supported one is detected once against the host's style declaration and
//! cached for the rest of the process; every later transform write uses the
//! cached answer.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::cell::OnceCell;

/// Name under which the host exposes CSS transforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformProperty {
    Standard,
    Webkit,
    Moz,
    Opera,
    Ms,
}

impl TransformProperty {
    /// Candidates in preference order.
    pub const CANDIDATES: [Self; 5] = [Self::Standard, Self::Webkit, Self::Moz, Self::Opera, Self::Ms];

    /// Property key on a style declaration object.
    #[must_use]
    pub fn style_key(self) -> &'static str {
        match self {
            Self::Standard => "transform",
            Self::Webkit => "webkitTransform",
            Self::Moz => "mozTransform",
            Self::Opera => "oTransform",
            Self::Ms => "msTransform",
        }
    }

    /// CSS property name for `setProperty`.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Standard => "transform",
            Self::Webkit => "-webkit-transform",
            Self::Moz => "-moz-transform",
            Self::Opera => "-o-transform",
            Self::Ms => "-ms-transform",
        }
    }
}

/// Rendering features negotiated with the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub transform: TransformProperty,
}

impl Capabilities {
    /// Pick the first supported candidate; `msTransform` when none is reported.
    #[must_use]
    pub fn negotiate(supports: impl Fn(&str) -> bool) -> Self {
        let transform = TransformProperty::CANDIDATES
            .into_iter()
            .find(|candidate| supports(candidate.style_key()))
            .unwrap_or(TransformProperty::Ms);
        Self { transform }
    }
}

thread_local! {
    static CAPABILITIES: OnceCell<Capabilities> = const { OnceCell::new() };
}

/// Cached capabilities, running `detect` only on the first call.
pub fn capabilities(detect: impl FnOnce() -> Capabilities) -> Capabilities {
    CAPABILITIES.with(|cell| *cell.get_or_init(detect))
}

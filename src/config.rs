//! Serializable board configuration.
//!
//! Every field has a default, so a partial JSON object (or `{}`) is valid.
//! Applying a config to a live board goes through
//! [`crate::controller::BoardInput::reconfigure`], which rebinds listeners
//! when the binding-relevant flags change.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geom::Color;

/// Annotation settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DrawableConfig {
    /// Shift-drag and right-drag draw annotations instead of moving pieces.
    pub enabled: bool,
}

impl Default for DrawableConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Board input configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Board is display-only; no gesture listeners are bound for dragging.
    pub view_only: bool,
    /// Always suppress the native context menu on the board.
    pub disable_context_menu: bool,
    /// Listen for the board-resize notification and redraw on it.
    pub resizable: bool,
    /// Side shown at the bottom of the board.
    pub orientation: Color,
    pub drawable: DrawableConfig,
}

impl BoardConfig {
    /// Parse a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed JSON or mistyped fields.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize back to JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// Whether switching from `self` to `next` requires rebinding listeners.
    #[must_use]
    pub fn needs_rebind(&self, next: &Self) -> bool {
        self.view_only != next.view_only
            || self.resizable != next.resizable
            || self.disable_context_menu != next.disable_context_menu
            || self.drawable.enabled != next.drawable.enabled
    }
}

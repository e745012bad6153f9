//! Shared constants for the board input crate.

// ── Board ───────────────────────────────────────────────────────

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: u8 = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 64;

/// Pixel offset used to park an element far outside any plausible viewport.
pub const TRANSLATE_AWAY_PX: f64 = -99_999.0;

// ── Buttons ─────────────────────────────────────────────────────

/// `MouseEvent.button` code of the secondary button.
pub const SECONDARY_BUTTON: i16 = 2;

/// `MouseEvent.buttons` mask when only the secondary button is held.
pub const SECONDARY_BUTTONS_MASK: u16 = 2;

// ── Event names ─────────────────────────────────────────────────

/// Gesture start events bound on the board surface.
pub const START_EVENTS: [&str; 2] = ["touchstart", "mousedown"];

/// Gesture continue events bound on the document.
pub const MOVE_EVENTS: [&str; 2] = ["touchmove", "mousemove"];

/// Gesture release events bound on the document.
pub const END_EVENTS: [&str; 2] = ["touchend", "mouseup"];

/// Native context menu event.
pub const CONTEXT_MENU_EVENT: &str = "contextmenu";

/// Custom notification dispatched on the body when the board container is resized.
pub const RESIZE_EVENT: &str = "board.resize";

/// Window scroll event.
pub const SCROLL_EVENT: &str = "scroll";

/// Window resize event.
pub const WINDOW_RESIZE_EVENT: &str = "resize";

//! Board coordinate system: square keys, positions and pixel translation.
//!
//! A square has two names. The [`Key`] is the human-readable one (`"e4"`), the
//! [`Pos`] is a zero-based `(file, rank)` pair used for arithmetic. The two
//! convert into each other through [`key_to_pos`] and [`pos_to_key`], a total
//! bijection over the 64 squares.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{BOARD_SIZE, SQUARE_COUNT, TRANSLATE_AWAY_PX};
use crate::error::Error;

/// A pair of viewport pixel values, `(x, y)`.
pub type NumberPair = (f64, f64);

/// Side of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// Both colors, white first.
    pub const ALL: [Self; 2] = [Self::White, Self::Black];

    /// The other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

/// Kind of piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// A piece on (or being dragged onto) the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub role: Role,
    pub color: Color,
    #[serde(default)]
    pub promoted: bool,
}

impl Piece {
    #[must_use]
    pub fn new(role: Role, color: Color) -> Self {
        Self { role, color, promoted: false }
    }
}

/// Whether two pieces have the same role and color, ignoring promotion.
#[must_use]
pub fn same_piece(a: &Piece, b: &Piece) -> bool {
    a.role == b.role && a.color == b.color
}

/// Zero-based square coordinates. `file` 0 is the a-file, `rank` 0 is rank 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub file: u8,
    pub rank: u8,
}

impl Pos {
    /// Build a position, or `None` when either coordinate is off the board.
    #[must_use]
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < BOARD_SIZE && rank < BOARD_SIZE).then_some(Self { file, rank })
    }

    /// Squared distance to `other`, in squares.
    #[must_use]
    pub fn distance_sq(self, other: Self) -> u32 {
        let df = u32::from(self.file.abs_diff(other.file));
        let dr = u32::from(self.rank.abs_diff(other.rank));
        df * df + dr * dr
    }

    /// The position as a floating-point pair, for mixing with pixel math.
    #[must_use]
    pub fn to_pair(self) -> NumberPair {
        (f64::from(self.file), f64::from(self.rank))
    }
}

/// Human-readable square name: file letter `a`-`h` followed by rank digit `1`-`8`.
///
/// Construct from text with [`str::parse`]; every other constructor yields a
/// valid square by construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key([u8; 2]);

impl Key {
    /// The key as a two-character string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII by construction.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self.as_str())
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Ok(Self([*file, *rank])),
            _ => Err(Error::InvalidKey(s.to_owned())),
        }
    }
}

impl Serialize for Key {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Every square, files a to h outer, ranks 8 to 1 inner.
///
/// Index of a square is `8 * file + (7 - rank)` in zero-based coordinates.
pub const ALL_KEYS: [Key; SQUARE_COUNT] = all_keys();

const fn all_keys() -> [Key; SQUARE_COUNT] {
    let mut keys = [Key([b'a', b'1']); SQUARE_COUNT];
    let mut file = 0u8;
    while file < BOARD_SIZE {
        let mut step = 0u8;
        while step < BOARD_SIZE {
            let rank = BOARD_SIZE - 1 - step;
            keys[(file * BOARD_SIZE + step) as usize] = Key([b'a' + file, b'1' + rank]);
            step += 1;
        }
        file += 1;
    }
    keys
}

/// Position of a key.
#[must_use]
pub fn key_to_pos(key: Key) -> Pos {
    let [file, rank] = key.0;
    Pos { file: file - b'a', rank: rank - b'1' }
}

/// Key of a position.
///
/// `pos` must be on the board; off-board coordinates are a caller bug.
#[must_use]
pub fn pos_to_key(pos: Pos) -> Key {
    let index = usize::from(pos.file) * usize::from(BOARD_SIZE) + usize::from(BOARD_SIZE - 1 - pos.rank);
    ALL_KEYS[index]
}

/// Squared Euclidean distance between two pixel pairs.
///
/// No square root: callers compare against squared thresholds on hot move paths.
#[must_use]
pub fn distance_sq(a: NumberPair, b: NumberPair) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx * dx + dy * dy
}

/// Whether `xs` is present and contains `x`.
#[must_use]
pub fn contains_x<X: PartialEq>(xs: Option<&[X]>, x: &X) -> bool {
    xs.is_some_and(|xs| xs.contains(x))
}

/// Board surface rectangle in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pixel offset of a square's top-left corner inside the board.
///
/// The board is drawn from white's side when `as_white` is set and flipped
/// otherwise. Offsets scale with the board's current pixel size.
#[must_use]
pub fn pos_to_translate(pos: Pos, as_white: bool, bounds: &Bounds) -> NumberPair {
    let last = f64::from(BOARD_SIZE - 1);
    let size = f64::from(BOARD_SIZE);
    let (file, rank) = pos.to_pair();
    let col = if as_white { file } else { last - file };
    let row = if as_white { last - rank } else { rank };
    (col * bounds.width / size, row * bounds.height / size)
}

/// CSS `translate()` value for a pixel pair.
#[must_use]
pub fn translate(pair: NumberPair) -> String {
    format!("translate({}px,{}px)", pair.0, pair.1)
}

/// Translation that parks an element far off screen.
pub const TRANSLATE_AWAY: NumberPair = (TRANSLATE_AWAY_PX, TRANSLATE_AWAY_PX);

/// CSS value for [`TRANSLATE_AWAY`].
#[must_use]
pub fn translate_away() -> String {
    translate(TRANSLATE_AWAY)
}

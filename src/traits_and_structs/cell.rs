use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A 24-bit RGB color, written as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Largest value a color can hold; anything above is masked off.
    pub const MAX: u32 = 0x00ff_ffff;

    pub const fn from_rgb_u32(value: u32) -> Self {
        Self(value & Self::MAX)
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8, 0xff]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid color {0:?}, expected #RRGGBB")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // from_str_radix alone would let a sign through.
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ParseColorError(s.to_string()))?;
        u32::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|_| ParseColorError(s.to_string()))
    }
}

/// One grid square. A dead cell never carries a color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
    color: Option<Color>,
}

impl Cell {
    pub const DEAD: Cell = Cell {
        alive: false,
        color: None,
    };

    /// Alive but without a color of its own; it never passes one on to births.
    pub const ALIVE: Cell = Cell {
        alive: true,
        color: None,
    };

    pub fn alive_with(color: Color) -> Self {
        Self {
            alive: true,
            color: Some(color),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Flips the cell. A cell coming alive takes `fresh`; a dying cell drops its color.
    #[must_use]
    pub fn toggled(self, fresh: impl FnOnce() -> Color) -> Self {
        if self.alive {
            Self::DEAD
        } else {
            Self::alive_with(fresh())
        }
    }
}

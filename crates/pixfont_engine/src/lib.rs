#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use serde::{Deserialize, Serialize};

mod error;
pub use error::*;

mod color;
pub use color::*;

mod font;
pub use font::*;

pub mod bitmask;

pub mod raster;

/// Number of character codes a complete font covers (0..=255).
pub const FONT_LENGTH: usize = 256;

/// Glyph width fixed by the bitmask file format (one byte per pixel row).
pub const BITMASK_WIDTH: i32 = 8;

#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(width: {}, height: {})", self.width, self.height)
    }
}

impl PartialEq for Size {
    fn eq(&self, other: &Size) -> bool {
        self.width == other.width && self.height == other.height
    }
}

impl Eq for Size {}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    /// Number of cells in a glyph grid of this size.
    pub fn cells(&self) -> usize {
        (self.width * self.height).max(0) as usize
    }
}

impl From<(usize, usize)> for Size {
    fn from(value: (usize, usize)) -> Self {
        Size {
            width: value.0 as i32,
            height: value.1 as i32,
        }
    }
}

impl From<(i32, i32)> for Size {
    fn from(value: (i32, i32)) -> Self {
        Size {
            width: value.0,
            height: value.1,
        }
    }
}

impl From<(u8, u8)> for Size {
    fn from(value: (u8, u8)) -> Self {
        Size {
            width: value.0 as i32,
            height: value.1 as i32,
        }
    }
}

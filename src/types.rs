use crate::color::HexColor;

/// Number of cells in every palette.
pub const PALETTE_SIZE: usize = 5;

/// Position of a cell inside the palette, `0..PALETTE_SIZE`.
pub type CellIndex = usize;

/// A single palette slot: its current color and whether re-rolls skip it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub color: HexColor,
    pub locked: bool,
}

impl Cell {
    pub fn unlocked(color: HexColor) -> Self {
        Self {
            color,
            locked: false,
        }
    }
}

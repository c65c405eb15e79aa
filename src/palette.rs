//! The five-cell palette and the rules for re-rolling and locking cells.

use tracing::debug;

use crate::color::{ColorSource, HexColor, RandomSource};
use crate::types::{Cell, CellIndex, PALETTE_SIZE};

/// Owned palette state. Colors come from `S`, so tests can script them.
///
/// Index arguments must be below [`PALETTE_SIZE`]; anything else is a caller
/// bug and panics.
#[derive(Debug)]
pub struct Palette<S = RandomSource> {
    cells: [Cell; PALETTE_SIZE],
    source: S,
}

impl<S: ColorSource> Palette<S> {
    /// A fresh palette: every cell unlocked with its own random color.
    pub fn new(mut source: S) -> Self {
        let cells = std::array::from_fn(|_| Cell::unlocked(source.next_color()));
        Self { cells, source }
    }

    /// A palette starting from known colors, all unlocked.
    pub fn with_colors(colors: [HexColor; PALETTE_SIZE], source: S) -> Self {
        Self {
            cells: colors.map(Cell::unlocked),
            source,
        }
    }

    /// Re-roll every unlocked cell. Locked cells keep their color.
    pub fn regenerate_all(&mut self) {
        for index in 0..PALETTE_SIZE {
            self.regenerate_one(index);
        }
    }

    /// Re-roll a single cell unless it is locked.
    pub fn regenerate_one(&mut self, index: CellIndex) {
        let cell = &mut self.cells[index];
        if cell.locked {
            debug!(index, color = %cell.color, "cell locked, skipping regenerate");
            return;
        }
        cell.color = self.source.next_color();
        debug!(index, color = %cell.color, "regenerated cell");
    }

    pub fn toggle_lock(&mut self, index: CellIndex) {
        let cell = &mut self.cells[index];
        cell.locked = !cell.locked;
        debug!(index, locked = cell.locked, "toggled lock");
    }

    /// Clear every lock flag; colors are untouched.
    pub fn unlock_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.locked = false;
        }
        debug!("unlocked all cells");
    }
}

impl<S> Palette<S> {
    pub fn cells(&self) -> &[Cell; PALETTE_SIZE] {
        &self.cells
    }

    /// Ordered snapshot of the current colors, index for index with the cells.
    pub fn colors(&self) -> [HexColor; PALETTE_SIZE] {
        self.cells.map(|cell| cell.color)
    }

    pub fn color(&self, index: CellIndex) -> HexColor {
        self.cells[index].color
    }

    pub fn is_locked(&self, index: CellIndex) -> bool {
        self.cells[index].locked
    }

    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.locked).count()
    }
}

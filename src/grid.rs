//! Grid storage with per-cell write-once dirty tracking.
//!
//! One bit per cell records whether the cell already received its final value
//! for the current render cycle; later writes to a dirty cell are ignored,
//! which is what lets higher-priority content painted first obscure whatever
//! drains after it.

use crate::error::FrameError;
use bitvec::prelude::*;

/// A single grid cell.
///
/// The line-break sentinel is its own variant so it stays distinct from the
/// whitespace fill byte and from every literal payload byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cell {
    /// A literal byte; freshly cleared cells hold the fill byte.
    Glyph(u8),
    /// Render a line break here and stop scanning the rest of the row.
    LineBreak,
}

/// Row-major cell storage with a parallel dirty map.
///
/// Allocated once for the owning frame's lifetime; [`Grid::clear`] resets the
/// contents in place so steady-state rendering performs no allocations.
#[derive(Debug)]
pub(crate) struct Grid {
    cells: Vec<Cell>,
    dirty: BitVec,
    width: usize,
    height: usize,
    fill: u8,
}

impl Grid {
    /// Create a grid of `width * height` cells holding the fill byte.
    pub(crate) fn new(width: usize, height: usize, fill: u8) -> Result<Self, FrameError> {
        let size = width
            .checked_mul(height)
            .ok_or(FrameError::InvalidDimensions { width, height })?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(size)?;
        cells.resize(size, Cell::Glyph(fill));
        Ok(Self {
            cells,
            dirty: bitvec![0; size],
            width,
            height,
            fill,
        })
    }

    /// Grid width in cells.
    pub(crate) const fn width(&self) -> usize {
        self.width
    }

    /// Total cell count.
    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Set a cell, unless it already received a write this cycle.
    ///
    /// Callers keep `index` in bounds; the drain loop clips before calling.
    pub(crate) fn put(&mut self, index: usize, cell: Cell) {
        debug_assert!(index < self.cells.len());
        if !self.dirty[index] {
            self.cells[index] = cell;
            self.dirty.set(index, true);
        }
    }

    /// Whether `index` received a write this cycle.
    #[cfg(test)]
    pub(crate) fn is_dirty(&self, index: usize) -> bool {
        self.dirty[index]
    }

    /// Reset every cell to the fill byte and every dirty bit to false.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Glyph(self.fill));
        self.dirty.fill(false);
    }

    /// Flatten into `out`: one `\n`-terminated line per row, each row cut
    /// short at a line-break sentinel.
    ///
    /// `out` is cleared first and reused across cycles; it only grows.
    pub(crate) fn flatten_into(&self, out: &mut Vec<u8>) -> Result<(), FrameError> {
        out.clear();
        out.try_reserve(self.cells.len().saturating_add(self.height))?;
        for row in self.cells.chunks(self.width) {
            for cell in row {
                match *cell {
                    Cell::Glyph(byte) => out.push(byte),
                    Cell::LineBreak => break,
                }
            }
            out.push(b'\n');
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(10, 5, b' ').unwrap();
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.len(), 50);
    }

    #[test]
    fn test_grid_overflow_dimensions() {
        let err = Grid::new(usize::MAX, 2, b' ').unwrap_err();
        assert!(matches!(err, FrameError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_put_marks_dirty() {
        let mut grid = Grid::new(4, 2, b' ').unwrap();
        assert!(!grid.is_dirty(3));
        grid.put(3, Cell::Glyph(b'X'));
        assert!(grid.is_dirty(3));
    }

    #[test]
    fn test_put_is_write_once() {
        let mut grid = Grid::new(4, 2, b' ').unwrap();
        grid.put(0, Cell::Glyph(b'A'));
        grid.put(0, Cell::Glyph(b'B'));

        let mut out = Vec::new();
        grid.flatten_into(&mut out).unwrap();
        assert_eq!(out[0], b'A');
    }

    #[test]
    fn test_clear_resets_cells_and_dirty() {
        let mut grid = Grid::new(3, 1, b'.').unwrap();
        grid.put(1, Cell::Glyph(b'X'));
        grid.clear();
        assert!(!grid.is_dirty(1));

        let mut out = Vec::new();
        grid.flatten_into(&mut out).unwrap();
        assert_eq!(out, b"...\n");
    }

    #[test]
    fn test_clear_allows_rewrite() {
        let mut grid = Grid::new(2, 1, b' ').unwrap();
        grid.put(0, Cell::Glyph(b'A'));
        grid.clear();
        grid.put(0, Cell::Glyph(b'B'));

        let mut out = Vec::new();
        grid.flatten_into(&mut out).unwrap();
        assert_eq!(out, b"B \n");
    }

    #[test]
    fn test_flatten_empty_grid() {
        let grid = Grid::new(3, 2, b' ').unwrap();
        let mut out = Vec::new();
        grid.flatten_into(&mut out).unwrap();
        assert_eq!(out, b"   \n   \n");
    }

    #[test]
    fn test_flatten_stops_row_at_line_break() {
        let mut grid = Grid::new(4, 2, b' ').unwrap();
        grid.put(0, Cell::Glyph(b'a'));
        grid.put(1, Cell::LineBreak);
        grid.put(2, Cell::Glyph(b'x')); // unreachable: after the sentinel
        grid.put(4, Cell::Glyph(b'b'));

        let mut out = Vec::new();
        grid.flatten_into(&mut out).unwrap();
        assert_eq!(out, b"a\nb   \n");
    }

    #[test]
    fn test_flatten_custom_fill() {
        let grid = Grid::new(2, 2, b'*').unwrap();
        let mut out = Vec::new();
        grid.flatten_into(&mut out).unwrap();
        assert_eq!(out, b"**\n**\n");
    }

    #[test]
    fn test_flatten_reuses_output_buffer() {
        let grid = Grid::new(2, 1, b' ').unwrap();
        let mut out = Vec::with_capacity(64);
        grid.flatten_into(&mut out).unwrap();
        let cap = out.capacity();
        grid.flatten_into(&mut out).unwrap();
        assert_eq!(out.capacity(), cap);
        assert_eq!(out, b"  \n");
    }
}

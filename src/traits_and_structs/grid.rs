use std::sync::Arc;

use super::cell::Cell;

/// A square board of cells stored row-major.
///
/// Cloning is cheap: clones share the cell buffer until one of them is
/// edited, at which point the editor gets its own copy. A grid stored in the
/// history therefore never observes later edits to the live grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Arc<Vec<Cell>>,
}

impl Grid {
    /// An all-dead board. `size` must be at least 1.
    pub fn new_empty(size: usize) -> Self {
        assert!(size != 0);
        let len = size.checked_mul(size).expect("too big");
        Self {
            size,
            cells: Arc::new(vec![Cell::DEAD; len]),
        }
    }

    /// Builds a grid from its rows. Every row must be `rows.len()` long.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let size = rows.len();
        assert!(size != 0);
        assert!(rows.iter().all(|row| row.len() == size), "grid must be square");
        Self {
            size,
            cells: Arc::new(rows.into_iter().flatten().collect()),
        }
    }

    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self {
            size,
            cells: Arc::new(cells),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[cfg(test)]
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.size)
    }

    #[cfg(test)]
    pub(crate) fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Converts signed coordinates into a buffer index, `None` when off the board.
    pub fn grid_idx<I: TryInto<usize>>(&self, row: I, col: I) -> Option<usize> {
        if let (Ok(row), Ok(col)) = (row.try_into(), col.try_into()) {
            self.index(row, col)
        } else {
            None
        }
    }

    /// Returns a new grid with the cell at `idx` replaced by `f(cell)`.
    #[must_use]
    pub(crate) fn with_cell(&self, idx: usize, f: impl FnOnce(Cell) -> Cell) -> Self {
        let mut next = self.clone();
        let cells = Arc::make_mut(&mut next.cells);
        cells[idx] = f(cells[idx]);
        next
    }

    /// True when both grids share one cell buffer.
    #[cfg(test)]
    pub(crate) fn shares_cells_with(&self, other: &Grid) -> bool {
        Arc::ptr_eq(&self.cells, &other.cells)
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.size && col < self.size {
            Some(col + row * self.size)
        } else {
            None
        }
    }
}

//! Transition rule for colored Life on a bounded board.
//!
//! Neighborhoods are clamped at the edges: a corner looks at three cells, an
//! edge cell at five, everything else at eight. Nothing wraps.

use log::debug;

use crate::traits_and_structs::{Cell, Color, ColorSource, Grid};

pub fn has_correct_population_for_survival(alive_neighbors: usize) -> bool {
    matches!(alive_neighbors, 2 | 3)
}

pub fn has_correct_population_for_birth(alive_neighbors: usize) -> bool {
    alive_neighbors == 3
}

/// Positions around `(row, col)` in row-major order, the cell itself excluded.
fn neighborhood(size: usize, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let last = size - 1;
    (row.saturating_sub(1)..=(row + 1).min(last))
        .flat_map(move |r| (col.saturating_sub(1)..=(col + 1).min(last)).map(move |c| (r, c)))
        .filter(move |&pos| pos != (row, col))
}

fn neighbors(grid: &Grid, row: usize, col: usize) -> impl Iterator<Item = &Cell> + '_ {
    let cells = grid.cells();
    let size = grid.size();
    neighborhood(size, row, col).map(move |(r, c)| &cells[c + r * size])
}

pub fn count_alive_neighbors(grid: &Grid, row: usize, col: usize) -> usize {
    neighbors(grid, row, col).filter(|n| n.is_alive()).count()
}

/// Most frequent color among the alive, colored neighbors of `(row, col)`.
///
/// Colors are tallied in scan order. On equal counts the color met first in
/// the scan wins.
pub fn find_prevalent_color(grid: &Grid, row: usize, col: usize) -> Option<Color> {
    let mut tally: Vec<(Color, u8)> = Vec::with_capacity(8);
    for color in neighbors(grid, row, col)
        .filter(|n| n.is_alive())
        .filter_map(Cell::color)
    {
        match tally.iter_mut().find(|(seen, _)| *seen == color) {
            Some((_, count)) => *count += 1,
            None => tally.push((color, 1)),
        }
    }

    let mut prevalent = None;
    let mut max_count = 0;
    for (color, count) in tally {
        if count > max_count {
            prevalent = Some(color);
            max_count = count;
        }
    }
    prevalent
}

/// Flips one cell and returns the new board. Off-board coordinates give back
/// an unchanged copy.
pub fn toggle_cell(grid: &Grid, row: isize, col: isize, colors: &mut impl ColorSource) -> Grid {
    match grid.grid_idx(row, col) {
        Some(idx) => grid.with_cell(idx, |cell| cell.toggled(|| colors.next_color())),
        None => grid.clone(),
    }
}

/// Computes the following generation.
pub fn next_generation(grid: &Grid, colors: &mut impl ColorSource) -> Grid {
    let size = grid.size();
    let mut next = Vec::with_capacity(size * size);
    for (idx, cell) in grid.cells().iter().enumerate() {
        let (row, col) = (idx / size, idx % size);
        let alive_neighbors = count_alive_neighbors(grid, row, col);
        let cell = if cell.is_alive() && has_correct_population_for_survival(alive_neighbors) {
            *cell
        } else if !cell.is_alive() && has_correct_population_for_birth(alive_neighbors) {
            let color = find_prevalent_color(grid, row, col).unwrap_or_else(|| colors.next_color());
            Cell::alive_with(color)
        } else {
            Cell::DEAD
        };
        next.push(cell);
    }
    Grid::from_cells(size, next)
}

/// Owns the live board and the color source used for births and toggles.
pub struct GridEngine<C> {
    grid: Grid,
    colors: C,
}

impl<C: ColorSource> GridEngine<C> {
    pub fn new(size: usize, colors: C) -> Self {
        Self {
            grid: Grid::new_empty(size),
            colors,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn toggle_cell(&mut self, row: isize, col: isize) {
        debug!("toggle ({}, {})", row, col);
        self.grid = toggle_cell(&self.grid, row, col, &mut self.colors);
    }

    /// Advances one generation and hands back the board as it was before.
    pub fn step(&mut self) -> Grid {
        let next = next_generation(&self.grid, &mut self.colors);
        std::mem::replace(&mut self.grid, next)
    }

    /// Swaps in a board taken from history.
    pub fn replace(&mut self, grid: Grid) {
        debug_assert_eq!(grid.size(), self.grid.size());
        self.grid = grid;
    }

    pub fn clear(&mut self) {
        self.grid = Grid::new_empty(self.grid.size());
    }
}

use crate::life::viewport::{Point, Viewport};
use crate::traits_and_structs::{Cell, Color, Grid};

pub const GRID_COLOR: Color = Color::rgb(0xcc, 0xcc, 0xcc);
pub const DEAD_COLOR: Color = Color::rgb(0xff, 0xff, 0xff);
/// Used for alive cells that never got a color.
pub const ALIVE_FALLBACK: Color = Color::rgb(0x20, 0x20, 0x20);
/// Cells drawn smaller than this many pixels get no grid gap.
const MIN_GAPPED_CELL_PX: f32 = 4.0;

fn cell_color(cell: &Cell) -> Color {
    if cell.is_alive() {
        cell.color().unwrap_or(ALIVE_FALLBACK)
    } else {
        DEAD_COLOR
    }
}

/// Paints `grid` into an RGBA `screen` of `width` pixels per row, as seen
/// through `viewport`.
pub fn draw(grid: &Grid, viewport: &Viewport, screen: &mut [u8], width: usize) {
    debug_assert_eq!(screen.len() % (4 * width), 0);
    let cell_size = viewport.cell_size();
    let gapped = cell_size * viewport.zoom() >= MIN_GAPPED_CELL_PX;
    let gap = 1.0 / viewport.zoom();

    for (i, pix) in screen.chunks_exact_mut(4).enumerate() {
        let (x, y) = (i % width, i / width);
        let world = viewport.screen_to_world(Point::new(x as f32 + 0.5, y as f32 + 0.5));
        let col = (world.x / cell_size).floor();
        let row = (world.y / cell_size).floor();
        let on_line = gapped
            && (world.x - col * cell_size < gap || world.y - row * cell_size < gap);

        let color = match grid.grid_idx(row as isize, col as isize) {
            Some(_) if on_line => GRID_COLOR,
            Some(idx) => cell_color(&grid.cells()[idx]),
            None => GRID_COLOR,
        };
        pix.copy_from_slice(&color.to_rgba());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(0xff, 0, 0);

    fn pixel(screen: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
        let i = 4 * (x + y * width);
        [screen[i], screen[i + 1], screen[i + 2], screen[i + 3]]
    }

    #[test]
    fn small_cells_fill_without_gaps() {
        let grid = Grid::from_rows(vec![
            vec![Cell::alive_with(RED), Cell::DEAD],
            vec![Cell::ALIVE, Cell::DEAD],
        ]);
        let viewport = Viewport::new(4.0, 4.0, 2, 2.0);
        let mut screen = vec![0; 4 * 16];
        draw(&grid, &viewport, &mut screen, 4);

        assert_eq!(pixel(&screen, 4, 0, 0), RED.to_rgba());
        assert_eq!(pixel(&screen, 4, 1, 1), RED.to_rgba());
        assert_eq!(pixel(&screen, 4, 2, 0), DEAD_COLOR.to_rgba());
        assert_eq!(pixel(&screen, 4, 0, 3), ALIVE_FALLBACK.to_rgba());
        assert_eq!(pixel(&screen, 4, 3, 3), DEAD_COLOR.to_rgba());
    }

    #[test]
    fn large_cells_get_grid_lines() {
        let grid = Grid::from_rows(vec![
            vec![Cell::alive_with(RED), Cell::DEAD],
            vec![Cell::DEAD, Cell::DEAD],
        ]);
        let viewport = Viewport::new(20.0, 20.0, 2, 10.0);
        let mut screen = vec![0; 4 * 400];
        draw(&grid, &viewport, &mut screen, 20);

        assert_eq!(pixel(&screen, 20, 0, 0), GRID_COLOR.to_rgba());
        assert_eq!(pixel(&screen, 20, 5, 5), RED.to_rgba());
        assert_eq!(pixel(&screen, 20, 10, 5), GRID_COLOR.to_rgba());
        assert_eq!(pixel(&screen, 20, 15, 5), DEAD_COLOR.to_rgba());
    }

    #[test]
    fn zoom_and_pan_shift_the_picture() {
        let grid = Grid::from_rows(vec![
            vec![Cell::DEAD, Cell::DEAD],
            vec![Cell::DEAD, Cell::alive_with(RED)],
        ]);
        let mut viewport = Viewport::new(4.0, 4.0, 2, 2.0).with_zoom(2.0);
        viewport.pan_by(-4.0, -4.0);
        let mut screen = vec![0; 4 * 16];
        draw(&grid, &viewport, &mut screen, 4);
        // The bottom-right cell now fills the canvas, minus its 1px grid line.
        assert_eq!(pixel(&screen, 4, 0, 0), GRID_COLOR.to_rgba());
        assert_eq!(pixel(&screen, 4, 2, 2), RED.to_rgba());
        assert_eq!(pixel(&screen, 4, 3, 3), RED.to_rgba());
    }
}

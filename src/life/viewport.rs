//! Zoom and pan over the board.
//!
//! Screen space is canvas pixels. Drawing scales by `zoom` and then
//! translates by `pan`, so `screen = (world + pan) * zoom`, and pan is kept in
//! world units. A pan of `(0, 0)` pins the board's top-left corner to the
//! canvas origin; negative values scroll it up and left.

use log::debug;

/// Ceiling for zooming in.
pub const MAX_ZOOM: f32 = 10.0;
/// Zoom never drops below this, whatever the canvas and board sizes.
pub const MIN_ZOOM_FLOOR: f32 = 1.0;
/// Zoom change per unit of wheel delta.
pub const WHEEL_ZOOM_SPEED: f32 = 0.001;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Smallest zoom at which the board still covers the whole canvas.
pub fn compute_min_zoom(canvas_width: f32, canvas_height: f32, grid_size: usize, cell_size: f32) -> f32 {
    let extent = grid_size as f32 * cell_size;
    (canvas_width / extent)
        .max(canvas_height / extent)
        .max(MIN_ZOOM_FLOOR)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    canvas_width: f32,
    canvas_height: f32,
    grid_size: usize,
    cell_size: f32,
    zoom: f32,
    pan: Point,
}

impl Viewport {
    /// Starts fully zoomed out with the board pinned to the top-left corner.
    pub fn new(canvas_width: f32, canvas_height: f32, grid_size: usize, cell_size: f32) -> Self {
        let mut viewport = Self {
            canvas_width,
            canvas_height,
            grid_size,
            cell_size,
            zoom: MIN_ZOOM_FLOOR,
            pan: Point::default(),
        };
        viewport.zoom = viewport.min_zoom();
        viewport
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.set_zoom(zoom);
        self
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn min_zoom(&self) -> f32 {
        compute_min_zoom(self.canvas_width, self.canvas_height, self.grid_size, self.cell_size)
    }

    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.max(self.min_zoom()).min(MAX_ZOOM)
    }

    /// Keeps the visible window inside the board on both axes.
    pub fn clamp_pan(&self, offset: Point, zoom: f32) -> Point {
        let extent = self.grid_size as f32 * self.cell_size;
        let min_x = -(extent - self.canvas_width / zoom);
        let min_y = -(extent - self.canvas_height / zoom);
        Point {
            x: offset.x.max(min_x).min(0.0),
            y: offset.y.max(min_y).min(0.0),
        }
    }

    /// Re-clamps the current pan for a freshly applied zoom.
    pub fn adjust_pan_for_zoom(&mut self, new_zoom: f32) {
        self.pan = self.clamp_pan(self.pan, new_zoom);
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        let zoom = self.clamp_zoom(zoom);
        self.zoom = zoom;
        self.adjust_pan_for_zoom(zoom);
    }

    /// Applies a wheel delta. Positive deltas zoom out.
    pub fn zoom_by(&mut self, delta_y: f32) {
        self.set_zoom(self.zoom - delta_y * WHEEL_ZOOM_SPEED);
        debug!("zoom {:.3}", self.zoom);
    }

    /// Moves the board by a screen-space delta.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        let moved = Point::new(self.pan.x + dx / self.zoom, self.pan.y + dy / self.zoom);
        self.pan = self.clamp_pan(moved, self.zoom);
    }

    /// World coordinates under a canvas point.
    pub fn screen_to_world(&self, point: Point) -> Point {
        Point::new(point.x / self.zoom - self.pan.x, point.y / self.zoom - self.pan.y)
    }

    /// `(row, col)` under a canvas point. The result may lie off the board.
    pub fn screen_to_grid(&self, point: Point) -> (isize, isize) {
        let world = self.screen_to_world(point);
        let col = (world.x / self.cell_size).floor() as isize;
        let row = (world.y / self.cell_size).floor() as isize;
        (row, col)
    }
}

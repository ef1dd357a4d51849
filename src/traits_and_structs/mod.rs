pub mod cell;
pub mod color_source;
pub mod grid;

pub use cell::{Cell, Color};
pub use color_source::{ColorSource, CycleColors};
pub use grid::Grid;

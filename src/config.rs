use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::life::playback::{DEFAULT_SPEED_MS, MAX_SPEED_MS, MIN_SPEED_MS};

pub const MIN_GRID_SIZE: usize = 3;
pub const MAX_GRID_SIZE: usize = 1000;
/// Boards at least this large open zoomed in.
pub const ZOOMED_START_SIZE: usize = 100;
pub const ZOOMED_START_LEVEL: f32 = 5.0;

/// Key that switches dragging from painting to panning and enables wheel zoom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ModifierKey {
    #[default]
    Control,
    Shift,
    Alt,
    Logo,
}

#[derive(Debug, Parser)]
#[command(name = "life_canvas", about = "Colored Game of Life with pan, zoom and history")]
pub struct Args {
    /// Cells per side of the square board.
    #[arg(long, default_value_t = 50)]
    pub size: usize,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800)]
    pub canvas_width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 800)]
    pub canvas_height: u32,

    /// Milliseconds between generations while playing.
    #[arg(long, default_value_t = DEFAULT_SPEED_MS)]
    pub speed: u64,

    /// Fixed seed for cell colors; drawn from the OS when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Key held to pan and zoom.
    #[arg(long, value_enum, default_value_t = ModifierKey::Control)]
    pub modifier: ModifierKey,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size {0} is outside {min}..={max}", min = MIN_GRID_SIZE, max = MAX_GRID_SIZE)]
    Size(usize),
    #[error("speed {0} ms is outside {min}..={max}", min = MIN_SPEED_MS, max = MAX_SPEED_MS)]
    Speed(u64),
    #[error("canvas must be at least 1x1 pixels, got {0}x{1}")]
    Canvas(u32, u32),
}

/// Validated startup settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub size: usize,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub speed_ms: u64,
    pub seed: Option<u64>,
    pub modifier: ModifierKey,
}

impl Config {
    /// Side length of one cell in canvas pixels at zoom 1.
    pub fn cell_size(&self) -> f32 {
        self.canvas_width as f32 / self.size as f32
    }

    pub fn initial_zoom(&self) -> f32 {
        if self.size < ZOOMED_START_SIZE {
            1.0
        } else {
            ZOOMED_START_LEVEL
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&args.size) {
            return Err(ConfigError::Size(args.size));
        }
        if !(MIN_SPEED_MS..=MAX_SPEED_MS).contains(&args.speed) {
            return Err(ConfigError::Speed(args.speed));
        }
        if args.canvas_width == 0 || args.canvas_height == 0 {
            return Err(ConfigError::Canvas(args.canvas_width, args.canvas_height));
        }
        Ok(Self {
            size: args.size,
            canvas_width: args.canvas_width,
            canvas_height: args.canvas_height,
            speed_ms: args.speed,
            seed: args.seed,
            modifier: args.modifier,
        })
    }
}

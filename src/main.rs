#![deny(clippy::all)]
#![forbid(unsafe_code)]

use clap::Parser;

use life_canvas::config::{Args, Config};
use life_canvas::error::AppError;

fn main() -> Result<(), AppError> {
    env_logger::init();
    let config = Config::try_from(Args::parse())?;
    println!(
        "\nControls:\nP: play/pause\nSPACE: step once\nLEFT/RIGHT: previous/next step\nC: clear\nUP/DOWN: slower/faster\n{:?} + drag: pan\n{:?} + wheel: zoom\nESC: close",
        config.modifier, config.modifier
    );
    life_canvas::app::run(config)
}

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod app;
pub mod auxiliary;
pub mod config;
pub mod error;
pub mod life;
pub mod traits_and_structs;

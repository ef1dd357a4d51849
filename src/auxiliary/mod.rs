pub mod randomizer;
pub mod render;
pub mod window;

pub mod engine;
pub mod history;
pub mod interaction;
pub mod playback;
pub mod session;
pub mod viewport;

pub use session::Session;

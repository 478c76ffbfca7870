pub mod assistant;
pub mod config;
pub mod error;
pub mod models;
pub mod progress;
pub mod render;
pub mod session;
pub mod sources;

pub use error::{AireError, Result};
pub use session::Session;

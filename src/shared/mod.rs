pub mod errors;
pub mod hooks;
pub mod logging;
pub mod outside_click;
pub mod state;

pub use errors::{AppError, Result};

pub mod config;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod workflows;

pub use error::AppError;

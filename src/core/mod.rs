pub mod config;
pub mod error;
pub mod types;

pub use config::SpatialConfig;
pub use error::{Result, SpatialError};
pub use types::Point;

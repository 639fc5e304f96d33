pub mod config;
pub mod error;
pub mod tolerance;
pub mod traits;

pub use config::SamplingConfig;
pub use error::{Result, SurfError};
pub use tolerance::Tolerance;
pub use traits::Validate;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfError {
    #[error("Unknown surface kind: {0:?}")]
    UnknownSurfaceKind(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid resolution {0}: at least 2 samples per axis are required")]
    InvalidResolution(usize),

    #[error("Shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

pub type Result<T> = std::result::Result<T, SurfError>;

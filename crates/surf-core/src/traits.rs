use crate::error::Result;

/// Validate the invariants of a domain, configuration or surface description.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

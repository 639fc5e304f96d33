//! Closed real intervals and rectangular sampling domains.

use serde::{Deserialize, Serialize};
use surf_core::{Result, SurfError, Validate};

use crate::sampling::linspace;

/// A closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `n` evenly spaced samples from `min` to `max` inclusive.
    pub fn samples(&self, n: usize) -> Vec<f64> {
        linspace(self.min, self.max, n)
    }

    fn defect(&self) -> Option<String> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Some(format!("[{}, {}] has a non-finite bound", self.min, self.max));
        }
        if self.min >= self.max {
            return Some(format!("[{}, {}] is empty or inverted", self.min, self.max));
        }
        None
    }
}

impl From<(f64, f64)> for Interval {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

impl Validate for Interval {
    fn validate(&self) -> Result<()> {
        match self.defect() {
            Some(msg) => Err(SurfError::InvalidDomain(format!("interval {}", msg))),
            None => Ok(()),
        }
    }
}

/// A rectangular domain: an x-range and a y-range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub x: Interval,
    pub y: Interval,
}

impl Domain {
    /// Bound used for the default rendering domain `[-5, 5] x [-5, 5]`.
    pub const DEFAULT_EXTENT: f64 = 5.0;

    pub const fn new(x: Interval, y: Interval) -> Self {
        Self { x, y }
    }

    pub fn from_ranges(x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self::new(x_range.into(), y_range.into())
    }
}

impl Default for Domain {
    fn default() -> Self {
        let e = Self::DEFAULT_EXTENT;
        Self::new(Interval::new(-e, e), Interval::new(-e, e))
    }
}

impl Validate for Domain {
    fn validate(&self) -> Result<()> {
        if let Some(msg) = self.x.defect() {
            return Err(SurfError::InvalidDomain(format!("x-range {}", msg)));
        }
        if let Some(msg) = self.y.defect() {
            return Err(SurfError::InvalidDomain(format!("y-range {}", msg)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_domain() {
        let d = Domain::default();
        assert_eq!(d, Domain::from_ranges((-5.0, 5.0), (-5.0, 5.0)));
        d.validate().unwrap();
    }

    #[test]
    fn test_interval_samples() {
        let i = Interval::new(-2.0, 3.0);
        assert_eq!(i.samples(3), vec![-2.0, 0.5, 3.0]);
    }

    #[test]
    fn test_inverted_interval_rejected() {
        assert!(matches!(
            Interval::new(1.0, 1.0).validate(),
            Err(SurfError::InvalidDomain(_))
        ));
        assert!(matches!(
            Interval::new(2.0, -2.0).validate(),
            Err(SurfError::InvalidDomain(_))
        ));
    }

    #[test]
    fn test_non_finite_interval_rejected() {
        assert!(Interval::new(f64::NAN, 1.0).validate().is_err());
        assert!(Interval::new(0.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_domain_error_names_axis() {
        let d = Domain::from_ranges((-1.0, 1.0), (4.0, 3.0));
        match d.validate() {
            Err(SurfError::InvalidDomain(msg)) => assert!(msg.starts_with("y-range"), "{}", msg),
            other => panic!("expected InvalidDomain, got {:?}", other),
        }
    }
}

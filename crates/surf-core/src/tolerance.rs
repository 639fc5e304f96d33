/// Tolerances for comparing sampled coordinates.
///
/// Two values are considered equal when they differ by less than `absolute`,
/// or by less than `relative` times the larger magnitude. Non-finite values
/// only match themselves: NaN equals NaN, and an infinity equals the
/// infinity of the same sign.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    pub absolute: f64,
    pub relative: f64,
}

impl Tolerance {
    pub const DEFAULT_ABSOLUTE: f64 = 1e-9;
    pub const DEFAULT_RELATIVE: f64 = 1e-12;

    pub fn default_precision() -> Self {
        Self {
            absolute: Self::DEFAULT_ABSOLUTE,
            relative: Self::DEFAULT_RELATIVE,
        }
    }

    /// Bitwise-equivalent comparison, used for reproducibility checks.
    pub fn exact() -> Self {
        Self {
            absolute: 0.0,
            relative: 0.0,
        }
    }

    /// Check if two values are equal within tolerance.
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return a.is_nan() && b.is_nan();
        }
        if a.is_infinite() || b.is_infinite() {
            return a == b;
        }
        let diff = (a - b).abs();
        diff <= self.absolute || diff <= self.relative * a.abs().max(b.abs())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_and_relative() {
        let tol = Tolerance::default();
        assert!(tol.approx_eq(1.0, 1.0 + 1e-10));
        assert!(!tol.approx_eq(1.0, 1.0 + 1e-6));
        // Large magnitudes fall back to the relative bound
        assert!(tol.approx_eq(1e6, 1e6 + 1e-7));
    }

    #[test]
    fn test_non_finite() {
        let tol = Tolerance::default();
        assert!(tol.approx_eq(f64::NAN, f64::NAN));
        assert!(!tol.approx_eq(f64::NAN, 0.0));
        assert!(tol.approx_eq(f64::INFINITY, f64::INFINITY));
        assert!(!tol.approx_eq(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!tol.approx_eq(f64::INFINITY, 1e300));
    }

    #[test]
    fn test_exact() {
        let tol = Tolerance::exact();
        assert!(tol.approx_eq(0.1 + 0.2, 0.1 + 0.2));
        assert!(!tol.approx_eq(0.1 + 0.2, 0.3));
    }
}

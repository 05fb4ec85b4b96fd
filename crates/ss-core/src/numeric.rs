use crate::ModelError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute and relative tolerance pair for approximate comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Exact comparison.
    pub fn exact() -> Self {
        Self { abs: 0.0, rel: 0.0 }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Compare two equally long slices element-wise.
pub fn slices_nearly_equal(a: &[Real], b: &[Real], tol: Tolerances) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| nearly_equal(x, y, tol))
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, ModelError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ModelError::NonFinite { what, value: v })
    }
}

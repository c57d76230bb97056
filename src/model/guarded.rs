//! Division guards
//!
//! Every division in the model goes through these helpers so that zero or
//! non-finite denominators turn into `None` instead of NaN/Inf.

/// `numerator / denominator`, or `None` when the denominator is not positive
/// or the quotient is not finite
pub fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if !(denominator > 0.0) || !denominator.is_finite() {
        return None;
    }
    let q = numerator / denominator;
    q.is_finite().then_some(q)
}

/// Like [`ratio`] but substitutes zero for an undefined quotient
pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    ratio(numerator, denominator).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        assert_eq!(ratio(10.0, 4.0), Some(2.5));
        assert_eq!(ratio(0.0, 4.0), Some(0.0));
        assert_eq!(ratio(10.0, 0.0), None);
        assert_eq!(ratio(10.0, -1.0), None);
        assert_eq!(ratio(10.0, f64::NAN), None);
        assert_eq!(ratio(10.0, f64::INFINITY), None);
        assert_eq!(ratio(f64::NAN, 2.0), None);
    }

    #[test]
    fn test_ratio_or_zero() {
        assert_eq!(ratio_or_zero(10.0, 0.0), 0.0);
        assert_eq!(ratio_or_zero(f64::INFINITY, 1.0), 0.0);
        assert_eq!(ratio_or_zero(9.0, 3.0), 3.0);
    }
}

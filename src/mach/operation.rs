use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Arithmetic and comparison
///
/// Comparisons yield `1.0` for true and `0.0` for false.

pub struct Operation {}

fn truth(b: bool) -> Result<f64> {
    Ok(if b { 1.0 } else { 0.0 })
}

impl Operation {
    pub fn negate(val: f64) -> Result<f64> {
        Ok(-val)
    }

    pub fn sum(lhs: f64, rhs: f64) -> Result<f64> {
        Ok(lhs + rhs)
    }

    pub fn subtract(lhs: f64, rhs: f64) -> Result<f64> {
        Ok(lhs - rhs)
    }

    pub fn multiply(lhs: f64, rhs: f64) -> Result<f64> {
        Ok(lhs * rhs)
    }

    pub fn divide(lhs: f64, rhs: f64) -> Result<f64> {
        if rhs == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok(lhs / rhs)
    }

    pub fn equal(lhs: f64, rhs: f64) -> Result<f64> {
        truth(lhs == rhs)
    }

    pub fn not_equal(lhs: f64, rhs: f64) -> Result<f64> {
        truth(lhs != rhs)
    }

    pub fn less(lhs: f64, rhs: f64) -> Result<f64> {
        truth(lhs < rhs)
    }

    pub fn less_equal(lhs: f64, rhs: f64) -> Result<f64> {
        truth(lhs <= rhs)
    }

    pub fn greater(lhs: f64, rhs: f64) -> Result<f64> {
        truth(lhs > rhs)
    }

    pub fn greater_equal(lhs: f64, rhs: f64) -> Result<f64> {
        truth(lhs >= rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_divide_by_zero() {
        let e = Operation::divide(1.0, 0.0).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DivisionByZero);
        assert!(Operation::divide(0.0, -0.0).is_err());
        assert_eq!(Operation::divide(1.0, 4.0).unwrap(), 0.25);
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(Operation::less(1.0, 2.0).unwrap(), 1.0);
        assert_eq!(Operation::greater_equal(1.0, 2.0).unwrap(), 0.0);
        assert_eq!(Operation::not_equal(2.0, 2.0).unwrap(), 0.0);
        assert_eq!(Operation::equal(f64::NAN, f64::NAN).unwrap(), 0.0);
        assert_eq!(Operation::not_equal(f64::NAN, f64::NAN).unwrap(), 1.0);
    }
}

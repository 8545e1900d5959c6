use std::fmt;

use crate::expression::errors::ExpressionError;

/// Result of evaluating an expression.
///
/// Integer arithmetic stays integral until a division, which always yields a float.
#[derive(Debug, Clone, Copy)]
pub enum Value {
    Int(i64),
    Float(f64),
}

#[inline]
fn finite(value: f64) -> Result<Value, ExpressionError> {
    if value.is_finite() {
        Ok(Value::Float(value))
    } else {
        Err(ExpressionError::NonFinite)
    }
}

impl Value {
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(n) => n as f64,
            Value::Float(x) => x,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Value::Int(n) => n == 0,
            Value::Float(x) => x == 0.0,
        }
    }

    pub fn checked_add(self, other: Value) -> Result<Value, ExpressionError> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => {
                a.checked_add(b).map(Value::Int).ok_or(ExpressionError::Overflow)
            }
            (a, b) => finite(a.as_f64() + b.as_f64()),
        }
    }

    pub fn checked_sub(self, other: Value) -> Result<Value, ExpressionError> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => {
                a.checked_sub(b).map(Value::Int).ok_or(ExpressionError::Overflow)
            }
            (a, b) => finite(a.as_f64() - b.as_f64()),
        }
    }

    pub fn checked_mul(self, other: Value) -> Result<Value, ExpressionError> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => {
                a.checked_mul(b).map(Value::Int).ok_or(ExpressionError::Overflow)
            }
            (a, b) => finite(a.as_f64() * b.as_f64()),
        }
    }

    pub fn checked_div(self, other: Value) -> Result<Value, ExpressionError> {
        if other.is_zero() {
            return Err(ExpressionError::DivisionByZero);
        }
        finite(self.as_f64() / other.as_f64())
    }
}

/// Exact comparison: an integer equals a float only if the float is that integer
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(n), Value::Float(x)) | (Value::Float(x), Value::Int(n)) => {
                x.fract() == 0.0
                    && x >= i64::MIN as f64
                    && x < i64::MAX as f64
                    && x as i64 == n
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{:?}", x),
        }
    }
}

#[cfg(test)]
mod tests_inner_value {
    use super::Value;
    use crate::expression::errors::ExpressionError;

    #[test]
    fn test_int_float_equality() {
        assert_eq!(Value::Int(3), Value::Float(3.0));
        assert_eq!(Value::Float(-4.0), Value::Int(-4));
        assert_ne!(Value::Int(3), Value::Float(3.5));
        assert_ne!(Value::Int(i64::MAX), Value::Float(f64::MAX));
    }

    #[test]
    fn test_checked_integer_arithmetic() {
        assert_eq!(
            Value::Int(i64::MAX).checked_add(Value::Int(1)),
            Err(ExpressionError::Overflow)
        );
        assert_eq!(
            Value::Int(i64::MIN).checked_sub(Value::Int(1)),
            Err(ExpressionError::Overflow)
        );
        assert_eq!(
            Value::Int(i64::MAX).checked_mul(Value::Int(2)),
            Err(ExpressionError::Overflow)
        );
        assert_eq!(Value::Int(6).checked_mul(Value::Int(7)), Ok(Value::Int(42)));
    }

    #[test]
    fn test_division_is_true_division() {
        let result = Value::Int(7).checked_div(Value::Int(2));
        assert!(matches!(result, Ok(Value::Float(x)) if x == 3.5));
        assert_eq!(
            Value::Int(1).checked_div(Value::Float(0.0)),
            Err(ExpressionError::DivisionByZero)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(12).to_string(), "12");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
    }
}

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

/// A measured value from a report field.
///
/// Values are always read as `f64`. Integral values are normalized to
/// `Integer` so that `3.0` is written back as `3`, while `3.5` stays a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn from_f64(value: f64) -> Self {
        // i64::MAX is not representable as f64; 2^63 is the first value past it
        if value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value < i64::MAX as f64
        {
            Number::Integer(value as i64)
        } else {
            Number::Float(value)
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// The smaller of two values. Ties, and comparisons involving NaN,
    /// keep `self`.
    pub fn minimum(self, other: Number) -> Number {
        if other.as_f64() < self.as_f64() {
            other
        } else {
            self
        }
    }
}

impl FromStr for Number {
    type Err = ParseFloatError;

    /// Parse a field value, ignoring surrounding whitespace such as the
    /// column padding and trailing newline found in benchmark output.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<f64>().map(Number::from_f64)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

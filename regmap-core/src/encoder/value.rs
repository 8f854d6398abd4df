//! Numeric literal handling for the encoder

use crate::record::parse_hex_u32;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do with a value that does not parse as the record's type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericPolicy {
    /// Reject the record with `InvalidNumericLiteral`
    #[default]
    Reject,
    /// Write zero in place of the bad value
    Zero,
}

/// The value did not parse and the policy said to reject it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadLiteral;

impl NumericPolicy {
    fn apply<T: Default>(self, parsed: Option<T>) -> Result<T, BadLiteral> {
        match (parsed, self) {
            (Some(value), _) => Ok(value),
            (None, NumericPolicy::Zero) => Ok(T::default()),
            (None, NumericPolicy::Reject) => Err(BadLiteral),
        }
    }

    pub(crate) fn float(self, text: &str) -> Result<f32, BadLiteral> {
        self.apply(text.trim().parse::<f32>().ok())
    }

    pub(crate) fn int(self, text: &str) -> Result<i32, BadLiteral> {
        self.apply(text.trim().parse::<i32>().ok())
    }

    pub(crate) fn hex(self, text: &str) -> Result<u32, BadLiteral> {
        self.apply(parse_hex_u32(text))
    }
}

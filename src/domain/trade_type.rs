//! Which side of a trade is fixed.

use core::fmt;

/// Descriptor for the constraint that drives a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TradeType {
    /// The input amount is fixed; output is computed.
    ExactInput = 0,
    /// The output amount is fixed; input is computed.
    ExactOutput = 1,
}

impl TradeType {
    /// Returns `true` for [`TradeType::ExactInput`].
    #[must_use]
    pub const fn is_exact_input(&self) -> bool {
        matches!(self, Self::ExactInput)
    }

    /// Returns `true` for [`TradeType::ExactOutput`].
    #[must_use]
    pub const fn is_exact_output(&self) -> bool {
        matches!(self, Self::ExactOutput)
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactInput => write!(f, "ExactInput"),
            Self::ExactOutput => write!(f, "ExactOutput"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        assert!(TradeType::ExactInput.is_exact_input());
        assert!(!TradeType::ExactInput.is_exact_output());
        assert!(TradeType::ExactOutput.is_exact_output());
    }

    #[test]
    fn display() {
        assert_eq!(TradeType::ExactInput.to_string(), "ExactInput");
        assert_eq!(TradeType::ExactOutput.to_string(), "ExactOutput");
    }

    #[test]
    fn repr_values() {
        assert_eq!(TradeType::ExactInput as u8, 0);
        assert_eq!(TradeType::ExactOutput as u8, 1);
    }
}

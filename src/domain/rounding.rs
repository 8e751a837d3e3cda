//! Explicit rounding direction for division and decimal rendering.

/// Specifies how a quotient is rounded to an integer (or to the last
/// rendered digit).
///
/// Modes apply to the **magnitude** of the value: for the non-negative
/// quantities used in settlement, [`Rounding::Down`] is floor and
/// [`Rounding::Up`] is ceiling.
///
/// # Examples
///
/// ```
/// use swap_router::domain::Rounding;
///
/// let r = Rounding::default();
/// assert_eq!(r, Rounding::HalfUp);
/// assert!(Rounding::Down.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Truncate towards zero.
    Down,
    /// Round to the nearest value, ties away from zero.
    #[default]
    HalfUp,
    /// Round away from zero whenever a remainder exists.
    Up,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }

    /// Returns a human-readable description of the rounding direction.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Down => "round towards zero",
            Self::HalfUp => "round half away from zero",
            Self::Up => "round away from zero",
        }
    }
}

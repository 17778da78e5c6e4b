//! User preferences: per-dimension travel weights in `[0.0, 100.0]`.
//!
//! Provides an API to set, get, and chain dimension values. Use
//! [`UserPreferences::try_set_value`] when the value comes from untrusted
//! input and must be rejected rather than stored.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::vector::DimensionValues;
use crate::{Dimension, InputSide, InvalidInputError};

/// A traveller's preference vector.
///
/// Values are held for the current session only; persistence belongs to the
/// surrounding application.
///
/// # Examples
/// ```
/// use wayfarer_core::{Dimension, UserPreferences};
///
/// let preferences = UserPreferences::new()
///     .with_value(Dimension::Budget, 80.0)
///     .with_value(Dimension::Crowds, 20.0);
/// assert_eq!(preferences.value(Dimension::Budget), Some(80.0));
/// assert!(!preferences.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserPreferences {
    values: DimensionValues,
}

impl UserPreferences {
    /// Construct an empty preference vector.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::{Dimension, UserPreferences};
    ///
    /// let preferences = UserPreferences::new();
    /// assert!(preferences.value(Dimension::Season).is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a vector holding the same value on every dimension.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::{Dimension, UserPreferences};
    ///
    /// let preferences = UserPreferences::uniform(50.0);
    /// assert!(preferences.is_complete());
    /// assert_eq!(preferences.value(Dimension::Transit), Some(50.0));
    /// ```
    #[must_use]
    pub fn uniform(value: f32) -> Self {
        Dimension::ALL
            .into_iter()
            .fold(Self::new(), |preferences, dimension| {
                preferences.with_value(dimension, value)
            })
    }

    /// Return the value for a dimension, if present.
    #[must_use]
    pub fn value(&self, dimension: Dimension) -> Option<f32> {
        self.values.get(dimension)
    }

    /// Insert or update a dimension value.
    ///
    /// Finite values are clamped into `0.0..=100.0`. Non-finite values are
    /// stored as given and rejected when the vector is scored.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::{Dimension, UserPreferences};
    ///
    /// let mut preferences = UserPreferences::new();
    /// preferences.set_value(Dimension::Budget, 105.0);
    /// assert_eq!(preferences.value(Dimension::Budget), Some(100.0));
    /// ```
    pub fn set_value(&mut self, dimension: Dimension, value: f32) {
        self.values.set(dimension, value);
    }

    /// Insert or update a dimension value, rejecting non-finite input.
    ///
    /// # Errors
    /// Returns [`InvalidInputError::NonNumeric`] when `value` is NaN or
    /// infinite; the vector is left unchanged.
    pub fn try_set_value(&mut self, dimension: Dimension, value: f32) -> Result<(), InvalidInputError> {
        self.values.try_set(dimension, value, InputSide::Preferences)
    }

    /// Add a dimension value while returning `self` for chaining.
    #[must_use]
    pub fn with_value(mut self, dimension: Dimension, value: f32) -> Self {
        self.set_value(dimension, value);
        self
    }

    /// Remove a dimension value, returning the previous value if any.
    pub fn clear_value(&mut self, dimension: Dimension) -> Option<f32> {
        self.values.remove(dimension)
    }

    /// Report whether every dimension carries a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values.is_complete()
    }

    /// Iterate over the stored values in canonical dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f32)> + '_ {
        self.values.iter()
    }

    /// Check that the vector can be scored.
    ///
    /// # Errors
    /// Returns the first [`InvalidInputError`] in canonical dimension order.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        Dimension::ALL
            .into_iter()
            .try_for_each(|dimension| self.require(dimension).map(|_| ()))
    }

    /// Fetch a value that scoring requires.
    pub(crate) fn require(&self, dimension: Dimension) -> Result<f32, InvalidInputError> {
        self.values.require(dimension, InputSide::Preferences)
    }
}

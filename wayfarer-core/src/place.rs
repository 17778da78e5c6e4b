//! Candidate places and their measured attributes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use crate::vector::DimensionValues;
use crate::{Dimension, InputSide, InvalidInputError};

/// A place worth visiting, described on the same scale as
/// [`UserPreferences`](crate::UserPreferences).
///
/// Identifiers are the opaque record ids issued by the backing data store.
///
/// # Examples
/// ```
/// use wayfarer_core::{Dimension, PlaceAttributes};
///
/// let place = PlaceAttributes::new("lisbon")
///     .with_name("Lisbon")
///     .with_value(Dimension::Budget, 60.0);
///
/// assert_eq!(place.id(), "lisbon");
/// assert_eq!(place.name(), Some("Lisbon"));
/// assert_eq!(place.value(Dimension::Budget), Some(60.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlaceAttributes {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "non_empty_id"))]
    id: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, rename = "attributes"))]
    values: DimensionValues,
}

/// Reject blank identifiers, mirroring record conversion.
#[cfg(feature = "serde")]
fn non_empty_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let id = String::deserialize(deserializer)?;
    if id.trim().is_empty() {
        return Err(D::Error::custom("place id must not be empty"));
    }
    Ok(id)
}

impl PlaceAttributes {
    /// Construct a place without any attributes.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            values: DimensionValues::default(),
        }
    }

    /// Construct a place holding the same value on every dimension.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::PlaceAttributes;
    ///
    /// let place = PlaceAttributes::uniform("porto", 0.0);
    /// assert!(place.is_complete());
    /// ```
    #[must_use]
    pub fn uniform(id: impl Into<String>, value: f32) -> Self {
        Dimension::ALL
            .into_iter()
            .fold(Self::new(id), |place, dimension| {
                place.with_value(dimension, value)
            })
    }

    /// Return the place identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Return the display name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Attach a display name while returning `self` for chaining.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Return the attribute value for a dimension, if present.
    #[must_use]
    pub fn value(&self, dimension: Dimension) -> Option<f32> {
        self.values.get(dimension)
    }

    /// Insert or update an attribute value.
    ///
    /// Finite values are clamped into `0.0..=100.0`, so rounding artefacts
    /// such as `105.0` do not break ranking.
    pub fn set_value(&mut self, dimension: Dimension, value: f32) {
        self.values.set(dimension, value);
    }

    /// Insert or update an attribute value, rejecting non-finite input.
    ///
    /// # Errors
    /// Returns [`InvalidInputError::NonNumeric`] when `value` is NaN or
    /// infinite; the place is left unchanged.
    pub fn try_set_value(&mut self, dimension: Dimension, value: f32) -> Result<(), InvalidInputError> {
        self.values.try_set(dimension, value, InputSide::Place)
    }

    /// Add an attribute value while returning `self` for chaining.
    #[must_use]
    pub fn with_value(mut self, dimension: Dimension, value: f32) -> Self {
        self.set_value(dimension, value);
        self
    }

    /// Remove an attribute value, returning the previous value if any.
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

    /// Check that the place can be scored.
    ///
    /// # Errors
    /// Returns the first [`InvalidInputError`] in canonical dimension order.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        Dimension::ALL
            .into_iter()
            .try_for_each(|dimension| self.require(dimension).map(|_| ()))
    }

    pub(crate) fn require(&self, dimension: Dimension) -> Result<f32, InvalidInputError> {
        self.values.require(dimension, InputSide::Place)
    }
}

//! Storage shared by preference and attribute vectors.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Dimension, InputSide, InvalidInputError};

/// Lower bound of the normalised scale used by every dimension.
pub const SCALE_MIN: f32 = 0.0;
/// Upper bound of the normalised scale used by every dimension.
pub const SCALE_MAX: f32 = 100.0;

/// Clamp a finite value into `SCALE_MIN..=SCALE_MAX`.
///
/// Non-finite values pass through untouched so scoring can reject them.
#[must_use]
pub fn normalise(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(SCALE_MIN, SCALE_MAX)
    } else {
        value
    }
}

/// Per-dimension values on the normalised scale.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "BTreeMap<Dimension, f32>",
        into = "BTreeMap<Dimension, f32>"
    )
)]
pub(crate) struct DimensionValues {
    values: BTreeMap<Dimension, f32>,
}

impl DimensionValues {
    pub(crate) fn get(&self, dimension: Dimension) -> Option<f32> {
        self.values.get(&dimension).copied()
    }

    pub(crate) fn set(&mut self, dimension: Dimension, value: f32) {
        self.values.insert(dimension, normalise(value));
    }

    pub(crate) fn remove(&mut self, dimension: Dimension) -> Option<f32> {
        self.values.remove(&dimension)
    }

    pub(crate) fn try_set(
        &mut self,
        dimension: Dimension,
        value: f32,
        side: InputSide,
    ) -> Result<(), InvalidInputError> {
        if !value.is_finite() {
            return Err(InvalidInputError::NonNumeric { side, dimension });
        }
        self.set(dimension, value);
        Ok(())
    }

    /// Fetch a dimension that scoring cannot proceed without.
    pub(crate) fn require(
        &self,
        dimension: Dimension,
        side: InputSide,
    ) -> Result<f32, InvalidInputError> {
        let value = self
            .get(dimension)
            .ok_or(InvalidInputError::MissingDimension { side, dimension })?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(InvalidInputError::NonNumeric { side, dimension })
        }
    }

    pub(crate) fn is_complete(&self) -> bool {
        Dimension::ALL
            .iter()
            .all(|dimension| self.values.contains_key(dimension))
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Dimension, f32)> + '_ {
        self.values.iter().map(|(&dimension, &value)| (dimension, value))
    }
}

impl From<BTreeMap<Dimension, f32>> for DimensionValues {
    fn from(raw: BTreeMap<Dimension, f32>) -> Self {
        Self {
            values: raw
                .into_iter()
                .map(|(dimension, value)| (dimension, normalise(value)))
                .collect(),
        }
    }
}

impl From<DimensionValues> for BTreeMap<Dimension, f32> {
    fn from(values: DimensionValues) -> Self {
        values.values
    }
}

//! Error types raised when match inputs are malformed.

use thiserror::Error;

use crate::Dimension;

/// Which input vector an [`InvalidInputError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSide {
    /// The traveller's preference vector.
    Preferences,
    /// The candidate place's attribute vector.
    Place,
}

impl InputSide {
    /// Return the side as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preferences => "preferences",
            Self::Place => "place",
        }
    }
}

impl std::fmt::Display for InputSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned when a preference or attribute vector cannot be scored.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    /// A required dimension was absent.
    #[error("{side} is missing required dimension '{dimension}'")]
    MissingDimension {
        /// Vector lacking the value.
        side: InputSide,
        /// Dimension that was absent.
        dimension: Dimension,
    },
    /// A dimension held a value that is not a finite number.
    #[error("{side} value for dimension '{dimension}' is not a finite number")]
    NonNumeric {
        /// Vector holding the value.
        side: InputSide,
        /// Dimension with the unusable value.
        dimension: Dimension,
    },
}

impl InvalidInputError {
    /// Return the dimension the error refers to.
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        match self {
            Self::MissingDimension { dimension, .. } | Self::NonNumeric { dimension, .. } => {
                *dimension
            }
        }
    }

    /// Return the input vector the error refers to.
    #[must_use]
    pub const fn side(&self) -> InputSide {
        match self {
            Self::MissingDimension { side, .. } | Self::NonNumeric { side, .. } => *side,
        }
    }
}

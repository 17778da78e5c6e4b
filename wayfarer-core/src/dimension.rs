//! Dimensions shared by user preferences and place attributes.
//!
//! The enum offers compile-time safety for per-axis lookups and fixes the
//! canonical ordering used when reporting per-dimension matches.
//!
//! # Examples
//! ```
//! use wayfarer_core::Dimension;
//!
//! assert_eq!(Dimension::TripLength.as_str(), "tripLength");
//! assert_eq!(Dimension::Budget.to_string(), "budget");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the six axes a traveller weighs and a place is measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Dimension {
    /// Spending level; compared against a place's cost index.
    Budget,
    /// Tolerance for crowds; compared against a place's crowd level.
    Crowds,
    /// Preferred trip length; compared against the recommended stay.
    TripLength,
    /// Seasonal preference; compared against the best-season index.
    Season,
    /// Reliance on public transit; compared against the transit score.
    Transit,
    /// Accessibility need; compared against the accessibility score.
    Accessibility,
}

impl Dimension {
    /// Every dimension in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Budget,
        Self::Crowds,
        Self::TripLength,
        Self::Season,
        Self::Transit,
        Self::Accessibility,
    ];

    /// Return the wire name of the dimension.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::Dimension;
    ///
    /// assert_eq!(Dimension::Accessibility.as_str(), "accessibility");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Crowds => "crowds",
            Self::TripLength => "tripLength",
            Self::Season => "season",
            Self::Transit => "transit",
            Self::Accessibility => "accessibility",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "crowds" => Ok(Self::Crowds),
            "triplength" | "trip_length" => Ok(Self::TripLength),
            "season" => Ok(Self::Season),
            "transit" => Ok(Self::Transit),
            "accessibility" => Ok(Self::Accessibility),
            _ => Err(format!("unknown dimension '{s}'")),
        }
    }
}

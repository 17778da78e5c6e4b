//! Conversion from loose JSON records into typed vectors.
//!
//! Records arrive as exported by the hosted data store: flat objects with one
//! numeric field per dimension. Absent and `null` fields are left unset so
//! that scoring reports them as missing; any other non-number is rejected
//! immediately.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use wayfarer_core::{
    Dimension, InputSide, InvalidInputError, PlaceAttributes, SCALE_MAX, SCALE_MIN,
    UserPreferences,
};

use crate::RecordError;

const ID_FIELD: &str = "id";
const NAME_FIELD: &str = "name";

/// Declarative mapping from each dimension to a record field name.
///
/// # Examples
/// ```
/// use wayfarer_core::Dimension;
/// use wayfarer_ranker::FieldMapping;
///
/// # fn main() -> Result<(), wayfarer_ranker::RecordError> {
/// let mapping = FieldMapping::default().with_field(Dimension::Budget, "cost_index")?;
/// assert_eq!(mapping.field(Dimension::Budget), "cost_index");
/// assert_eq!(mapping.field(Dimension::TripLength), "tripLength");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    fields: BTreeMap<Dimension, String>,
}

impl FieldMapping {
    /// Override the field read for `dimension`.
    ///
    /// # Errors
    /// Returns [`RecordError::EmptyFieldName`] when `field` is empty or
    /// whitespace.
    pub fn with_field(
        mut self,
        dimension: Dimension,
        field: impl Into<String>,
    ) -> Result<Self, RecordError> {
        let name = field.into();
        if name.trim().is_empty() {
            return Err(RecordError::EmptyFieldName { dimension });
        }
        self.fields.insert(dimension, name);
        Ok(self)
    }

    /// Return the record field read for `dimension`.
    #[must_use]
    pub fn field(&self, dimension: Dimension) -> &str {
        self.fields
            .get(&dimension)
            .map_or(dimension.as_str(), String::as_str)
    }
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            fields: Dimension::ALL
                .into_iter()
                .map(|dimension| (dimension, dimension.as_str().to_owned()))
                .collect(),
        }
    }
}

/// Build a preference vector from a JSON record.
///
/// # Errors
/// Returns [`RecordError::NotAnObject`] for non-object records and
/// [`RecordError::InvalidInput`] when a mapped field is not a number.
pub fn preferences_from_record(
    record: &Value,
    mapping: &FieldMapping,
) -> Result<UserPreferences, RecordError> {
    let object = record.as_object().ok_or(RecordError::NotAnObject)?;
    let mut preferences = UserPreferences::new();
    for dimension in Dimension::ALL {
        if let Some(value) = read_dimension(object, mapping, dimension, InputSide::Preferences)? {
            preferences.try_set_value(dimension, value)?;
        }
    }
    Ok(preferences)
}

/// Build a place from a JSON record.
///
/// # Errors
/// Returns [`RecordError::NotAnObject`] for non-object records,
/// [`RecordError::MissingId`] when `id` is absent or empty,
/// [`RecordError::InvalidName`] when `name` is not a string, and
/// [`RecordError::InvalidInput`] when a mapped field is not a number.
pub fn place_from_record(
    record: &Value,
    mapping: &FieldMapping,
) -> Result<PlaceAttributes, RecordError> {
    let object = record.as_object().ok_or(RecordError::NotAnObject)?;
    let id = object
        .get(ID_FIELD)
        .and_then(Value::as_str)
        .filter(|id| !id.trim().is_empty())
        .ok_or(RecordError::MissingId)?;

    let mut place = PlaceAttributes::new(id);
    match object.get(NAME_FIELD) {
        None | Some(Value::Null) => {}
        Some(Value::String(name)) => place = place.with_name(name.as_str()),
        Some(_) => return Err(RecordError::InvalidName),
    }

    for dimension in Dimension::ALL {
        if let Some(value) = read_dimension(object, mapping, dimension, InputSide::Place)? {
            place.try_set_value(dimension, value)?;
        }
    }
    Ok(place)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "values are clamped into the 0-100 scale before narrowing to f32"
)]
fn read_dimension(
    object: &Map<String, Value>,
    mapping: &FieldMapping,
    dimension: Dimension,
    side: InputSide,
) -> Result<Option<f32>, InvalidInputError> {
    match object.get(mapping.field(dimension)) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_f64()
            .filter(|value| value.is_finite())
            .map(|value| Some(value.clamp(f64::from(SCALE_MIN), f64::from(SCALE_MAX)) as f32))
            .ok_or(InvalidInputError::NonNumeric { side, dimension }),
        Some(_) => Err(InvalidInputError::NonNumeric { side, dimension }),
    }
}

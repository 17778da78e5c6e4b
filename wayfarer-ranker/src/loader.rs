//! Read preference and place exports from disk.

use std::io::BufReader;

use camino::Utf8Path;
use log::debug;
use serde_json::Value;
use wayfarer_core::{PlaceAttributes, UserPreferences};
use wayfarer_fs::open_file;

use crate::record::{FieldMapping, place_from_record, preferences_from_record};
use crate::LoadError;

const ITEMS_FIELD: &str = "items";
const PLACES_SHAPE: &str = "an array of place records or a list response with `items`";

/// Load a preference vector from a JSON object on disk.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be opened or parsed, or when a
/// mapped field is not a number.
pub fn load_preferences(
    path: &Utf8Path,
    mapping: &FieldMapping,
) -> Result<UserPreferences, LoadError> {
    let document = read_json(path)?;
    preferences_from_record(&document, mapping).map_err(|source| LoadError::Record {
        path: path.to_path_buf(),
        index: 0,
        source,
    })
}

/// Load a single place from a JSON object on disk.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be opened or parsed, or when
/// the record is not a valid place.
pub fn load_place(path: &Utf8Path, mapping: &FieldMapping) -> Result<PlaceAttributes, LoadError> {
    let document = read_json(path)?;
    place_from_record(&document, mapping).map_err(|source| LoadError::Record {
        path: path.to_path_buf(),
        index: 0,
        source,
    })
}

/// Load places from a JSON export.
///
/// Accepts either a bare array of records or a paginated list response whose
/// records sit under `items`.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be opened or parsed, when the
/// document has neither accepted shape, or when any record is invalid.
pub fn load_places(
    path: &Utf8Path,
    mapping: &FieldMapping,
) -> Result<Vec<PlaceAttributes>, LoadError> {
    let document = read_json(path)?;
    let records = place_records(&document).ok_or_else(|| LoadError::UnexpectedShape {
        path: path.to_path_buf(),
        expected: PLACES_SHAPE,
    })?;

    let places = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            place_from_record(record, mapping).map_err(|source| LoadError::Record {
                path: path.to_path_buf(),
                index,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!("loaded {} places from {path}", places.len());
    Ok(places)
}

fn place_records(document: &Value) -> Option<&Vec<Value>> {
    match document {
        Value::Array(records) => Some(records),
        Value::Object(envelope) => envelope.get(ITEMS_FIELD).and_then(Value::as_array),
        _ => None,
    }
}

fn read_json(path: &Utf8Path) -> Result<Value, LoadError> {
    let file = open_file(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

//! Field-by-field mapping from the raw JSON record to record sections.
//!
//! Each `map_*` builder reads only the keys it owns and returns a complete
//! immutable section. JSON `null` is treated as an absent key throughout:
//! a required field that is null fails, an optional one is omitted.

use chrono::NaiveDateTime;
use serde_json::{Map, Value};

use crate::record::{
    Author, DeviceSettings, Experiment, Instrument, Origin, Sample, METHOD_ABBREVIATION,
    METHOD_NAME,
};

use super::ConvertError;

/// Timestamp layout used by the source repository for `published`.
pub const PUBLISH_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raw JSON object as exported by the source repository.
pub type RawRecord = Map<String, Value>;

pub(super) fn map_sample(raw: &RawRecord) -> Result<Sample, ConvertError> {
    Ok(Sample {
        formula: require_str(raw, "formula")?,
        sample_id: require_scalar(raw, "id")?,
        sample_title: require_str(raw, "title")?,
        elements: optional_string_list(raw, "elements")?,
    })
}

pub(super) fn map_experiment(raw: &RawRecord) -> Result<Experiment, ConvertError> {
    let published = require_str(raw, "published")?;
    let publish_time = NaiveDateTime::parse_from_str(&published, PUBLISH_TIME_FORMAT).map_err(
        |source| ConvertError::Timestamp {
            field: "published".to_string(),
            source,
        },
    )?;

    Ok(Experiment {
        experiment_id: require_scalar(raw, "id")?,
        method_name: METHOD_NAME.to_string(),
        method_abbreviation: METHOD_ABBREVIATION.to_string(),
        experiment_publish_time: publish_time,
        edges: optional_string_list(raw, "edges")?,
        description: require_str(raw, "description")?,
    })
}

pub(super) fn map_instrument(raw: &RawRecord) -> Result<Instrument, ConvertError> {
    let device_settings = DeviceSettings {
        device_name: require_scalar(raw, "microscope")?,
        max_energy: require_scalar(raw, "max_energy")?,
        min_energy: optional_scalar(raw, "min_energy")?,
        gun_type: require_scalar(raw, "guntype")?,
        beam_energy: require_scalar(raw, "beamenergy")?,
        resolution: optional_scalar(raw, "resolution")?,
        step_size: require_scalar(raw, "stepSize")?,
        acquisition_mode: optional_scalar(raw, "acquisition_mode")?,
        beam_current: optional_scalar(raw, "beamcurrent")?,
        detector_type: require_scalar(raw, "detector")?,
        dark_current: require_scalar(raw, "darkcurrent")?,
    };

    Ok(Instrument {
        source_label: require_scalar(raw, "microscope")?,
        device_settings,
    })
}

pub(super) fn map_origin(raw: &RawRecord) -> Result<Origin, ConvertError> {
    let author = match get(raw, "author") {
        Some(Value::Object(author)) => Some(Author {
            name: require_str_in(author, "author", "name")?,
            profile_url: require_str_in(author, "author", "profile_url")?,
            profile_api_url: require_str_in(author, "author", "profile_api_url")?,
        }),
        Some(other) => {
            return Err(ConvertError::InvalidField {
                field: "author".to_string(),
                message: format!("expected an object, found {}", value_kind(other)),
            })
        }
        None => None,
    };

    Ok(Origin {
        permalink: require_str(raw, "permalink")?,
        api_permalink: require_str(raw, "api_permalink")?,
        repository_name: optional_str(raw, "repository_name")?,
        repository_url: optional_str(raw, "repository_url")?,
        preview_url: optional_str(raw, "preview_url")?,
        entry_repository_url: optional_str(raw, "entry_repository_url")?,
        author,
    })
}

/// Decode a list field that the source sometimes double-encodes as a JSON
/// string (`"[\"B\", \"N\"]"`). A plain array passes through unchanged.
pub(super) fn decode_string_list(field: &str, value: &Value) -> Result<Vec<String>, ConvertError> {
    let decoded;
    let list = match value {
        Value::String(encoded) => {
            decoded = serde_json::from_str::<Value>(encoded).map_err(|err| {
                ConvertError::InvalidField {
                    field: field.to_string(),
                    message: format!("string value is not valid JSON: {err}"),
                }
            })?;
            &decoded
        }
        other => other,
    };

    match list {
        Value::Array(items) => items
            .iter()
            .map(|item| scalar_to_string(field, item))
            .collect(),
        other => Err(ConvertError::InvalidField {
            field: field.to_string(),
            message: format!("expected a list, found {}", value_kind(other)),
        }),
    }
}

/// Fetch a field, treating JSON `null` the same as an absent key.
fn get<'a>(raw: &'a RawRecord, key: &str) -> Option<&'a Value> {
    raw.get(key).filter(|value| !value.is_null())
}

fn require<'a>(raw: &'a RawRecord, key: &str) -> Result<&'a Value, ConvertError> {
    get(raw, key).ok_or_else(|| ConvertError::MissingField(key.to_string()))
}

fn require_str(raw: &RawRecord, key: &str) -> Result<String, ConvertError> {
    match require(raw, key)? {
        Value::String(value) => Ok(value.clone()),
        other => Err(ConvertError::InvalidField {
            field: key.to_string(),
            message: format!("expected a string, found {}", value_kind(other)),
        }),
    }
}

fn optional_str(raw: &RawRecord, key: &str) -> Result<Option<String>, ConvertError> {
    get(raw, key)
        .map(|value| match value {
            Value::String(value) => Ok(value.clone()),
            other => Err(ConvertError::InvalidField {
                field: key.to_string(),
                message: format!("expected a string, found {}", value_kind(other)),
            }),
        })
        .transpose()
}

/// Coerce a JSON scalar to its string form; ids and device settings come
/// through as either strings or numbers depending on the export version.
fn scalar_to_string(field: &str, value: &Value) -> Result<String, ConvertError> {
    match value {
        Value::String(value) => Ok(value.clone()),
        Value::Number(value) => Ok(value.to_string()),
        Value::Bool(value) => Ok(value.to_string()),
        other => Err(ConvertError::InvalidField {
            field: field.to_string(),
            message: format!("expected a scalar, found {}", value_kind(other)),
        }),
    }
}

fn require_scalar(raw: &RawRecord, key: &str) -> Result<String, ConvertError> {
    scalar_to_string(key, require(raw, key)?)
}

fn optional_scalar(raw: &RawRecord, key: &str) -> Result<Option<String>, ConvertError> {
    get(raw, key)
        .map(|value| scalar_to_string(key, value))
        .transpose()
}

fn optional_string_list(raw: &RawRecord, key: &str) -> Result<Option<Vec<String>>, ConvertError> {
    get(raw, key)
        .map(|value| decode_string_list(key, value))
        .transpose()
}

/// Required string inside a nested object; errors name the field as
/// `parent.key`.
fn require_str_in(
    object: &Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<String, ConvertError> {
    match object.get(key).filter(|value| !value.is_null()) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(ConvertError::InvalidField {
            field: format!("{parent}.{key}"),
            message: format!("expected a string, found {}", value_kind(other)),
        }),
        None => Err(ConvertError::MissingField(format!("{parent}.{key}"))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

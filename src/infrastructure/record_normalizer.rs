// Mapper from raw open-data records to the observation domain model
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::error::DataError;
use crate::domain::observation::{AirReading, Observation, ObservationTable, Variable};

/// Timestamp key of the water-quality dataset; also its sort field.
pub const TIMESTAMP_FIELD: &str = "startzeitpunkt";

/// Timestamp key of the air-temperature dataset; also its sort field.
pub const AIR_TIMESTAMP_FIELD: &str = "datum_zeit";

const AIR_TEMPERATURE_FIELD: &str = "temperatur";

// Source key -> canonical column. Keys outside this table are dropped;
// the observation row is typed and fixed.
const MEASUREMENT_FIELDS: [(&str, Variable); 4] = [
    ("rus_w_o_s3_te", Variable::Temperature),
    ("rus_w_o_s3_lf", Variable::Conductivity),
    ("rus_w_o_s3_o2", Variable::Oxygen),
    ("rus_w_o_s3_ph", Variable::Ph),
];

/// Normalize water-quality records into an observation table. Zero
/// records yield an empty table.
pub fn normalize(records: &[Value]) -> Result<ObservationTable, DataError> {
    let mut rows = Vec::with_capacity(records.len());

    for record in records {
        let fields = record_fields(record)?;

        let mut row = Observation::new(parse_timestamp(fields, TIMESTAMP_FIELD)?);
        for (key, variable) in MEASUREMENT_FIELDS {
            row.set_value(variable, parse_measurement(fields, key)?);
        }
        rows.push(row);
    }

    Ok(ObservationTable::new(rows))
}

/// Normalize the air-temperature fetch, which requests a single row.
/// `None` when the dataset has no rows or the row carries no value.
pub fn normalize_air(records: &[Value]) -> Result<Option<AirReading>, DataError> {
    let Some(record) = records.first() else {
        return Ok(None);
    };
    let fields = record_fields(record)?;

    let timestamp = parse_timestamp(fields, AIR_TIMESTAMP_FIELD)?;
    Ok(parse_measurement(fields, AIR_TEMPERATURE_FIELD)?
        .map(|temperature| AirReading { timestamp, temperature }))
}

fn record_fields(record: &Value) -> Result<&serde_json::Map<String, Value>, DataError> {
    record
        .get("fields")
        .and_then(Value::as_object)
        .ok_or_else(|| DataError::Schema("record without a fields object".to_string()))
}

fn parse_timestamp(
    fields: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<DateTime<Utc>, DataError> {
    let raw = fields
        .get(key)
        .ok_or_else(|| DataError::Schema(format!("record without a {key} field")))?;

    let text = raw.as_str().ok_or_else(|| DataError::parse(key, raw))?;
    let parsed =
        DateTime::parse_from_rfc3339(text).map_err(|_| DataError::parse(key, text))?;

    Ok(parsed.with_timezone(&Utc))
}

// The upstream occasionally emits measurements as quoted numbers.
fn parse_measurement(
    fields: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<Option<f64>, DataError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| DataError::parse(key, s)),
        Some(other) => Err(DataError::parse(key, other)),
    }
}

// Conversion from source timestamps (UTC) to the presentation zone
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// The station reports in UTC; the dashboard shows Basel local time.
pub const PRESENTATION_ZONE: Tz = chrono_tz::Europe::Zurich;

pub fn to_local(instant: DateTime<Utc>) -> DateTime<Tz> {
    instant.with_timezone(&PRESENTATION_ZONE)
}

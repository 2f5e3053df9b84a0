// Wide-to-long reshaping of the observation table for charting
use chrono::{DateTime, Utc};

use crate::domain::error::DataError;
use crate::domain::observation::{ObservationTable, Variable};

/// One chart point: a (timestamp, variable, value) triple.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub variable: Variable,
    pub value: f64,
}

/// Project the table to the requested variables and unpivot it into long
/// form. Rows before `since` are dropped, null values emit no point.
///
/// Output order is row order, then the requested variable order within a
/// row; nothing is re-sorted.
pub fn select_and_unpivot<S: AsRef<str>>(
    table: &ObservationTable,
    variables: &[S],
    since: Option<DateTime<Utc>>,
) -> Result<Vec<SeriesPoint>, DataError> {
    let selected = variables
        .iter()
        .map(|name| {
            Variable::parse(name.as_ref())
                .ok_or_else(|| DataError::InvalidVariable(name.as_ref().to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut points = Vec::new();
    for row in &table.rows {
        if let Some(cutoff) = since {
            if row.timestamp < cutoff {
                continue;
            }
        }
        for &variable in &selected {
            if let Some(value) = row.value(variable) {
                points.push(SeriesPoint {
                    timestamp: row.timestamp,
                    variable,
                    value,
                });
            }
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::observation::Observation;
    use chrono::TimeZone;

    fn ts(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 8, 7, hour, 0, 0).unwrap()
    }

    fn sample_table() -> ObservationTable {
        let mut first = Observation::new(ts(6));
        first.temperature = Some(21.4);
        first.ph = Some(8.2);

        let mut second = Observation::new(ts(7));
        second.temperature = Some(21.9);

        let mut third = Observation::new(ts(8));
        third.ph = Some(8.1);

        ObservationTable::new(vec![first, second, third])
    }

    #[test]
    fn test_unpivot_row_then_variable_order() {
        let points = select_and_unpivot(&sample_table(), &["temperature", "ph"], None).unwrap();

        let triples: Vec<(u32, &str, f64)> = points
            .iter()
            .map(|p| (p.timestamp.format("%H").to_string().parse().unwrap(), p.variable.name(), p.value))
            .collect();

        assert_eq!(
            triples,
            vec![
                (6, "temperature", 21.4),
                (6, "ph", 8.2),
                (7, "temperature", 21.9),
                (8, "ph", 8.1),
            ]
        );
    }

    #[test]
    fn test_null_values_emit_no_point() {
        let points = select_and_unpivot(&sample_table(), &["ph"], None).unwrap();
        // The 07:00 row has no pH value and must not appear.
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.variable == Variable::Ph));
    }

    #[test]
    fn test_cutoff_filters_older_rows() {
        let points =
            select_and_unpivot(&sample_table(), &["temperature", "ph"], Some(ts(7))).unwrap();
        assert!(points.iter().all(|p| p.timestamp >= ts(7)));
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_unknown_variable_is_rejected() {
        let result = select_and_unpivot(&sample_table(), &["nonexistent"], None);
        assert!(matches!(
            result,
            Err(DataError::InvalidVariable(name)) if name == "nonexistent"
        ));
    }

    #[test]
    fn test_repivot_recovers_projected_columns() {
        let table = sample_table();
        let points = select_and_unpivot(&table, &["temperature", "ph"], None).unwrap();

        // Fold the long rows back into per-timestamp observations and
        // compare against the projected originals.
        for row in &table.rows {
            for variable in [Variable::Temperature, Variable::Ph] {
                let repivoted = points
                    .iter()
                    .find(|p| p.timestamp == row.timestamp && p.variable == variable)
                    .map(|p| p.value);
                assert_eq!(repivoted, row.value(variable));
            }
        }
    }

    #[test]
    fn test_empty_table_yields_no_points() {
        let points =
            select_and_unpivot(&ObservationTable::default(), &["temperature"], None).unwrap();
        assert!(points.is_empty());
    }
}

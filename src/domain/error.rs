// Error taxonomy for the data pipeline
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("unexpected response shape: {0}")]
    Schema(String),

    #[error("unparseable value for {field}: {value}")]
    Parse { field: String, value: String },

    #[error("unknown variable: {0}")]
    InvalidVariable(String),

    #[error("cannot scale an empty series")]
    EmptySeries,
}

impl DataError {
    pub fn parse(field: &str, value: impl ToString) -> Self {
        Self::Parse {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether the failure originated upstream rather than in the request.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::Schema(_) | Self::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_field() {
        let err = DataError::parse("startzeitpunkt", "not-a-date");
        assert_eq!(
            err.to_string(),
            "unparseable value for startzeitpunkt: not-a-date"
        );
    }

    #[test]
    fn test_upstream_classification() {
        assert!(DataError::Fetch("timeout".into()).is_upstream());
        assert!(DataError::Schema("no records".into()).is_upstream());
        assert!(!DataError::InvalidVariable("salinity".into()).is_upstream());
        assert!(!DataError::EmptySeries.is_upstream());
    }
}

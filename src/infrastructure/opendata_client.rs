// HTTP client for the Basel open-data records API
use async_trait::async_trait;
use serde_json::Value;

use crate::application::observation_repository::ObservationRepository;
use crate::domain::error::DataError;
use crate::domain::observation::{AirReading, ObservationTable};
use crate::infrastructure::config::SourceSettings;
use crate::infrastructure::record_normalizer::{
    normalize, normalize_air, AIR_TIMESTAMP_FIELD, TIMESTAMP_FIELD,
};

/// Upper bound the API accepts for the rows parameter. Larger requests
/// are clamped, not rejected.
pub const ROW_CAP: u32 = 10_000;

#[derive(Debug, Clone)]
pub struct OpendataClient {
    http: reqwest::Client,
    base_url: String,
    water_dataset: String,
    air_dataset: String,
}

impl OpendataClient {
    pub fn new(source: SourceSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: source.base_url.trim_end_matches('/').to_string(),
            water_dataset: source.water_dataset,
            air_dataset: source.air_dataset,
        }
    }

    fn build_search_url(&self, dataset: &str, rows: u32, sort: &str) -> String {
        format!(
            "{}/?dataset={}&q=&rows={}&sort={}&facet={}",
            self.base_url,
            urlencoding::encode(dataset),
            rows,
            urlencoding::encode(sort),
            urlencoding::encode(sort),
        )
    }

    async fn fetch_records(
        &self,
        dataset: &str,
        rows: u32,
        sort: &str,
    ) -> Result<Vec<Value>, DataError> {
        let rows = rows.min(ROW_CAP);
        let url = self.build_search_url(dataset, rows, sort);
        tracing::debug!(%url, "requesting records");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DataError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Fetch(format!(
                "search for dataset {dataset} returned status {status}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| DataError::Fetch(format!("response body is not JSON: {e}")))?;

        body.get("records")
            .and_then(Value::as_array)
            .cloned()
            .ok_or_else(|| DataError::Schema("response without a records array".to_string()))
    }
}

#[async_trait]
impl ObservationRepository for OpendataClient {
    async fn fetch_observations(&self, max_rows: u32) -> Result<ObservationTable, DataError> {
        let records = self
            .fetch_records(&self.water_dataset, max_rows, TIMESTAMP_FIELD)
            .await?;
        normalize(&records)
    }

    async fn fetch_air_reading(&self) -> Result<Option<AirReading>, DataError> {
        let records = self
            .fetch_records(&self.air_dataset, 1, AIR_TIMESTAMP_FIELD)
            .await?;
        normalize_air(&records)
    }
}

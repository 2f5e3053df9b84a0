// Repository trait for observation data access
use async_trait::async_trait;

use crate::domain::error::DataError;
use crate::domain::observation::{AirReading, ObservationTable};

#[async_trait]
pub trait ObservationRepository: Send + Sync {
    /// Fetch up to `max_rows` water-quality observations, normalized and
    /// ordered ascending by timestamp. The row count is capped upstream.
    async fn fetch_observations(&self, max_rows: u32) -> Result<ObservationTable, DataError>;

    /// Fetch the latest air-temperature reading. `None` when the dataset
    /// currently has no rows.
    async fn fetch_air_reading(&self) -> Result<Option<AirReading>, DataError>;
}

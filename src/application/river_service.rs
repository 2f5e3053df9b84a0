// River service - Use cases for the current reading and history views
use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::application::observation_repository::ObservationRepository;
use crate::application::table_cache::{AirCache, TableCache};
use crate::domain::axis::{AxisBounds, AXIS_BASE};
use crate::domain::error::DataError;
use crate::domain::observation::{CurrentReading, ObservationTable};
use crate::domain::series::{select_and_unpivot, SeriesPoint};
use crate::domain::timezone::to_local;

pub const DEFAULT_HISTORY_DAYS: u32 = 10;
pub const MAX_HISTORY_DAYS: u32 = 90;

// The station samples every 15 minutes.
const ROWS_PER_DAY: u32 = 96;

/// Unpivoted series points with the axis bounds to render them against.
/// `bounds` is `None` when no point survived selection.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryView {
    pub points: Vec<SeriesPoint>,
    pub bounds: Option<AxisBounds>,
}

pub struct RiverService {
    repository: Arc<dyn ObservationRepository>,
    water_cache: TableCache,
    air_cache: AirCache,
}

impl RiverService {
    pub fn new(repository: Arc<dyn ObservationRepository>) -> Self {
        Self {
            repository,
            water_cache: TableCache::new(),
            air_cache: AirCache::new(),
        }
    }

    /// Latest water temperature with the matching air temperature.
    /// `None` when the water dataset currently has no rows.
    pub async fn current_reading(&self) -> Result<Option<CurrentReading>, DataError> {
        let table = self.table(1).await?;
        let Some(row) = table.first() else {
            return Ok(None);
        };

        let air = match self.air_cache.get() {
            Some(cached) => cached,
            None => self.air_cache.insert(self.repository.fetch_air_reading().await?),
        };

        Ok(Some(CurrentReading {
            timestamp: to_local(row.timestamp),
            temperature: row.temperature,
            air_temperature: air.map(|r| r.temperature),
        }))
    }

    /// Series points for the last `days` days of the requested variables,
    /// with chart bounds. `days` is clamped to [1, 90].
    pub async fn history<S: AsRef<str>>(
        &self,
        days: u32,
        variables: &[S],
    ) -> Result<HistoryView, DataError> {
        let days = days.clamp(1, MAX_HISTORY_DAYS);
        let table = self.table(days * ROWS_PER_DAY).await?;

        let cutoff = Utc::now() - Duration::days(i64::from(days));
        let points = select_and_unpivot(&table, variables, Some(cutoff))?;

        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let bounds = if values.is_empty() {
            None
        } else {
            Some(AxisBounds::of(&values, AXIS_BASE)?)
        };

        Ok(HistoryView { points, bounds })
    }

    async fn table(&self, max_rows: u32) -> Result<Arc<ObservationTable>, DataError> {
        if let Some(hit) = self.water_cache.get(max_rows) {
            tracing::debug!(max_rows, "observation cache hit");
            return Ok(hit);
        }

        let table = self.repository.fetch_observations(max_rows).await?;
        Ok(self.water_cache.insert(max_rows, table))
    }
}

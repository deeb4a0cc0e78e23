use std::sync::Arc;

use tracing::{info, warn};

use crate::cache::QueryCache;
use crate::domain::ports::HolidayApi;
use crate::error::ApiResult;
use crate::models::{Holiday, Lob, Loc, NewHoliday};

/// Cache-aware operations against the holiday backend
#[derive(Clone)]
pub struct HolidayService {
    api: Arc<dyn HolidayApi>,
    cache: Arc<QueryCache>,
}

impl HolidayService {
    pub fn new(api: Arc<dyn HolidayApi>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    /// Lines of business for the scoping select.
    ///
    /// A failed fetch degrades to an empty list without caching the
    /// failure; the select still works with the "All" option.
    pub async fn lobs(&self) -> Arc<Vec<Lob>> {
        if let Some(lobs) = self.cache.lobs.fresh().await {
            return lobs;
        }

        match self.api.list_lobs().await {
            Ok(lobs) => self.cache.lobs.store(lobs).await,
            Err(e) => {
                warn!("Failed to load lines of business: {}", e);
                Arc::new(Vec::new())
            }
        }
    }

    /// Locations for the scoping select; degrades like `lobs`.
    pub async fn locs(&self) -> Arc<Vec<Loc>> {
        if let Some(locs) = self.cache.locs.fresh().await {
            return locs;
        }

        match self.api.list_locs().await {
            Ok(locs) => self.cache.locs.store(locs).await,
            Err(e) => {
                warn!("Failed to load locations: {}", e);
                Arc::new(Vec::new())
            }
        }
    }

    /// Holiday list as consumed by dependent views. Refetches whenever
    /// the cached copy has been invalidated by a create.
    pub async fn holidays(&self) -> ApiResult<Arc<Vec<Holiday>>> {
        if let Some(holidays) = self.cache.holidays.fresh().await {
            return Ok(holidays);
        }

        let holidays = self.api.list_holidays().await?;
        Ok(self.cache.holidays.store(holidays).await)
    }

    /// Submit a new holiday. On success the cached holiday list is
    /// invalidated so every reader refetches.
    pub async fn create_holiday(&self, holiday: &NewHoliday) -> ApiResult<Holiday> {
        let created = self.api.create_holiday(holiday).await?;
        info!("Created holiday {} ({})", created.name, created.date);

        self.cache.invalidate_holidays().await;
        Ok(created)
    }
}

use crate::error::ApiResult;
use crate::models::{Holiday, Lob, Loc, NewHoliday};

/// Backend REST API for holiday administration
#[async_trait::async_trait]
pub trait HolidayApi: Send + Sync {
    async fn list_lobs(&self) -> ApiResult<Vec<Lob>>;
    async fn list_locs(&self) -> ApiResult<Vec<Loc>>;
    async fn list_holidays(&self) -> ApiResult<Vec<Holiday>>;
    async fn create_holiday(&self, holiday: &NewHoliday) -> ApiResult<Holiday>;
}

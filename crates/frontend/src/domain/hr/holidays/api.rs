use contracts::hr::holidays::{HolidayIndex, SaveHolidayDto};
use contracts::shared::envelope::{ApiError, ApiPayload};

use crate::shared::api::{self, NoData};
use crate::shared::page::PageConfig;

pub fn config() -> PageConfig {
    PageConfig::for_root("/holidays")
}

/// Fetch the holiday list plus the departments for the filter dropdown.
pub async fn fetch_index(config: &PageConfig) -> Result<HolidayIndex, ApiError> {
    api::get::<HolidayIndex>(config.api_root).await?.require_data()
}

/// Create (no id) or update (with id) a holiday.
pub async fn save_holiday(
    config: &PageConfig,
    id: Option<i64>,
    dto: &SaveHolidayDto,
) -> Result<ApiPayload<NoData>, ApiError> {
    match id {
        Some(id) => api::put(&config.item_path(id), dto).await,
        None => api::post(config.api_root, dto).await,
    }
}

pub async fn delete_holiday(config: &PageConfig, id: i64) -> Result<ApiPayload<NoData>, ApiError> {
    api::delete(&config.item_path(id)).await
}

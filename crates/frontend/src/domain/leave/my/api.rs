use contracts::leave::{ApplyLeaveDto, CalculateDaysDto, CalculatedDays, LeaveBalance, LeaveRequest};
use contracts::shared::envelope::{ApiError, ApiPayload};

use crate::shared::api::{self, NoData};
use crate::shared::page::PageConfig;

pub fn config() -> PageConfig {
    PageConfig::for_root("/leaves")
}

pub async fn fetch_balance(config: &PageConfig) -> Result<LeaveBalance, ApiError> {
    api::get::<LeaveBalance>(&format!("{}/balance", config.api_root))
        .await?
        .require_data()
}

/// The signed-in employee's own requests, newest first as the server sends them.
pub async fn fetch_requests(config: &PageConfig) -> Result<Vec<LeaveRequest>, ApiError> {
    api::get::<Vec<LeaveRequest>>(config.api_root)
        .await?
        .require_data()
}

/// Server-side working-day count with the holiday calendar applied.
pub async fn calculate_days(
    config: &PageConfig,
    dto: &CalculateDaysDto,
) -> Result<CalculatedDays, ApiError> {
    api::post::<CalculatedDays, _>(&format!("{}/calculate-days", config.api_root), dto)
        .await?
        .require_data()
}

pub async fn apply(config: &PageConfig, dto: &ApplyLeaveDto) -> Result<ApiPayload<NoData>, ApiError> {
    api::post(config.api_root, dto).await
}

pub async fn cancel(config: &PageConfig, id: i64) -> Result<ApiPayload<NoData>, ApiError> {
    api::post_empty(&format!("{}/cancel", config.item_path(id))).await
}

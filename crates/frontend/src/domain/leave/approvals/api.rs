use contracts::leave::{LeaveAdminFilter, LeaveRequest, RejectLeaveDto};
use contracts::shared::envelope::{ApiError, ApiPayload};

use crate::shared::api::{self, NoData};
use crate::shared::page::PageConfig;

pub fn config() -> PageConfig {
    PageConfig::for_root("/leaves_admin/requests")
}

pub async fn fetch_requests(
    config: &PageConfig,
    filter: &LeaveAdminFilter,
) -> Result<Vec<LeaveRequest>, ApiError> {
    api::get_with_query::<Vec<LeaveRequest>, _>(config.api_root, filter)
        .await?
        .require_data()
}

pub async fn approve(config: &PageConfig, id: i64) -> Result<ApiPayload<NoData>, ApiError> {
    api::post_empty(&format!("{}/approve", config.item_path(id))).await
}

pub async fn reject(
    config: &PageConfig,
    id: i64,
    dto: &RejectLeaveDto,
) -> Result<ApiPayload<NoData>, ApiError> {
    api::post(&format!("{}/reject", config.item_path(id)), dto).await
}

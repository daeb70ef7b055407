use contracts::shared::envelope::{ApiError, ApiPayload};
use contracts::supply::{SaveSupplyItemDto, SupplyCategory, SupplyItem, SupplyItemFilter};

use crate::shared::api::{self, NoData};
use crate::shared::page::PageConfig;

const CATEGORIES_PATH: &str = "/supplies/categories";

pub fn config() -> PageConfig {
    PageConfig::for_root("/supplies/items")
}

pub async fn fetch_items(
    config: &PageConfig,
    filter: &SupplyItemFilter,
) -> Result<Vec<SupplyItem>, ApiError> {
    api::get_with_query::<Vec<SupplyItem>, _>(config.api_root, filter)
        .await?
        .require_data()
}

pub async fn fetch_categories() -> Result<Vec<SupplyCategory>, ApiError> {
    api::get::<Vec<SupplyCategory>>(CATEGORIES_PATH)
        .await?
        .require_data()
}

pub async fn save_item(
    config: &PageConfig,
    id: Option<i64>,
    dto: &SaveSupplyItemDto,
) -> Result<ApiPayload<NoData>, ApiError> {
    match id {
        Some(id) => api::put(&config.item_path(id), dto).await,
        None => api::post(config.api_root, dto).await,
    }
}

pub async fn delete_item(config: &PageConfig, id: i64) -> Result<ApiPayload<NoData>, ApiError> {
    api::delete(&config.item_path(id)).await
}

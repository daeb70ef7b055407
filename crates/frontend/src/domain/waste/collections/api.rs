use contracts::shared::envelope::ApiError;
use contracts::waste::{CollectionFilter, WasteCollection};

use crate::shared::api;
use crate::shared::page::PageConfig;

pub fn config() -> PageConfig {
    PageConfig::for_root("/waste/collections")
}

pub async fn fetch_collections(
    config: &PageConfig,
    filter: &CollectionFilter,
) -> Result<Vec<WasteCollection>, ApiError> {
    api::get_with_query::<Vec<WasteCollection>, _>(config.api_root, filter)
        .await?
        .require_data()
}

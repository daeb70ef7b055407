use contracts::shared::envelope::{ApiError, ApiPayload};
use contracts::system::users::{
    LinkEmployeeDto, PortalUser, Role, UnlinkedEmployee, UpdateUserDto, UserFilter,
};

use crate::shared::api::{self, NoData};
use crate::shared::page::PageConfig;

const ROLES_PATH: &str = "/roles";
const UNLINKED_EMPLOYEES_PATH: &str = "/employees/unlinked";

pub fn config() -> PageConfig {
    PageConfig::for_root("/users")
}

pub async fn fetch_users(
    config: &PageConfig,
    filter: &UserFilter,
) -> Result<Vec<PortalUser>, ApiError> {
    api::get_with_query::<Vec<PortalUser>, _>(config.api_root, filter)
        .await?
        .require_data()
}

pub async fn fetch_roles() -> Result<Vec<Role>, ApiError> {
    api::get::<Vec<Role>>(ROLES_PATH).await?.require_data()
}

pub async fn update_user(
    config: &PageConfig,
    id: i64,
    dto: &UpdateUserDto,
) -> Result<ApiPayload<NoData>, ApiError> {
    api::put(&config.item_path(id), dto).await
}

pub async fn fetch_unlinked_employees() -> Result<Vec<UnlinkedEmployee>, ApiError> {
    api::get::<Vec<UnlinkedEmployee>>(UNLINKED_EMPLOYEES_PATH)
        .await?
        .require_data()
}

pub async fn link_employee(
    config: &PageConfig,
    id: i64,
    dto: &LinkEmployeeDto,
) -> Result<ApiPayload<NoData>, ApiError> {
    api::post(&format!("{}/link-employee", config.item_path(id)), dto).await
}

pub async fn unlink_employee(config: &PageConfig, id: i64) -> Result<ApiPayload<NoData>, ApiError> {
    api::post_empty(&format!("{}/unlink-employee", config.item_path(id))).await
}

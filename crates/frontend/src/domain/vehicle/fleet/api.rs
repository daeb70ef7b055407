use contracts::hr::holidays::Department;
use contracts::shared::envelope::{ApiError, ApiPayload};
use contracts::vehicle::{DriverCandidate, DriverFilter, SaveVehicleDto, Vehicle, VehicleFilter};

use crate::shared::api::{self, NoData};
use crate::shared::page::PageConfig;

const DEPARTMENTS_PATH: &str = "/organization/managable-departments";
const EMPLOYEES_PATH: &str = "/employees";

pub fn config() -> PageConfig {
    PageConfig::for_root("/vehicles")
}

pub async fn fetch_vehicles(
    config: &PageConfig,
    filter: &VehicleFilter,
) -> Result<Vec<Vehicle>, ApiError> {
    api::get_with_query::<Vec<Vehicle>, _>(config.api_root, filter)
        .await?
        .require_data()
}

pub async fn fetch_departments() -> Result<Vec<Department>, ApiError> {
    api::get::<Vec<Department>>(DEPARTMENTS_PATH)
        .await?
        .require_data()
}

/// Driver candidates are scoped to one department; the dropdown reloads
/// whenever the department changes.
pub async fn fetch_drivers(department_id: i64) -> Result<Vec<DriverCandidate>, ApiError> {
    let filter = DriverFilter { department_id };
    api::get_with_query::<Vec<DriverCandidate>, _>(EMPLOYEES_PATH, &filter)
        .await?
        .require_data()
}

/// Create (no id) or update (with id) a vehicle.
pub async fn save_vehicle(
    config: &PageConfig,
    id: Option<i64>,
    dto: &SaveVehicleDto,
) -> Result<ApiPayload<NoData>, ApiError> {
    match id {
        Some(id) => api::put(&config.item_path(id), dto).await,
        None => api::post(config.api_root, dto).await,
    }
}

pub async fn delete_vehicle(config: &PageConfig, id: i64) -> Result<ApiPayload<NoData>, ApiError> {
    api::delete(&config.item_path(id)).await
}

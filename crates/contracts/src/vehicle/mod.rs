use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Vehicle lifecycle status. The backend stores the Korean label itself as
/// the wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    #[serde(rename = "정상")]
    Active,
    #[serde(rename = "수리중")]
    UnderRepair,
    #[serde(rename = "폐차")]
    Retired,
}

impl VehicleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "정상",
            VehicleStatus::UnderRepair => "수리중",
            VehicleStatus::Retired => "폐차",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub vehicle_number: String,
    pub model: String,
    pub vehicle_type: Option<String>,
    pub payload_capacity: Option<String>,
    pub year: Option<i32>,
    pub release_date: Option<NaiveDate>,
    pub department_id: Option<i64>,
    pub department_name: Option<String>,
    pub driver_employee_id: Option<i64>,
    pub driver_name: Option<String>,
    #[serde(rename = "status_code")]
    pub status: VehicleStatus,
}

/// Employee eligible to be assigned as a driver, scoped to one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverCandidate {
    pub id: i64,
    pub name: String,
    pub position_name: Option<String>,
}

/// Body for create (`POST /vehicles`) and update (`PUT /vehicles/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveVehicleDto {
    pub vehicle_number: String,
    pub model: String,
    pub vehicle_type: Option<String>,
    pub payload_capacity: Option<String>,
    pub year: Option<i32>,
    pub release_date: Option<NaiveDate>,
    pub department_id: Option<i64>,
    pub driver_employee_id: Option<i64>,
    #[serde(rename = "status_code")]
    pub status: VehicleStatus,
}

/// Query parameters for `GET /vehicles`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(rename = "status_code", skip_serializing_if = "Option::is_none")]
    pub status: Option<VehicleStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Query parameters for `GET /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverFilter {
    pub department_id: i64,
}

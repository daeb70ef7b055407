use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    Holiday,
    Workday,
}

impl HolidayKind {
    pub fn label(&self) -> &'static str {
        match self {
            HolidayKind::Holiday => "휴일",
            HolidayKind::Workday => "특정 근무일",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: HolidayKind,
    pub department_id: Option<i64>,
    pub department_name: Option<String>,
    pub deduct_leave: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

/// Body for both create (`POST /holidays`) and update (`PUT /holidays/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveHolidayDto {
    pub name: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: HolidayKind,
    pub department_id: Option<i64>,
    pub deduct_leave: bool,
}

/// `GET /holidays` returns the holiday list together with the departments
/// used by the filter dropdown, so the page loads with one round-trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayIndex {
    pub holidays: Vec<Holiday>,
    pub departments: Vec<Department>,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Leave day types as the backend stores them (Korean labels on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayType {
    #[serde(rename = "연차")]
    Annual,
    #[serde(rename = "반차")]
    HalfDay,
}

impl DayType {
    pub fn is_half_day(&self) -> bool {
        matches!(self, DayType::HalfDay)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayType::Annual => "연차",
            DayType::HalfDay => "반차",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "대기",
            LeaveStatus::Approved => "승인",
            LeaveStatus::Rejected => "반려",
            LeaveStatus::Cancelled => "취소",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: i64,
    pub day_type: DayType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: f64,
    pub reason: Option<String>,
    pub status: LeaveStatus,
    pub requester_name: Option<String>,
    pub approver_name: Option<String>,
    pub created_at: String,
}

/// Balance summary shown on the my-leave page sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveBalance {
    pub granted: f64,
    pub used: f64,
    pub pending: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyLeaveDto {
    pub day_type: DayType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
}

/// Body for `POST /leaves/calculate-days` — the server counts working days
/// with the holiday calendar applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateDaysDto {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_half_day: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedDays {
    pub days: f64,
}

/// Query parameters for `GET /leaves_admin/requests`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaveAdminFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeaveStatus>,
}

/// Body for `POST /leaves_admin/requests/{id}/reject`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectLeaveDto {
    pub reason: String,
}

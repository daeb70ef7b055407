use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Pending,
    Blocked,
}

impl UserStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "활성",
            UserStatus::Pending => "대기",
            UserStatus::Blocked => "차단",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// A portal login account. `employee_id`/`employee_name` are present when the
/// account is linked to an HR employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalUser {
    pub id: i64,
    pub nickname: String,
    pub status: UserStatus,
    #[serde(default)]
    pub role_names: Vec<String>,
    pub employee_id: Option<i64>,
    pub employee_name: Option<String>,
}

/// Query parameters for `GET /users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
}

/// Body for `PUT /users/{id}` (role/status edit modal).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub status: UserStatus,
    pub role_ids: Vec<i64>,
}

/// Body for `POST /users/{id}/link-employee`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkEmployeeDto {
    pub employee_id: i64,
}

/// HR employee not yet linked to a login account, offered in the link dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlinkedEmployee {
    pub id: i64,
    pub name: String,
    pub employee_number: Option<String>,
}

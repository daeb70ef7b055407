use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyCategory {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyItem {
    pub id: i64,
    pub category_id: i64,
    pub category_name: Option<String>,
    pub name: String,
    pub unit: String,
    pub price: i64,
    pub stock_quantity: i64,
    pub is_active: bool,
}

/// Body for create (`POST /supplies/items`) and update
/// (`PUT /supplies/items/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSupplyItemDto {
    pub category_id: i64,
    pub name: String,
    pub unit: String,
    pub price: i64,
    pub is_active: bool,
}

/// Query parameters for `GET /supplies/items`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplyItemFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

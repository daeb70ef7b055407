use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a large-waste collection request entered the system: submitted online
/// by a resident, or recorded in the field by a collection crew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Online,
    Field,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteItemLine {
    pub name: String,
    pub quantity: u32,
}

/// Query parameters for `GET /waste/collections`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CollectionKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteCollection {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: CollectionKind,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub fee: i64,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub items: Vec<WasteItemLine>,
}

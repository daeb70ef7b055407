use contracts::vehicle::{Vehicle, VehicleStatus};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct VehicleListState {
    pub items: Vec<Vehicle>,
    pub department_filter: Option<i64>,
    pub status_filter: Option<VehicleStatus>,
    pub search: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl VehicleListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            department_filter: None,
            status_filter: None,
            search: String::new(),
            sort_field: "number".to_string(),
            sort_ascending: true,
            page: 0,
            page_size,
            total_count: 0,
            total_pages: 1,
        }
    }
}

pub fn create_state(page_size: usize) -> RwSignal<VehicleListState> {
    RwSignal::new(VehicleListState::new(page_size))
}

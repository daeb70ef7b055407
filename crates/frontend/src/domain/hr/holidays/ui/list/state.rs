use contracts::hr::holidays::Holiday;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct HolidaysListState {
    pub items: Vec<Holiday>,
    pub department_filter: Option<i64>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl HolidaysListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            department_filter: None,
            sort_field: "date".to_string(),
            sort_ascending: true,
            page: 0,
            page_size,
            total_count: 0,
            total_pages: 1,
        }
    }
}

pub fn create_state(page_size: usize) -> RwSignal<HolidaysListState> {
    RwSignal::new(HolidaysListState::new(page_size))
}

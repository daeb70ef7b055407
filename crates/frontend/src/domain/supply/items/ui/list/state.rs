use contracts::supply::SupplyItem;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SupplyItemsListState {
    pub items: Vec<SupplyItem>,
    pub keyword: String,
    pub category_filter: Option<i64>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl SupplyItemsListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            keyword: String::new(),
            category_filter: None,
            sort_field: "name".to_string(),
            sort_ascending: true,
            page: 0,
            page_size,
            total_count: 0,
            total_pages: 1,
        }
    }
}

pub fn create_state(page_size: usize) -> RwSignal<SupplyItemsListState> {
    RwSignal::new(SupplyItemsListState::new(page_size))
}

use contracts::system::users::{PortalUser, UserStatus};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct UsersListState {
    pub items: Vec<PortalUser>,
    pub nickname: String,
    pub status_filter: Option<UserStatus>,
    pub role_filter: Option<i64>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl UsersListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            nickname: String::new(),
            status_filter: None,
            role_filter: None,
            sort_field: "nickname".to_string(),
            sort_ascending: true,
            page: 0,
            page_size,
            total_count: 0,
            total_pages: 1,
        }
    }
}

pub fn create_state(page_size: usize) -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::new(page_size))
}

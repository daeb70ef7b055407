use contracts::leave::{LeaveRequest, LeaveStatus};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ApprovalsListState {
    pub items: Vec<LeaveRequest>,
    pub status_filter: Option<LeaveStatus>,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl ApprovalsListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            // Approvers land on the queue that needs their action.
            status_filter: Some(LeaveStatus::Pending),
            page: 0,
            page_size,
            total_count: 0,
            total_pages: 1,
        }
    }
}

pub fn create_state(page_size: usize) -> RwSignal<ApprovalsListState> {
    RwSignal::new(ApprovalsListState::new(page_size))
}

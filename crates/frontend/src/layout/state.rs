use leptos::prelude::*;

use crate::shared::storage;

const SIDEBAR_COLLAPSED_KEY: &str = "layout_sidebar_collapsed";

/// Shell-level UI state, provided once at the application root.
#[derive(Clone, Copy)]
pub struct LayoutState {
    pub sidebar_collapsed: RwSignal<bool>,
}

impl LayoutState {
    /// Restores the persisted sidebar preference.
    pub fn new() -> Self {
        let collapsed = storage::get_item(SIDEBAR_COLLAPSED_KEY).as_deref() == Some("1");
        Self {
            sidebar_collapsed: RwSignal::new(collapsed),
        }
    }

    pub fn toggle_sidebar(&self) {
        let next = !self.sidebar_collapsed.get_untracked();
        self.sidebar_collapsed.set(next);
        storage::set_item(SIDEBAR_COLLAPSED_KEY, if next { "1" } else { "0" });
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_layout() -> LayoutState {
    use_context::<LayoutState>().expect("LayoutState not provided in context (provide it in app root)")
}

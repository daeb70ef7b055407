//! Shared page lifecycle building blocks.
//!
//! Every page follows the same flow: typed config → readiness check → initial
//! load into a `LoadState` container → user interaction (writes reload the
//! list on success) → cleanup of anything that outlives plain DOM nodes.

use leptos::prelude::*;

/// Page category constants, stamped on the root element for DOM inspection.
pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_DETAIL: &str = "detail";
pub const PAGE_CAT_MAP: &str = "map";
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Page-scoped configuration, fixed after construction.
///
/// Replaces the old `{...defaults, ...overrides}` merging: every option is a
/// named field with a documented default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    /// Root path of the page's API resource, e.g. `/holidays`.
    pub api_root: &'static str,
    /// Rows per page for paginated lists. Default: 20.
    pub page_size: usize,
    /// Re-run the list load after a successful write. Default: true.
    pub reload_after_write: bool,
}

impl PageConfig {
    pub fn for_root(api_root: &'static str) -> Self {
        debug_assert!(
            api_root.starts_with('/'),
            "api_root must be a root-relative path"
        );
        Self {
            api_root,
            page_size: 20,
            reload_after_write: true,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        self.page_size = page_size;
        self
    }

    pub fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.api_root, id)
    }
}

/// Tri-state capability check run before the lifecycle proceeds.
///
/// `NotApplicable` means the page's prerequisites are absent in this view and
/// the page renders nothing (shared scripts reused across templates);
/// `Error` is a real precondition failure and renders an error body.
#[derive(Clone, Debug, PartialEq)]
pub enum PageReadiness {
    NotApplicable,
    Ready,
    Error(String),
}

/// State of one data container. A container is always in exactly one of the
/// three states, so a failed load can never leave a stale spinner behind.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Root wrapper that stamps standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{section}--{category}`, e.g. `"hr-holidays--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_MAP => "page page--map",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

/// Branches the page body on the readiness tri-state.
#[component]
pub fn ReadinessGate<F>(
    #[prop(into)] readiness: Signal<PageReadiness>,
    body: F,
) -> impl IntoView
where
    F: Fn() -> AnyView + Send + Sync + 'static,
{
    view! {
        {move || match readiness.get() {
            PageReadiness::NotApplicable => view! { <></> }.into_any(),
            PageReadiness::Error(message) => {
                view! { <div class="alert alert--error">{message}</div> }.into_any()
            }
            PageReadiness::Ready => body(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = PageConfig::for_root("/holidays");
        assert_eq!(config.page_size, 20);
        assert!(config.reload_after_write);
        assert_eq!(config.item_path(7), "/holidays/7");
    }

    #[test]
    fn load_state_accessors() {
        let state: LoadState<Vec<i64>> = LoadState::Loading;
        assert!(state.is_loading());
        assert_eq!(state.loaded(), None);

        let state = LoadState::Loaded(vec![1]);
        assert_eq!(state.loaded(), Some(&vec![1]));
    }
}

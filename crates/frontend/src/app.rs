use leptos::prelude::*;

use crate::layout::state::LayoutState;
use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::notify::{ToastHost, ToastService};

#[component]
pub fn App() -> impl IntoView {
    provide_context(ToastService::new());
    provide_context(ModalStackService::new());
    provide_context(LayoutState::new());

    view! {
        <AppRoutes />
        <ToastHost />
        <ModalHost />
    }
}

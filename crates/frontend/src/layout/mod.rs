pub mod sidebar;
pub mod state;

use leptos::prelude::*;
use sidebar::Sidebar;
use state::use_layout;

use crate::shared::icons::icon;

/// Application shell: top bar with the sidebar toggle, sidebar, content area.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let layout = use_layout();

    view! {
        <div class="app-layout">
            <header class="app-topbar">
                <button
                    class="app-topbar__toggle"
                    on:click=move |_| layout.toggle_sidebar()
                    title="메뉴 접기/펼치기"
                >
                    {icon("menu")}
                </button>
                <span class="app-topbar__title">"업무 포털"</span>
            </header>

            <div class="app-body">
                <aside class=move || {
                    if layout.sidebar_collapsed.get() {
                        "app-sidebar app-sidebar--collapsed"
                    } else {
                        "app-sidebar"
                    }
                }>
                    <Sidebar />
                </aside>

                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}

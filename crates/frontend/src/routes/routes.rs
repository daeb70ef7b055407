use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::hr::holidays::ui::list::HolidaysListPage;
use crate::domain::leave::approvals::ui::list::LeaveApprovalsPage;
use crate::domain::leave::my::ui::MyLeavePage;
use crate::domain::supply::items::ui::list::SupplyItemsListPage;
use crate::domain::vehicle::fleet::ui::list::VehicleListPage;
use crate::domain::waste::collections::ui::map::WasteMapPage;
use crate::layout::Shell;
use crate::system::users::ui::list::UsersListPage;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="alert alert--error">"페이지를 찾을 수 없습니다."</div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HolidaysListPage />
                    <Route path=path!("/holidays") view=HolidaysListPage />
                    <Route path=path!("/leave/my") view=MyLeavePage />
                    <Route path=path!("/leave/approvals") view=LeaveApprovalsPage />
                    <Route path=path!("/supplies") view=SupplyItemsListPage />
                    <Route path=path!("/vehicles") view=VehicleListPage />
                    <Route path=path!("/waste-map") view=WasteMapPage />
                    <Route path=path!("/users") view=UsersListPage />
                </Routes>
            </Shell>
        </Router>
    }
}

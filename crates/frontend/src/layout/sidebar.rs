use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "인사",
            items: vec![("/holidays", "휴일 관리", "calendar")],
        },
        MenuGroup {
            label: "휴가",
            items: vec![
                ("/leave/my", "내 휴가", "calendar"),
                ("/leave/approvals", "휴가 승인", "check"),
            ],
        },
        MenuGroup {
            label: "물품",
            items: vec![("/supplies", "물품 관리", "box")],
        },
        MenuGroup {
            label: "차량",
            items: vec![("/vehicles", "차량 관리", "truck")],
        },
        MenuGroup {
            label: "환경",
            items: vec![("/waste-map", "수거 지도", "map-pin")],
        },
        MenuGroup {
            label: "시스템",
            items: vec![("/users", "사용자 관리", "users")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            {menu_groups()
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">{group.label}</div>
                            {group
                                .items
                                .into_iter()
                                .map(|(path, label, icon_name)| {
                                    view! {
                                        <A href=path attr:class="sidebar__item">
                                            {icon(icon_name)}
                                            <span class="sidebar__item-label">{label}</span>
                                        </A>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

use chrono::NaiveDate;
use contracts::waste::{CollectionFilter, CollectionKind, WasteCollection};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsValue;

use crate::domain::waste::collections::api;
use crate::shared::icons::icon;
use crate::shared::modal_stack::{use_modal_stack, ModalStackService};
use crate::shared::page::{LoadState, PageFrame, PageReadiness, ReadinessGate, PAGE_CAT_MAP};
use crate::shared::render::{escape_html, item_lines_html};
use crate::shared::widgets::map::{
    group_by_address, MapAdapter, MapEvent, MarkerKind, MarkerSpec,
};

fn kind_label(kind: CollectionKind) -> &'static str {
    match kind {
        CollectionKind::Online => "온라인 접수",
        CollectionKind::Field => "현장 접수",
    }
}

/// Overlay card shown when a marker is hovered. Address and item names come
/// from user input and are escaped; labels and numbers are fixed.
fn overlay_html(group: &[WasteCollection]) -> String {
    let Some(first) = group.first() else {
        return String::new();
    };
    let address = escape_html(first.address.trim());
    if group.len() > 1 {
        return format!(
            "<div class=\"overlay overlay--cluster\"><strong>{address}</strong>\
             <span class=\"overlay__count\">{}건</span></div>",
            group.len()
        );
    }

    let lines: Vec<(String, u32)> = first
        .items
        .iter()
        .map(|line| (line.name.clone(), line.quantity))
        .collect();
    format!(
        "<div class=\"overlay\"><strong>{address}</strong>\
         <span class=\"overlay__kind\">{}</span>\
         <span class=\"overlay__fee\">{}원</span>\
         <ul class=\"overlay-items\">{}</ul></div>",
        kind_label(first.kind),
        first.fee,
        item_lines_html(&lines)
    )
}

fn marker_specs(groups: &[Vec<WasteCollection>]) -> Vec<MarkerSpec> {
    groups
        .iter()
        .filter(|group| !group.is_empty())
        .map(|group| MarkerSpec {
            id: group[0].id,
            latitude: group[0].latitude,
            longitude: group[0].longitude,
            kind: if group.len() > 1 {
                MarkerKind::Cluster(group.len())
            } else {
                MarkerKind::Single
            },
            overlay_html: overlay_html(group),
        })
        .collect()
}

/// The map page only renders when the vendor widget script is loaded.
fn check_readiness() -> PageReadiness {
    let Some(window) = web_sys::window() else {
        return PageReadiness::NotApplicable;
    };
    let has_widget = js_sys::Reflect::has(&window, &JsValue::from_str("kakao")).unwrap_or(false);
    if has_widget {
        PageReadiness::Ready
    } else {
        PageReadiness::Error("지도 모듈을 불러오지 못했습니다.".to_string())
    }
}

fn open_group_detail(modals: ModalStackService, group: Vec<WasteCollection>) {
    modals.push(move |handle| {
        let group = group.clone();
        let title = group
            .first()
            .map(|c| c.address.trim().to_string())
            .unwrap_or_default();
        let on_close = {
            let handle = handle.clone();
            move |_| handle.close()
        };

        view! {
            <div class="modal-form modal-form--waste">
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                </div>
                <div class="modal-body">
                    {group
                        .iter()
                        .map(|collection| {
                            view! {
                                <div class="waste-detail">
                                    <div class="waste-detail__row">
                                        <span class="badge badge--neutral">{kind_label(collection.kind)}</span>
                                        <span>{collection.issue_date.to_string()}</span>
                                        <span>{format!("{}원", collection.fee)}</span>
                                    </div>
                                    <ul class="waste-detail__items">
                                        {if collection.items.is_empty() {
                                            view! { <li>"품목 없음"</li> }.into_any()
                                        } else {
                                            collection
                                                .items
                                                .iter()
                                                .map(|line| {
                                                    view! {
                                                        <li>
                                                            {line.name.clone()}
                                                            <span class="waste-detail__count">{line.quantity}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()
                                                .into_any()
                                        }}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=on_close>
                        "닫기"
                    </Button>
                </div>
            </div>
        }
        .into_any()
    });
}

#[component]
pub fn WasteMapPage() -> impl IntoView {
    let config = api::config();
    let modals = use_modal_stack();

    let readiness = RwSignal::new(PageReadiness::NotApplicable);
    let source: RwSignal<LoadState<Vec<WasteCollection>>> = RwSignal::new(LoadState::Loading);
    let groups: RwSignal<Vec<Vec<WasteCollection>>> = RwSignal::new(Vec::new());
    let resolved_address: RwSignal<Option<String>> = RwSignal::new(None);

    let date_text = RwSignal::new(String::new());
    let kind_filter = RwSignal::new(None::<CollectionKind>);

    let adapter = StoredValue::new(MapAdapter::new());
    on_cleanup(move || adapter.get_value().destroy());

    let load_data = move || {
        let filter = CollectionFilter {
            date: NaiveDate::parse_from_str(date_text.get_untracked().trim(), "%Y-%m-%d").ok(),
            kind: kind_filter.get_untracked(),
        };
        source.set(LoadState::Loading);
        spawn_local(async move {
            match api::fetch_collections(&config, &filter).await {
                Ok(data) => {
                    let grouped = group_by_address(&data);
                    adapter.get_value().set_markers(marker_specs(&grouped));
                    groups.set(grouped);
                    source.set(LoadState::Loaded(data));
                }
                Err(e) => source.set(LoadState::Failed(e.notification_text())),
            }
        });
    };

    Effect::new(move |_| {
        let ready = check_readiness();
        let proceed = ready == PageReadiness::Ready;
        readiness.set(ready);
        if !proceed {
            return;
        }

        adapter.get_value().on_event(move |event| match event {
            MapEvent::MarkerClicked { marker_id } => {
                let group = groups
                    .get_untracked()
                    .into_iter()
                    .find(|g| g.first().map(|c| c.id) == Some(*marker_id));
                if let Some(group) = group {
                    open_group_detail(modals, group);
                }
            }
            MapEvent::AddressResolved { address } => {
                resolved_address.set(address.clone());
            }
        });

        load_data();
    });

    view! {
        <PageFrame page_id="waste-collections--map" category=PAGE_CAT_MAP>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"수거 지도"</h1>
                    {move || {
                        resolved_address
                            .get()
                            .map(|address| view! { <span class="page__subtitle">{address}</span> })
                    }}
                </div>
                <div class="page__header-right">
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || date_text.get()
                        on:change=move |ev| {
                            date_text.set(event_target_value(&ev));
                            load_data();
                        }
                    />
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            kind_filter.set(match event_target_value(&ev).as_str() {
                                "online" => Some(CollectionKind::Online),
                                "field" => Some(CollectionKind::Field),
                                _ => None,
                            });
                            load_data();
                        }
                    >
                        <option value="">"전체"</option>
                        <option value="online">"온라인 접수"</option>
                        <option value="field">"현장 접수"</option>
                    </select>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || source.with(|l| l.is_loading()))
                    >
                        {icon("refresh")}
                        " 새로고침"
                    </Button>
                </div>
            </div>

            <div class="page__content page__content--map">
                <ReadinessGate readiness=readiness body=move || {
                    view! {
                        <div class="waste-map">
                            <div id="waste-map-canvas" class="waste-map__canvas"></div>
                            <div class="waste-map__panel">
                                {move || match source.get() {
                                    LoadState::Loading => {
                                        view! { <div class="page__placeholder">"불러오는 중..."</div> }
                                            .into_any()
                                    }
                                    LoadState::Failed(message) => {
                                        view! { <div class="alert alert--error">{message}</div> }
                                            .into_any()
                                    }
                                    LoadState::Loaded(_) => {
                                        let list = groups.get();
                                        if list.is_empty() {
                                            view! {
                                                <div class="page__placeholder">"데이터가 없습니다."</div>
                                            }
                                            .into_any()
                                        } else {
                                            list.into_iter()
                                                .filter(|g| !g.is_empty())
                                                .map(|group| {
                                                    let address = group[0].address.trim().to_string();
                                                    let count = group.len();
                                                    let total_fee: i64 =
                                                        group.iter().map(|c| c.fee).sum();
                                                    let for_click = group.clone();
                                                    view! {
                                                        <div
                                                            class="waste-map__entry"
                                                            on:click=move |_| open_group_detail(modals, for_click.clone())
                                                        >
                                                            {icon("map-pin")}
                                                            <span class="waste-map__address">{address}</span>
                                                            <span class="waste-map__meta">
                                                                {format!("{}건 / {}원", count, total_fee)}
                                                            </span>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()
                                                .into_any()
                                        }
                                    }
                                }}
                            </div>
                        </div>
                    }
                    .into_any()
                } />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(id: i64, kind: CollectionKind, address: &str) -> WasteCollection {
        WasteCollection {
            id,
            kind,
            address: address.to_string(),
            latitude: 37.34,
            longitude: 126.74,
            fee: 3000,
            issue_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            items: vec![],
        }
    }

    #[test]
    fn cluster_overlay_shows_count_and_escapes_address() {
        let group = vec![
            collection(1, CollectionKind::Online, "중앙로 <1>"),
            collection(2, CollectionKind::Online, "중앙로 <1>"),
        ];
        let html = overlay_html(&group);
        assert!(html.contains("2건"));
        assert!(html.contains("중앙로 &lt;1&gt;"));
        assert!(!html.contains("<1>"));
    }

    #[test]
    fn single_overlay_shows_item_placeholder_without_items() {
        let group = vec![collection(1, CollectionKind::Field, "중앙로 1")];
        let html = overlay_html(&group);
        assert!(html.contains("품목 없음"));
        assert!(html.contains("현장 접수"));
        assert!(html.contains("3000원"));
    }

    #[test]
    fn marker_specs_mark_multi_member_groups_as_clusters() {
        let groups = vec![
            vec![
                collection(1, CollectionKind::Online, "A"),
                collection(2, CollectionKind::Online, "A"),
            ],
            vec![collection(3, CollectionKind::Field, "B")],
        ];
        let specs = marker_specs(&groups);
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].kind, MarkerKind::Cluster(2));
        assert_eq!(specs[0].id, 1);
        assert_eq!(specs[1].kind, MarkerKind::Single);
    }
}

mod state;

use chrono::NaiveDate;
use contracts::hr::holidays::Department;
use contracts::vehicle::{DriverCandidate, SaveVehicleDto, Vehicle, VehicleFilter, VehicleStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::vehicle::fleet::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, paginate, sort_list, Sortable};
use crate::shared::modal_stack::{use_modal_stack, ModalHandle};
use crate::shared::notify::use_toast;
use crate::shared::page::{LoadState, PageFrame, PAGE_CAT_LIST};
use state::create_state;

fn status_badge_class(status: VehicleStatus) -> &'static str {
    match status {
        VehicleStatus::Active => "badge badge--success",
        VehicleStatus::UnderRepair => "badge badge--warning",
        VehicleStatus::Retired => "badge badge--neutral",
    }
}

fn parse_status(raw: &str) -> Option<VehicleStatus> {
    match raw {
        "active" => Some(VehicleStatus::Active),
        "repair" => Some(VehicleStatus::UnderRepair),
        "retired" => Some(VehicleStatus::Retired),
        _ => None,
    }
}

impl Sortable for Vehicle {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "model" => self.model.to_lowercase().cmp(&other.model.to_lowercase()),
            "year" => self.year.cmp(&other.year),
            "department" => self
                .department_name
                .as_deref()
                .unwrap_or("")
                .cmp(other.department_name.as_deref().unwrap_or("")),
            "driver" => self
                .driver_name
                .as_deref()
                .unwrap_or("")
                .cmp(other.driver_name.as_deref().unwrap_or("")),
            _ => self.vehicle_number.cmp(&other.vehicle_number),
        }
    }
}

#[component]
pub fn VehicleListPage() -> impl IntoView {
    let config = api::config();
    let state = create_state(config.page_size);
    let source: RwSignal<LoadState<Vec<Vehicle>>> = RwSignal::new(LoadState::Loading);
    let departments: RwSignal<Vec<Department>> = RwSignal::new(Vec::new());
    let toasts = use_toast();
    let modals = use_modal_stack();

    let refresh_view = move || {
        let Some(mut rows) = source.with_untracked(|l| l.loaded().cloned()) else {
            return;
        };
        state.update(|s| {
            sort_list(&mut rows, &s.sort_field, s.sort_ascending);
            let slice = paginate(&rows, s.page, s.page_size);
            s.items = slice.items;
            s.page = slice.page;
            s.total_pages = slice.total_pages;
            s.total_count = slice.total_count;
        });
    };

    // Department, status, and search go to the server; sort and paging are
    // local.
    let load_data = move || {
        let filter = state.with_untracked(|s| {
            let search = s.search.trim().to_string();
            VehicleFilter {
                department_id: s.department_filter,
                status: s.status_filter,
                search: if search.is_empty() { None } else { Some(search) },
            }
        });
        source.set(LoadState::Loading);
        spawn_local(async move {
            match api::fetch_vehicles(&config, &filter).await {
                Ok(data) => {
                    source.set(LoadState::Loaded(data));
                    refresh_view();
                }
                Err(e) => source.set(LoadState::Failed(e.notification_text())),
            }
        });
    };

    Effect::new(move |_| {
        load_data();
        spawn_local(async move {
            match api::fetch_departments().await {
                Ok(data) => departments.set(data),
                Err(e) => toasts.error(e.notification_text()),
            }
        });
    });

    let after_write = move || {
        if config.reload_after_write {
            load_data();
        }
    };

    let change_department = move |raw: String| {
        state.update(|s| {
            s.department_filter = raw.parse::<i64>().ok();
            s.page = 0;
        });
        load_data();
    };

    let change_status = move |raw: String| {
        state.update(|s| {
            s.status_filter = parse_status(&raw);
            s.page = 0;
        });
        load_data();
    };

    let change_search = move |search: String| {
        state.update(|s| {
            s.search = search;
            s.page = 0;
        });
        load_data();
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
            refresh_view();
        }
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        refresh_view();
    };

    let open_form = move |existing: Option<Vehicle>| {
        let deps = departments.get_untracked();
        modals.push(move |handle| {
            view! {
                <VehicleForm
                    departments=deps.clone()
                    existing=existing.clone()
                    handle=handle
                    on_saved=Callback::new(move |_| after_write())
                />
            }
            .into_any()
        });
    };

    let remove = move |vehicle: Vehicle| {
        spawn_local(async move {
            let question = format!("'{}' 차량을 삭제하시겠습니까?", vehicle.vehicle_number);
            if !confirm(modals, "차량 삭제", &question).await {
                return;
            }
            match api::delete_vehicle(&config, vehicle.id).await {
                Ok(payload) => {
                    toasts.success(
                        payload.message.unwrap_or_else(|| "차량이 삭제되었습니다.".to_string()),
                    );
                    load_data();
                }
                Err(e) => toasts.error(e.notification_text()),
            }
        });
    };

    view! {
        <PageFrame page_id="vehicle-fleet--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"차량 관리"</h1>
                    <Badge>{move || state.get().total_count.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_form(None)
                    >
                        {icon("plus")}
                        " 등록"
                    </Button>
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

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <select
                                class="filter-select"
                                on:change=move |ev| change_department(event_target_value(&ev))
                            >
                                <option value="">"전체 부서"</option>
                                <For
                                    each=move || departments.get()
                                    key=|d: &Department| d.id
                                    children=move |d| {
                                        view! { <option value=d.id.to_string()>{d.name.clone()}</option> }
                                    }
                                />
                            </select>
                            <select
                                class="filter-select"
                                on:change=move |ev| change_status(event_target_value(&ev))
                            >
                                <option value="">"전체 상태"</option>
                                <option value="active">"정상"</option>
                                <option value="repair">"수리중"</option>
                                <option value="retired">"폐차"</option>
                            </select>
                            <SearchInput
                                value=Signal::derive(move || state.get().search)
                                on_change=Callback::new(change_search)
                                placeholder="차량번호/모델 검색..."
                            />
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.get().page)
                                total_pages=Signal::derive(move || state.get().total_pages)
                                total_count=Signal::derive(move || state.get().total_count)
                                page_size=Signal::derive(move || state.get().page_size)
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                    </div>
                </div>

                {move || match source.get() {
                    LoadState::Loading => {
                        view! { <div class="page__placeholder">"불러오는 중..."</div> }.into_any()
                    }
                    LoadState::Failed(message) => {
                        view! { <div class="alert alert--error">{message}</div> }.into_any()
                    }
                    LoadState::Loaded(_) => {
                        view! {
                            <div class="table-wrapper">
                                <Table attr:id="vehicle-fleet-table" attr:style="width: 100%;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("number")>
                                                    "차량번호"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "number", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("model")>
                                                    "모델"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "model", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell>"차종"</TableHeaderCell>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("year")>
                                                    "연식"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "year", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell>"출고일자"</TableHeaderCell>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("department")>
                                                    "배정부서"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "department", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("driver")>
                                                    "담당운전원"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "driver", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell>"상태"</TableHeaderCell>
                                            <TableHeaderCell></TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {move || {
                                            let items = state.get().items;
                                            if items.is_empty() {
                                                view! {
                                                    <TableRow>
                                                        <TableCell attr:colspan="9">
                                                            <TableCellLayout>"데이터가 없습니다."</TableCellLayout>
                                                        </TableCell>
                                                    </TableRow>
                                                }
                                                .into_any()
                                            } else {
                                                items
                                                    .into_iter()
                                                    .map(|vehicle| {
                                                        let for_edit = vehicle.clone();
                                                        let for_delete = vehicle.clone();
                                                        view! {
                                                            <TableRow>
                                                                <TableCell>
                                                                    <TableCellLayout>
                                                                        <span style="font-weight: 500;">{vehicle.vehicle_number.clone()}</span>
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout truncate=true>{vehicle.model.clone()}</TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>
                                                                        {vehicle.vehicle_type.clone().unwrap_or_else(|| "-".to_string())}
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>
                                                                        {vehicle.year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string())}
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>
                                                                        {vehicle.release_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())}
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout truncate=true>
                                                                        {vehicle.department_name.clone().unwrap_or_else(|| "-".to_string())}
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout truncate=true>
                                                                        {vehicle.driver_name.clone().unwrap_or_else(|| "미배정".to_string())}
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>
                                                                        <span class=status_badge_class(vehicle.status)>
                                                                            {vehicle.status.label()}
                                                                        </span>
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <Button
                                                                        appearance=ButtonAppearance::Subtle
                                                                        on_click=move |_| open_form(Some(for_edit.clone()))
                                                                        attr:title="수정"
                                                                    >
                                                                        {icon("edit")}
                                                                    </Button>
                                                                    <Button
                                                                        appearance=ButtonAppearance::Subtle
                                                                        on_click=move |_| remove(for_delete.clone())
                                                                        attr:title="삭제"
                                                                    >
                                                                        {icon("trash")}
                                                                    </Button>
                                                                </TableCell>
                                                            </TableRow>
                                                        }
                                                    })
                                                    .collect_view()
                                                    .into_any()
                                            }
                                        }}
                                    </TableBody>
                                </Table>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn VehicleForm(
    departments: Vec<Department>,
    existing: Option<Vehicle>,
    handle: ModalHandle,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toasts = use_toast();
    let config = api::config();
    let id = existing.as_ref().map(|v| v.id);
    let title = if id.is_some() { "차량 수정" } else { "차량 등록" };

    let vehicle_number = RwSignal::new(
        existing
            .as_ref()
            .map(|v| v.vehicle_number.clone())
            .unwrap_or_default(),
    );
    let model = RwSignal::new(existing.as_ref().map(|v| v.model.clone()).unwrap_or_default());
    let vehicle_type = RwSignal::new(
        existing
            .as_ref()
            .and_then(|v| v.vehicle_type.clone())
            .unwrap_or_default(),
    );
    let payload_capacity = RwSignal::new(
        existing
            .as_ref()
            .and_then(|v| v.payload_capacity.clone())
            .unwrap_or_default(),
    );
    let year_text = RwSignal::new(
        existing
            .as_ref()
            .and_then(|v| v.year)
            .map(|y| y.to_string())
            .unwrap_or_default(),
    );
    let release_text = RwSignal::new(
        existing
            .as_ref()
            .and_then(|v| v.release_date)
            .map(|d| d.to_string())
            .unwrap_or_default(),
    );
    let department_id = RwSignal::new(
        existing
            .as_ref()
            .and_then(|v| v.department_id)
            .map(|id| id.to_string())
            .unwrap_or_default(),
    );
    let driver_id = RwSignal::new(
        existing
            .as_ref()
            .and_then(|v| v.driver_employee_id)
            .map(|id| id.to_string())
            .unwrap_or_default(),
    );
    let status = RwSignal::new(
        existing
            .as_ref()
            .map(|v| v.status)
            .unwrap_or(VehicleStatus::Active),
    );
    let drivers: RwSignal<Vec<DriverCandidate>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    // Driver candidates follow the selected department; no department means
    // no candidates and the assignment resets to unassigned.
    Effect::new(move |_| {
        let Ok(dept) = department_id.get().parse::<i64>() else {
            drivers.set(Vec::new());
            return;
        };
        spawn_local(async move {
            match api::fetch_drivers(dept).await {
                Ok(data) => {
                    if !data.iter().any(|d| d.id.to_string() == driver_id.get_untracked()) {
                        driver_id.set(String::new());
                    }
                    drivers.set(data);
                }
                Err(e) => toasts.error(e.notification_text()),
            }
        });
    });

    let on_save = {
        let handle = handle.clone();
        move |_| {
            let number = vehicle_number.get_untracked().trim().to_string();
            if number.is_empty() {
                set_error.set(Some("차량번호는 필수입니다.".to_string()));
                return;
            }
            let model_trimmed = model.get_untracked().trim().to_string();
            if model_trimmed.is_empty() {
                set_error.set(Some("모델은 필수입니다.".to_string()));
                return;
            }
            let year_raw = year_text.get_untracked().trim().to_string();
            let year = if year_raw.is_empty() {
                None
            } else {
                match year_raw.parse::<i32>() {
                    Ok(y) => Some(y),
                    Err(_) => {
                        set_error.set(Some("연식이 올바르지 않습니다.".to_string()));
                        return;
                    }
                }
            };
            let release_raw = release_text.get_untracked().trim().to_string();
            let release_date = if release_raw.is_empty() {
                None
            } else {
                match NaiveDate::parse_from_str(&release_raw, "%Y-%m-%d") {
                    Ok(d) => Some(d),
                    Err(_) => {
                        set_error.set(Some("출고일자 형식이 올바르지 않습니다.".to_string()));
                        return;
                    }
                }
            };
            let type_trimmed = vehicle_type.get_untracked().trim().to_string();
            let capacity_trimmed = payload_capacity.get_untracked().trim().to_string();
            let dto = SaveVehicleDto {
                vehicle_number: number,
                model: model_trimmed,
                vehicle_type: if type_trimmed.is_empty() { None } else { Some(type_trimmed) },
                payload_capacity: if capacity_trimmed.is_empty() {
                    None
                } else {
                    Some(capacity_trimmed)
                },
                year,
                release_date,
                department_id: department_id.get_untracked().parse::<i64>().ok(),
                driver_employee_id: driver_id.get_untracked().parse::<i64>().ok(),
                status: status.get_untracked(),
            };
            set_saving.set(true);
            set_error.set(None);
            let handle = handle.clone();
            spawn_local(async move {
                match api::save_vehicle(&config, id, &dto).await {
                    Ok(payload) => {
                        toasts.success(
                            payload
                                .message
                                .unwrap_or_else(|| "차량이 등록되었습니다.".to_string()),
                        );
                        on_saved.run(());
                        handle.close();
                    }
                    Err(e) => {
                        set_error.set(Some(e.notification_text()));
                        set_saving.set(false);
                    }
                }
            });
        }
    };

    let on_cancel = {
        let handle = handle.clone();
        move |_| handle.close()
    };

    view! {
        <div class="modal-form">
            <div class="modal-header">
                <h2 class="modal-title">{title}</h2>
            </div>

            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <Label>"차량번호"</Label>
                    <Input value=vehicle_number disabled=Signal::derive(move || saving.get()) />
                </div>

                <div class="form__group">
                    <Label>"모델"</Label>
                    <Input value=model disabled=Signal::derive(move || saving.get()) />
                </div>

                <div class="form__group">
                    <Label>"차종"</Label>
                    <Input value=vehicle_type disabled=Signal::derive(move || saving.get()) />
                </div>

                <div class="form__group">
                    <Label>"적재량"</Label>
                    <Input value=payload_capacity disabled=Signal::derive(move || saving.get()) />
                </div>

                <div class="form__group">
                    <Label>"연식"</Label>
                    <Input value=year_text disabled=Signal::derive(move || saving.get()) />
                </div>

                <div class="form__group">
                    <Label>"출고일자"</Label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || release_text.get()
                        on:input=move |ev| release_text.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__group">
                    <Label>"배정부서"</Label>
                    <select
                        class="form__input"
                        on:change=move |ev| department_id.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || department_id.get().is_empty()>"미배정"</option>
                        {departments
                            .iter()
                            .map(|d| {
                                let value = d.id.to_string();
                                let selected_value = value.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || department_id.get() == selected_value
                                    >
                                        {d.name.clone()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form__group">
                    <Label>"담당운전원"</Label>
                    <select
                        class="form__input"
                        on:change=move |ev| driver_id.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || driver_id.get().is_empty()>"미배정"</option>
                        <For
                            each=move || drivers.get()
                            key=|d: &DriverCandidate| d.id
                            children=move |d| {
                                let value = d.id.to_string();
                                let selected_value = value.clone();
                                let text = format!(
                                    "{} ({})",
                                    d.name,
                                    d.position_name.clone().unwrap_or_else(|| "-".to_string())
                                );
                                view! {
                                    <option
                                        value=value
                                        selected=move || driver_id.get() == selected_value
                                    >
                                        {text}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>

                <div class="form__group">
                    <Label>"상태"</Label>
                    <select
                        class="form__input"
                        on:change=move |ev| {
                            if let Some(parsed) = parse_status(&event_target_value(&ev)) {
                                status.set(parsed);
                            }
                        }
                    >
                        <option value="active" selected=move || status.get() == VehicleStatus::Active>"정상"</option>
                        <option value="repair" selected=move || status.get() == VehicleStatus::UnderRepair>"수리중"</option>
                        <option value="retired" selected=move || status.get() == VehicleStatus::Retired>"폐차"</option>
                    </select>
                </div>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=on_cancel
                    disabled=Signal::derive(move || saving.get())
                >
                    "취소"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "저장 중..." } else { "저장" }}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: i64, number: &str, year: Option<i32>) -> Vehicle {
        Vehicle {
            id,
            vehicle_number: number.to_string(),
            model: "포터2".to_string(),
            vehicle_type: None,
            payload_capacity: None,
            year,
            release_date: None,
            department_id: None,
            department_name: None,
            driver_employee_id: None,
            driver_name: None,
            status: VehicleStatus::Active,
        }
    }

    #[test]
    fn status_filter_values_match_the_select_options() {
        assert_eq!(parse_status("active"), Some(VehicleStatus::Active));
        assert_eq!(parse_status("repair"), Some(VehicleStatus::UnderRepair));
        assert_eq!(parse_status("retired"), Some(VehicleStatus::Retired));
        assert_eq!(parse_status(""), None);
    }

    #[test]
    fn status_wire_value_is_the_korean_label() {
        let json = serde_json::to_string(&VehicleStatus::UnderRepair).unwrap();
        assert_eq!(json, "\"수리중\"");
    }

    #[test]
    fn sorting_by_year_places_unknown_years_first() {
        let mut rows = vec![
            vehicle(1, "82가1234", Some(2021)),
            vehicle(2, "83나5678", None),
            vehicle(3, "84다9012", Some(2018)),
        ];
        sort_list(&mut rows, "year", true);
        assert_eq!(rows[0].id, 2);
        assert_eq!(rows[1].id, 3);
        assert_eq!(rows[2].id, 1);
    }
}

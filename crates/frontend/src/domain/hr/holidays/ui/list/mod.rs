mod state;

use chrono::NaiveDate;
use contracts::hr::holidays::{Department, Holiday, HolidayIndex, HolidayKind, SaveHolidayDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::hr::holidays::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, paginate, sort_list, Sortable};
use crate::shared::modal_stack::{use_modal_stack, ModalHandle};
use crate::shared::notify::use_toast;
use crate::shared::page::{LoadState, PageFrame, PAGE_CAT_LIST};
use state::create_state;

impl Sortable for Holiday {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "kind" => self.kind.label().cmp(other.kind.label()),
            "department" => self
                .department_name
                .as_deref()
                .unwrap_or("전사")
                .cmp(other.department_name.as_deref().unwrap_or("전사")),
            _ => self.date.cmp(&other.date),
        }
    }
}

#[component]
pub fn HolidaysListPage() -> impl IntoView {
    let config = api::config();
    let state = create_state(config.page_size);
    let index: RwSignal<LoadState<HolidayIndex>> = RwSignal::new(LoadState::Loading);
    let toasts = use_toast();
    let modals = use_modal_stack();

    let refresh_view = move || {
        let Some(data) = index.with_untracked(|l| l.loaded().cloned()) else {
            return;
        };
        let filter = state.with_untracked(|s| s.department_filter);
        let mut rows = data.holidays;
        if let Some(dept) = filter {
            rows.retain(|h| h.department_id == Some(dept));
        }
        state.update(|s| {
            sort_list(&mut rows, &s.sort_field, s.sort_ascending);
            let slice = paginate(&rows, s.page, s.page_size);
            s.items = slice.items;
            s.page = slice.page;
            s.total_pages = slice.total_pages;
            s.total_count = slice.total_count;
        });
    };

    let load_data = move || {
        index.set(LoadState::Loading);
        spawn_local(async move {
            match api::fetch_index(&config).await {
                Ok(data) => {
                    index.set(LoadState::Loaded(data));
                    refresh_view();
                }
                Err(e) => index.set(LoadState::Failed(e.notification_text())),
            }
        });
    };

    Effect::new(move |_| load_data());

    let departments = Signal::derive(move || {
        index.with(|l| {
            l.loaded()
                .map(|d| d.departments.clone())
                .unwrap_or_default()
        })
    });

    let after_write = move || {
        if config.reload_after_write {
            load_data();
        }
    };

    let open_form = move |existing: Option<Holiday>| {
        let deps = departments.get_untracked();
        modals.push(move |handle| {
            view! {
                <HolidayForm
                    departments=deps.clone()
                    existing=existing.clone()
                    handle=handle
                    on_saved=Callback::new(move |_| after_write())
                />
            }
            .into_any()
        });
    };

    let remove = move |holiday: Holiday| {
        spawn_local(async move {
            let question = format!("'{}' 항목을 삭제하시겠습니까?", holiday.name);
            if !confirm(modals, "휴일 삭제", &question).await {
                return;
            }
            match api::delete_holiday(&config, holiday.id).await {
                Ok(payload) => {
                    toasts.success(payload.message.unwrap_or_else(|| "삭제되었습니다.".to_string()));
                    load_data();
                }
                Err(e) => toasts.error(e.notification_text()),
            }
        });
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

    let change_department = move |raw: String| {
        state.update(|s| {
            s.department_filter = raw.parse::<i64>().ok();
            s.page = 0;
        });
        refresh_view();
    };

    view! {
        <PageFrame page_id="hr-holidays--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"휴일 관리"</h1>
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
                        disabled=Signal::derive(move || index.with(|l| l.is_loading()))
                    >
                        {icon("refresh")}
                        " 새로고침"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || match index.get() {
                    LoadState::Loading => {
                        view! { <div class="page__placeholder">"불러오는 중..."</div> }.into_any()
                    }
                    LoadState::Failed(message) => {
                        view! { <div class="alert alert--error">{message}</div> }.into_any()
                    }
                    LoadState::Loaded(_) => {
                        view! {
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

                            <div class="table-wrapper">
                                <Table attr:id="hr-holidays-table" attr:style="width: 100%;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("date")>
                                                    "날짜"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "date", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("name")>
                                                    "이름"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "name", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("kind")>
                                                    "구분"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "kind", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("department")>
                                                    "부서"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "department", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell>"연차 차감"</TableHeaderCell>
                                            <TableHeaderCell></TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {move || {
                                            let items = state.get().items;
                                            if items.is_empty() {
                                                view! {
                                                    <TableRow>
                                                        <TableCell attr:colspan="6">
                                                            <TableCellLayout>"데이터가 없습니다."</TableCellLayout>
                                                        </TableCell>
                                                    </TableRow>
                                                }
                                                .into_any()
                                            } else {
                                                items
                                                    .into_iter()
                                                    .map(|holiday| {
                                                        let for_edit = holiday.clone();
                                                        let for_delete = holiday.clone();
                                                        let kind_class = match holiday.kind {
                                                            HolidayKind::Holiday => "badge badge--error",
                                                            HolidayKind::Workday => "badge badge--neutral",
                                                        };
                                                        view! {
                                                            <TableRow>
                                                                <TableCell>
                                                                    <TableCellLayout>{holiday.date.to_string()}</TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout truncate=true>
                                                                        <span style="font-weight: 500;">{holiday.name.clone()}</span>
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>
                                                                        <span class=kind_class>{holiday.kind.label()}</span>
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout truncate=true>
                                                                        {holiday.department_name.clone().unwrap_or_else(|| "전사".to_string())}
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>
                                                                        {if holiday.deduct_leave { "차감" } else { "-" }}
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
fn HolidayForm(
    departments: Vec<Department>,
    existing: Option<Holiday>,
    handle: ModalHandle,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toasts = use_toast();
    let config = api::config();
    let id = existing.as_ref().map(|h| h.id);
    let title = if id.is_some() { "휴일 수정" } else { "휴일 등록" };

    let name = RwSignal::new(existing.as_ref().map(|h| h.name.clone()).unwrap_or_default());
    let date_text = RwSignal::new(
        existing
            .as_ref()
            .map(|h| h.date.to_string())
            .unwrap_or_default(),
    );
    let is_workday = RwSignal::new(matches!(
        existing.as_ref().map(|h| h.kind),
        Some(HolidayKind::Workday)
    ));
    let department_id = RwSignal::new(
        existing
            .as_ref()
            .and_then(|h| h.department_id)
            .map(|id| id.to_string())
            .unwrap_or_default(),
    );
    let deduct_leave = RwSignal::new(existing.as_ref().map(|h| h.deduct_leave).unwrap_or(false));
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let on_save = {
        let handle = handle.clone();
        move |_| {
            let trimmed = name.get_untracked().trim().to_string();
            if trimmed.is_empty() {
                set_error.set(Some("이름은 필수입니다.".to_string()));
                return;
            }
            let date = match NaiveDate::parse_from_str(date_text.get_untracked().trim(), "%Y-%m-%d")
            {
                Ok(d) => d,
                Err(_) => {
                    set_error.set(Some("날짜 형식이 올바르지 않습니다.".to_string()));
                    return;
                }
            };
            let dto = SaveHolidayDto {
                name: trimmed,
                date,
                kind: if is_workday.get_untracked() {
                    HolidayKind::Workday
                } else {
                    HolidayKind::Holiday
                },
                department_id: department_id.get_untracked().parse::<i64>().ok(),
                deduct_leave: deduct_leave.get_untracked(),
            };
            set_saving.set(true);
            set_error.set(None);
            let handle = handle.clone();
            spawn_local(async move {
                match api::save_holiday(&config, id, &dto).await {
                    Ok(payload) => {
                        toasts.success(
                            payload.message.unwrap_or_else(|| "등록되었습니다.".to_string()),
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
                    <Label>"이름"</Label>
                    <Input value=name disabled=Signal::derive(move || saving.get()) />
                </div>

                <div class="form__group">
                    <Label>"날짜"</Label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || date_text.get()
                        on:input=move |ev| date_text.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__group">
                    <Label>"구분"</Label>
                    <select
                        class="form__input"
                        on:change=move |ev| is_workday.set(event_target_value(&ev) == "workday")
                    >
                        <option value="holiday" selected=move || !is_workday.get()>"휴일"</option>
                        <option value="workday" selected=move || is_workday.get()>"특정 근무일"</option>
                    </select>
                </div>

                <div class="form__group">
                    <Label>"부서"</Label>
                    <select
                        class="form__input"
                        on:change=move |ev| department_id.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || department_id.get().is_empty()>"전사"</option>
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
                    <Checkbox checked=deduct_leave label="연차 차감" />
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

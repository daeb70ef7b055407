mod state;

use contracts::supply::{SaveSupplyItemDto, SupplyCategory, SupplyItem, SupplyItemFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::supply::items::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, paginate, sort_list, Sortable};
use crate::shared::modal_stack::{use_modal_stack, ModalHandle};
use crate::shared::notify::use_toast;
use crate::shared::page::{LoadState, PageFrame, PAGE_CAT_LIST};
use state::create_state;

impl Sortable for SupplyItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "category" => self
                .category_name
                .as_deref()
                .unwrap_or("")
                .cmp(other.category_name.as_deref().unwrap_or("")),
            "unit" => self.unit.cmp(&other.unit),
            "price" => self.price.cmp(&other.price),
            "stock" => self.stock_quantity.cmp(&other.stock_quantity),
            "active" => self.is_active.cmp(&other.is_active),
            _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
        }
    }
}

#[component]
pub fn SupplyItemsListPage() -> impl IntoView {
    let config = api::config();
    let state = create_state(config.page_size);
    let source: RwSignal<LoadState<Vec<SupplyItem>>> = RwSignal::new(LoadState::Loading);
    let categories: RwSignal<Vec<SupplyCategory>> = RwSignal::new(Vec::new());
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

    // Keyword and category are server-side filters; sort and paging are local.
    let load_data = move || {
        let filter = state.with_untracked(|s| {
            let keyword = s.keyword.trim().to_string();
            SupplyItemFilter {
                category_id: s.category_filter,
                keyword: if keyword.is_empty() { None } else { Some(keyword) },
            }
        });
        source.set(LoadState::Loading);
        spawn_local(async move {
            match api::fetch_items(&config, &filter).await {
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
            match api::fetch_categories().await {
                Ok(data) => categories.set(data),
                Err(e) => toasts.error(e.notification_text()),
            }
        });
    });

    let after_write = move || {
        if config.reload_after_write {
            load_data();
        }
    };

    let change_keyword = move |keyword: String| {
        state.update(|s| {
            s.keyword = keyword;
            s.page = 0;
        });
        load_data();
    };

    let change_category = move |raw: String| {
        state.update(|s| {
            s.category_filter = raw.parse::<i64>().ok();
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

    let open_form = move |existing: Option<SupplyItem>| {
        let cats = categories.get_untracked();
        modals.push(move |handle| {
            view! {
                <SupplyItemForm
                    categories=cats.clone()
                    existing=existing.clone()
                    handle=handle
                    on_saved=Callback::new(move |_| after_write())
                />
            }
            .into_any()
        });
    };

    let remove = move |item: SupplyItem| {
        spawn_local(async move {
            let question = format!("'{}' 품목을 삭제하시겠습니까?", item.name);
            if !confirm(modals, "품목 삭제", &question).await {
                return;
            }
            match api::delete_item(&config, item.id).await {
                Ok(payload) => {
                    toasts.success(payload.message.unwrap_or_else(|| "삭제되었습니다.".to_string()));
                    load_data();
                }
                Err(e) => toasts.error(e.notification_text()),
            }
        });
    };

    view! {
        <PageFrame page_id="supply-items--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"물품 관리"</h1>
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
                                on:change=move |ev| change_category(event_target_value(&ev))
                            >
                                <option value="">"전체 분류"</option>
                                <For
                                    each=move || categories.get()
                                    key=|c: &SupplyCategory| c.id
                                    children=move |c| {
                                        view! { <option value=c.id.to_string()>{c.name.clone()}</option> }
                                    }
                                />
                            </select>
                            <SearchInput
                                value=Signal::derive(move || state.get().keyword)
                                on_change=Callback::new(change_keyword)
                                placeholder="품목명 검색..."
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
                                <Table attr:id="supply-items-table" attr:style="width: 100%;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("name")>
                                                    "품목명"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "name", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("category")>
                                                    "분류"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "category", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("unit")>
                                                    "단위"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "unit", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("price")>
                                                    "단가"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "price", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("stock")>
                                                    "재고"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "stock", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("active")>
                                                    "상태"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "active", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell></TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {move || {
                                            let items = state.get().items;
                                            if items.is_empty() {
                                                view! {
                                                    <TableRow>
                                                        <TableCell attr:colspan="7">
                                                            <TableCellLayout>"데이터가 없습니다."</TableCellLayout>
                                                        </TableCell>
                                                    </TableRow>
                                                }
                                                .into_any()
                                            } else {
                                                items
                                                    .into_iter()
                                                    .map(|item| {
                                                        let for_edit = item.clone();
                                                        let for_delete = item.clone();
                                                        view! {
                                                            <TableRow>
                                                                <TableCell>
                                                                    <TableCellLayout truncate=true>
                                                                        <span style="font-weight: 500;">{item.name.clone()}</span>
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout truncate=true>
                                                                        {item.category_name.clone().unwrap_or_else(|| "-".to_string())}
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>{item.unit.clone()}</TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>{item.price}</TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>{item.stock_quantity}</TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>
                                                                        {if item.is_active {
                                                                            view! { <span class="badge badge--success">"사용"</span> }.into_any()
                                                                        } else {
                                                                            view! { <span class="badge badge--neutral">"중지"</span> }.into_any()
                                                                        }}
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
fn SupplyItemForm(
    categories: Vec<SupplyCategory>,
    existing: Option<SupplyItem>,
    handle: ModalHandle,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toasts = use_toast();
    let config = api::config();
    let id = existing.as_ref().map(|i| i.id);
    let title = if id.is_some() { "품목 수정" } else { "품목 등록" };

    let name = RwSignal::new(existing.as_ref().map(|i| i.name.clone()).unwrap_or_default());
    let unit = RwSignal::new(existing.as_ref().map(|i| i.unit.clone()).unwrap_or_default());
    let price_text = RwSignal::new(
        existing
            .as_ref()
            .map(|i| i.price.to_string())
            .unwrap_or_default(),
    );
    let category_id = RwSignal::new(
        existing
            .as_ref()
            .map(|i| i.category_id.to_string())
            .unwrap_or_default(),
    );
    let is_active = RwSignal::new(existing.as_ref().map(|i| i.is_active).unwrap_or(true));
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let on_save = {
        let handle = handle.clone();
        move |_| {
            let trimmed = name.get_untracked().trim().to_string();
            if trimmed.is_empty() {
                set_error.set(Some("품목명은 필수입니다.".to_string()));
                return;
            }
            let Ok(category) = category_id.get_untracked().parse::<i64>() else {
                set_error.set(Some("분류를 선택하세요.".to_string()));
                return;
            };
            let Ok(price) = price_text.get_untracked().trim().parse::<i64>() else {
                set_error.set(Some("단가가 올바르지 않습니다.".to_string()));
                return;
            };
            let dto = SaveSupplyItemDto {
                category_id: category,
                name: trimmed,
                unit: unit.get_untracked().trim().to_string(),
                price,
                is_active: is_active.get_untracked(),
            };
            set_saving.set(true);
            set_error.set(None);
            let handle = handle.clone();
            spawn_local(async move {
                match api::save_item(&config, id, &dto).await {
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
                    <Label>"품목명"</Label>
                    <Input value=name disabled=Signal::derive(move || saving.get()) />
                </div>

                <div class="form__group">
                    <Label>"분류"</Label>
                    <select
                        class="form__input"
                        on:change=move |ev| category_id.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || category_id.get().is_empty()>"선택"</option>
                        {categories
                            .iter()
                            .map(|c| {
                                let value = c.id.to_string();
                                let selected_value = value.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || category_id.get() == selected_value
                                    >
                                        {c.name.clone()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form__group">
                    <Label>"단위"</Label>
                    <Input value=unit disabled=Signal::derive(move || saving.get()) />
                </div>

                <div class="form__group">
                    <Label>"단가"</Label>
                    <Input value=price_text disabled=Signal::derive(move || saving.get()) />
                </div>

                <div class="form__group">
                    <Checkbox checked=is_active label="사용" />
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

mod state;

use contracts::system::users::{
    LinkEmployeeDto, PortalUser, Role, UnlinkedEmployee, UpdateUserDto, UserFilter, UserStatus,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, paginate, sort_list, Sortable};
use crate::shared::modal_stack::{use_modal_stack, ModalHandle};
use crate::shared::notify::use_toast;
use crate::shared::page::{LoadState, PageFrame, PAGE_CAT_SYSTEM};
use crate::system::users::api;
use state::create_state;

fn status_badge_class(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "badge badge--success",
        UserStatus::Pending => "badge badge--warning",
        UserStatus::Blocked => "badge badge--error",
    }
}

fn parse_status(raw: &str) -> Option<UserStatus> {
    match raw {
        "active" => Some(UserStatus::Active),
        "pending" => Some(UserStatus::Pending),
        "blocked" => Some(UserStatus::Blocked),
        _ => None,
    }
}

impl Sortable for PortalUser {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "status" => self.status.label().cmp(other.status.label()),
            "employee" => self
                .employee_name
                .as_deref()
                .unwrap_or("")
                .cmp(other.employee_name.as_deref().unwrap_or("")),
            _ => self
                .nickname
                .to_lowercase()
                .cmp(&other.nickname.to_lowercase()),
        }
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let config = api::config();
    let state = create_state(config.page_size);
    let source: RwSignal<LoadState<Vec<PortalUser>>> = RwSignal::new(LoadState::Loading);
    let roles: RwSignal<Vec<Role>> = RwSignal::new(Vec::new());
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

    let load_data = move || {
        let filter = state.with_untracked(|s| {
            let nickname = s.nickname.trim().to_string();
            UserFilter {
                status: s.status_filter,
                nickname: if nickname.is_empty() { None } else { Some(nickname) },
                role_id: s.role_filter,
            }
        });
        source.set(LoadState::Loading);
        spawn_local(async move {
            match api::fetch_users(&config, &filter).await {
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
            match api::fetch_roles().await {
                Ok(data) => roles.set(data),
                Err(e) => toasts.error(e.notification_text()),
            }
        });
    });

    let after_write = move || {
        if config.reload_after_write {
            load_data();
        }
    };

    let change_nickname = move |nickname: String| {
        state.update(|s| {
            s.nickname = nickname;
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

    let change_role = move |raw: String| {
        state.update(|s| {
            s.role_filter = raw.parse::<i64>().ok();
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

    let open_edit = move |user: PortalUser| {
        let role_options = roles.get_untracked();
        modals.push(move |handle| {
            view! {
                <UserEditForm
                    roles=role_options.clone()
                    user=user.clone()
                    handle=handle
                    on_saved=Callback::new(move |_| after_write())
                />
            }
            .into_any()
        });
    };

    let open_link = move |user: PortalUser| {
        modals.push(move |handle| {
            view! {
                <LinkEmployeeForm
                    user=user.clone()
                    handle=handle
                    on_saved=Callback::new(move |_| after_write())
                />
            }
            .into_any()
        });
    };

    let unlink = move |user: PortalUser| {
        spawn_local(async move {
            let employee = user.employee_name.clone().unwrap_or_else(|| "-".to_string());
            let question = format!("'{}' 계정과 직원 '{}' 연결을 해제하시겠습니까?", user.nickname, employee);
            if !confirm(modals, "직원 연결 해제", &question).await {
                return;
            }
            match api::unlink_employee(&config, user.id).await {
                Ok(payload) => {
                    toasts.success(payload.message.unwrap_or_else(|| "해제되었습니다.".to_string()));
                    load_data();
                }
                Err(e) => toasts.error(e.notification_text()),
            }
        });
    };

    view! {
        <PageFrame page_id="sys-users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"사용자 관리"</h1>
                    <Badge>{move || state.get().total_count.to_string()}</Badge>
                </div>
                <div class="page__header-right">
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
                                on:change=move |ev| change_status(event_target_value(&ev))
                            >
                                <option value="">"전체 상태"</option>
                                <option value="active">"활성"</option>
                                <option value="pending">"대기"</option>
                                <option value="blocked">"차단"</option>
                            </select>
                            <select
                                class="filter-select"
                                on:change=move |ev| change_role(event_target_value(&ev))
                            >
                                <option value="">"전체 역할"</option>
                                <For
                                    each=move || roles.get()
                                    key=|r: &Role| r.id
                                    children=move |r| {
                                        view! { <option value=r.id.to_string()>{r.name.clone()}</option> }
                                    }
                                />
                            </select>
                            <SearchInput
                                value=Signal::derive(move || state.get().nickname)
                                on_change=Callback::new(change_nickname)
                                placeholder="닉네임 검색..."
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
                                <Table attr:id="sys-users-table" attr:style="width: 100%;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("nickname")>
                                                    "닉네임"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "nickname", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("status")>
                                                    "상태"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "status", s.sort_ascending))}
                                                </div>
                                            </TableHeaderCell>
                                            <TableHeaderCell>"역할"</TableHeaderCell>
                                            <TableHeaderCell>
                                                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort("employee")>
                                                    "연결 직원"
                                                    {move || state.with(|s| get_sort_indicator(&s.sort_field, "employee", s.sort_ascending))}
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
                                                        <TableCell attr:colspan="5">
                                                            <TableCellLayout>"데이터가 없습니다."</TableCellLayout>
                                                        </TableCell>
                                                    </TableRow>
                                                }
                                                .into_any()
                                            } else {
                                                items
                                                    .into_iter()
                                                    .map(|user| {
                                                        let for_edit = user.clone();
                                                        let for_link = user.clone();
                                                        let for_unlink = user.clone();
                                                        let linked = user.employee_id.is_some();
                                                        view! {
                                                            <TableRow>
                                                                <TableCell>
                                                                    <TableCellLayout truncate=true>
                                                                        <span style="font-weight: 500;">{user.nickname.clone()}</span>
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>
                                                                        <span class=status_badge_class(user.status)>
                                                                            {user.status.label()}
                                                                        </span>
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout truncate=true>
                                                                        {if user.role_names.is_empty() {
                                                                            "-".to_string()
                                                                        } else {
                                                                            user.role_names.join(", ")
                                                                        }}
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout truncate=true>
                                                                        {user.employee_name.clone().unwrap_or_else(|| "-".to_string())}
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <Button
                                                                        appearance=ButtonAppearance::Subtle
                                                                        on_click=move |_| open_edit(for_edit.clone())
                                                                        attr:title="수정"
                                                                    >
                                                                        {icon("edit")}
                                                                    </Button>
                                                                    {if linked {
                                                                        view! {
                                                                            <Button
                                                                                appearance=ButtonAppearance::Subtle
                                                                                on_click=move |_| unlink(for_unlink.clone())
                                                                                attr:title="직원 연결 해제"
                                                                            >
                                                                                {icon("x")}
                                                                            </Button>
                                                                        }
                                                                        .into_any()
                                                                    } else {
                                                                        view! {
                                                                            <Button
                                                                                appearance=ButtonAppearance::Subtle
                                                                                on_click=move |_| open_link(for_link.clone())
                                                                                attr:title="직원 연결"
                                                                            >
                                                                                {icon("users")}
                                                                            </Button>
                                                                        }
                                                                        .into_any()
                                                                    }}
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
fn UserEditForm(
    roles: Vec<Role>,
    user: PortalUser,
    handle: ModalHandle,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toasts = use_toast();
    let config = api::config();
    let user_id = user.id;
    let title = format!("사용자 수정: {}", user.nickname);

    let status = RwSignal::new(user.status);
    // PortalUser carries role names; preselect the matching role ids.
    let initial: HashSet<i64> = roles
        .iter()
        .filter(|r| user.role_names.iter().any(|name| name == &r.name))
        .map(|r| r.id)
        .collect();
    let selected_roles: RwSignal<HashSet<i64>> = RwSignal::new(initial);
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let on_save = {
        let handle = handle.clone();
        move |_| {
            let mut role_ids: Vec<i64> = selected_roles.get_untracked().into_iter().collect();
            role_ids.sort_unstable();
            let dto = UpdateUserDto {
                status: status.get_untracked(),
                role_ids,
            };
            set_saving.set(true);
            set_error.set(None);
            let handle = handle.clone();
            spawn_local(async move {
                match api::update_user(&config, user_id, &dto).await {
                    Ok(payload) => {
                        toasts.success(
                            payload.message.unwrap_or_else(|| "저장되었습니다.".to_string()),
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
                    <Label>"상태"</Label>
                    <select
                        class="form__input"
                        on:change=move |ev| {
                            if let Some(next) = parse_status(&event_target_value(&ev)) {
                                status.set(next);
                            }
                        }
                    >
                        <option value="active" selected=move || status.get() == UserStatus::Active>"활성"</option>
                        <option value="pending" selected=move || status.get() == UserStatus::Pending>"대기"</option>
                        <option value="blocked" selected=move || status.get() == UserStatus::Blocked>"차단"</option>
                    </select>
                </div>

                <div class="form__group">
                    <Label>"역할"</Label>
                    {roles
                        .iter()
                        .map(|role| {
                            let role_id = role.id;
                            let checked = Signal::derive(move || {
                                selected_roles.with(|s| s.contains(&role_id))
                            });
                            view! {
                                <label class="form__checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || checked.get()
                                        on:change=move |ev| {
                                            let on = event_target_checked(&ev);
                                            selected_roles.update(|s| {
                                                if on {
                                                    s.insert(role_id);
                                                } else {
                                                    s.remove(&role_id);
                                                }
                                            });
                                        }
                                    />
                                    {role.name.clone()}
                                </label>
                            }
                        })
                        .collect_view()}
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

#[component]
fn LinkEmployeeForm(
    user: PortalUser,
    handle: ModalHandle,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toasts = use_toast();
    let config = api::config();
    let user_id = user.id;
    let title = format!("직원 연결: {}", user.nickname);

    let candidates: RwSignal<LoadState<Vec<UnlinkedEmployee>>> = RwSignal::new(LoadState::Loading);
    let employee_id = RwSignal::new(String::new());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_unlinked_employees().await {
                Ok(data) => candidates.set(LoadState::Loaded(data)),
                Err(e) => candidates.set(LoadState::Failed(e.notification_text())),
            }
        });
    });

    let on_save = {
        let handle = handle.clone();
        move |_| {
            let Ok(employee) = employee_id.get_untracked().parse::<i64>() else {
                set_error.set(Some("직원을 선택하세요.".to_string()));
                return;
            };
            let dto = LinkEmployeeDto {
                employee_id: employee,
            };
            set_saving.set(true);
            set_error.set(None);
            let handle = handle.clone();
            spawn_local(async move {
                match api::link_employee(&config, user_id, &dto).await {
                    Ok(payload) => {
                        toasts.success(
                            payload.message.unwrap_or_else(|| "연결되었습니다.".to_string()),
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

                {move || match candidates.get() {
                    LoadState::Loading => {
                        view! { <div class="page__placeholder">"불러오는 중..."</div> }.into_any()
                    }
                    LoadState::Failed(message) => {
                        view! { <div class="alert alert--error">{message}</div> }.into_any()
                    }
                    LoadState::Loaded(employees) => {
                        view! {
                            <div class="form__group">
                                <Label>"직원"</Label>
                                <select
                                    class="form__input"
                                    on:change=move |ev| employee_id.set(event_target_value(&ev))
                                >
                                    <option value="" selected=move || employee_id.get().is_empty()>"선택"</option>
                                    {employees
                                        .iter()
                                        .map(|e| {
                                            let value = e.id.to_string();
                                            let selected_value = value.clone();
                                            let label = match &e.employee_number {
                                                Some(number) => format!("{} ({})", e.name, number),
                                                None => e.name.clone(),
                                            };
                                            view! {
                                                <option
                                                    value=value
                                                    selected=move || employee_id.get() == selected_value
                                                >
                                                    {label}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        }
                        .into_any()
                    }
                }}
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
                    {move || if saving.get() { "연결 중..." } else { "연결" }}
                </Button>
            </div>
        </div>
    }
}

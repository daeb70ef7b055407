mod state;

use contracts::leave::{LeaveAdminFilter, LeaveRequest, LeaveStatus, RejectLeaveDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

use crate::domain::leave::approvals::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::dialog::{confirm, prompt_text, TextValidator};
use crate::shared::icons::icon;
use crate::shared::list_utils::paginate;
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::notify::use_toast;
use crate::shared::page::{LoadState, PageFrame, PAGE_CAT_LIST};
use state::create_state;

fn status_badge_class(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "badge badge--warning",
        LeaveStatus::Approved => "badge badge--success",
        LeaveStatus::Rejected => "badge badge--error",
        LeaveStatus::Cancelled => "badge badge--neutral",
    }
}

/// A rejection needs both a non-empty reason and an explicit confirmation;
/// declining either step must issue no request.
fn build_reject_dto(reason: &str, confirmed: bool) -> Option<RejectLeaveDto> {
    if !confirmed {
        return None;
    }
    Some(RejectLeaveDto {
        reason: reason.trim().to_string(),
    })
}

fn parse_status(raw: &str) -> Option<LeaveStatus> {
    match raw {
        "pending" => Some(LeaveStatus::Pending),
        "approved" => Some(LeaveStatus::Approved),
        "rejected" => Some(LeaveStatus::Rejected),
        "cancelled" => Some(LeaveStatus::Cancelled),
        _ => None,
    }
}

#[component]
pub fn LeaveApprovalsPage() -> impl IntoView {
    let config = api::config();
    let state = create_state(config.page_size);
    let source: RwSignal<LoadState<Vec<LeaveRequest>>> = RwSignal::new(LoadState::Loading);
    let toasts = use_toast();
    let modals = use_modal_stack();

    let refresh_view = move || {
        let Some(rows) = source.with_untracked(|l| l.loaded().cloned()) else {
            return;
        };
        state.update(|s| {
            let slice = paginate(&rows, s.page, s.page_size);
            s.items = slice.items;
            s.page = slice.page;
            s.total_pages = slice.total_pages;
            s.total_count = slice.total_count;
        });
    };

    // Status filtering is server-side; the page only slices the result.
    let load_data = move || {
        let filter = LeaveAdminFilter {
            status: state.with_untracked(|s| s.status_filter),
        };
        source.set(LoadState::Loading);
        spawn_local(async move {
            match api::fetch_requests(&config, &filter).await {
                Ok(data) => {
                    source.set(LoadState::Loaded(data));
                    refresh_view();
                }
                Err(e) => source.set(LoadState::Failed(e.notification_text())),
            }
        });
    };

    Effect::new(move |_| load_data());

    let change_status = move |raw: String| {
        state.update(|s| {
            s.status_filter = parse_status(&raw);
            s.page = 0;
        });
        load_data();
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

    let approve = move |request: LeaveRequest| {
        spawn_local(async move {
            let who = request.requester_name.clone().unwrap_or_else(|| "-".to_string());
            let question = format!(
                "{} / {} ~ {} ({}일) 신청을 승인하시겠습니까?",
                who, request.start_date, request.end_date, request.days
            );
            if !confirm(modals, "휴가 승인", &question).await {
                return;
            }
            match api::approve(&config, request.id).await {
                Ok(payload) => {
                    toasts.success(payload.message.unwrap_or_else(|| "승인되었습니다.".to_string()));
                    load_data();
                }
                Err(e) => toasts.error(e.notification_text()),
            }
        });
    };

    let reject = move |request: LeaveRequest| {
        spawn_local(async move {
            let validator: TextValidator = Arc::new(|text: &str| {
                if text.trim().is_empty() {
                    Err("반려 사유는 필수입니다.".to_string())
                } else {
                    Ok(())
                }
            });
            let Some(reason) = prompt_text(
                modals,
                "휴가 반려",
                "반려 사유",
                "사유를 입력하세요",
                Some(validator),
            )
            .await
            else {
                return;
            };
            let confirmed = confirm(modals, "휴가 반려", "연차 신청을 반려하시겠습니까?").await;
            let Some(dto) = build_reject_dto(&reason, confirmed) else {
                return;
            };
            match api::reject(&config, request.id, &dto).await {
                Ok(payload) => {
                    toasts.success(payload.message.unwrap_or_else(|| "반려되었습니다.".to_string()));
                    load_data();
                }
                Err(e) => toasts.error(e.notification_text()),
            }
        });
    };

    view! {
        <PageFrame page_id="leave-approvals--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"휴가 승인"</h1>
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
                                <option value="pending" selected=true>"대기"</option>
                                <option value="approved">"승인"</option>
                                <option value="rejected">"반려"</option>
                                <option value="cancelled">"취소"</option>
                                <option value="">"전체"</option>
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
                                <Table attr:id="leave-approvals-table" attr:style="width: 100%;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>"신청자"</TableHeaderCell>
                                            <TableHeaderCell>"구분"</TableHeaderCell>
                                            <TableHeaderCell>"기간"</TableHeaderCell>
                                            <TableHeaderCell>"일수"</TableHeaderCell>
                                            <TableHeaderCell>"사유"</TableHeaderCell>
                                            <TableHeaderCell>"상태"</TableHeaderCell>
                                            <TableHeaderCell>"신청일"</TableHeaderCell>
                                            <TableHeaderCell></TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {move || {
                                            let items = state.get().items;
                                            if items.is_empty() {
                                                view! {
                                                    <TableRow>
                                                        <TableCell attr:colspan="8">
                                                            <TableCellLayout>"데이터가 없습니다."</TableCellLayout>
                                                        </TableCell>
                                                    </TableRow>
                                                }
                                                .into_any()
                                            } else {
                                                items
                                                    .into_iter()
                                                    .map(|request| {
                                                        let for_approve = request.clone();
                                                        let for_reject = request.clone();
                                                        let actionable =
                                                            request.status == LeaveStatus::Pending;
                                                        view! {
                                                            <TableRow>
                                                                <TableCell>
                                                                    <TableCellLayout truncate=true>
                                                                        {request.requester_name.clone().unwrap_or_else(|| "-".to_string())}
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>{request.day_type.label()}</TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>
                                                                        {format!("{} ~ {}", request.start_date, request.end_date)}
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>{request.days}</TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout truncate=true>
                                                                        {request.reason.clone().unwrap_or_else(|| "-".to_string())}
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>
                                                                        <span class=status_badge_class(request.status)>
                                                                            {request.status.label()}
                                                                        </span>
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    <TableCellLayout>
                                                                        {format_datetime(&request.created_at)}
                                                                    </TableCellLayout>
                                                                </TableCell>
                                                                <TableCell>
                                                                    {if actionable {
                                                                        view! {
                                                                            <Button
                                                                                appearance=ButtonAppearance::Subtle
                                                                                on_click=move |_| approve(for_approve.clone())
                                                                                attr:title="승인"
                                                                            >
                                                                                {icon("check")}
                                                                            </Button>
                                                                            <Button
                                                                                appearance=ButtonAppearance::Subtle
                                                                                on_click=move |_| reject(for_reject.clone())
                                                                                attr:title="반려"
                                                                            >
                                                                                {icon("x")}
                                                                            </Button>
                                                                        }
                                                                        .into_any()
                                                                    } else {
                                                                        view! { <></> }.into_any()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declined_confirmation_builds_no_rejection() {
        assert!(build_reject_dto("무단 결근", false).is_none());
    }

    #[test]
    fn confirmed_rejection_trims_the_reason() {
        let dto = build_reject_dto("  무단 결근  ", true).unwrap();
        assert_eq!(dto.reason, "무단 결근");
    }

    #[test]
    fn status_filter_values_match_the_select_options() {
        assert_eq!(parse_status("pending"), Some(LeaveStatus::Pending));
        assert_eq!(parse_status("rejected"), Some(LeaveStatus::Rejected));
        assert_eq!(parse_status(""), None);
    }
}

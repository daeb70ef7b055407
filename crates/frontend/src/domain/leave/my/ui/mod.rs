use chrono::NaiveDate;
use contracts::leave::{
    ApplyLeaveDto, CalculateDaysDto, DayType, LeaveBalance, LeaveRequest, LeaveStatus,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::leave::calc::count_leave_days;
use crate::domain::leave::my::api;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::notify::use_toast;
use crate::shared::page::{LoadState, PageFrame, PAGE_CAT_DETAIL};

fn status_badge_class(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "badge badge--warning",
        LeaveStatus::Approved => "badge badge--success",
        LeaveStatus::Rejected => "badge badge--error",
        LeaveStatus::Cancelled => "badge badge--neutral",
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Balance and history do not depend on each other, so both requests are in
/// flight at the same time.
async fn load_both<A, B>(balance: A, requests: B) -> (A::Output, B::Output)
where
    A: std::future::Future,
    B: std::future::Future,
{
    futures::join!(balance, requests)
}

#[component]
pub fn MyLeavePage() -> impl IntoView {
    let config = api::config();
    let toasts = use_toast();
    let modals = use_modal_stack();

    let balance: RwSignal<LoadState<LeaveBalance>> = RwSignal::new(LoadState::Loading);
    let requests: RwSignal<LoadState<Vec<LeaveRequest>>> = RwSignal::new(LoadState::Loading);

    let day_type = RwSignal::new(DayType::Annual);
    let start_text = RwSignal::new(String::new());
    let end_text = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let days_preview: RwSignal<Option<f64>> = RwSignal::new(None);
    let (submitting, set_submitting) = signal(false);

    let load_data = move || {
        balance.set(LoadState::Loading);
        requests.set(LoadState::Loading);
        spawn_local(async move {
            let (balance_result, requests_result) =
                load_both(api::fetch_balance(&config), api::fetch_requests(&config)).await;
            match balance_result {
                Ok(data) => balance.set(LoadState::Loaded(data)),
                Err(e) => balance.set(LoadState::Failed(e.notification_text())),
            }
            match requests_result {
                Ok(data) => requests.set(LoadState::Loaded(data)),
                Err(e) => requests.set(LoadState::Failed(e.notification_text())),
            }
        });
    };

    Effect::new(move |_| load_data());

    // Local estimate immediately, then the server recount (holiday calendar
    // applied) replaces it unless the inputs changed in the meantime.
    let recalc = move || {
        let kind = day_type.get_untracked();
        let (start, end) = (
            parse_date(&start_text.get_untracked()),
            parse_date(&end_text.get_untracked()),
        );
        let (Some(start), Some(end)) = (start, end) else {
            days_preview.set(None);
            return;
        };

        match count_leave_days(kind, start, end) {
            Ok(days) => days_preview.set(Some(days)),
            Err(_) => {
                days_preview.set(None);
                return;
            }
        }

        let dto = CalculateDaysDto {
            start_date: start,
            end_date: end,
            is_half_day: kind.is_half_day(),
        };
        spawn_local(async move {
            if let Ok(result) = api::calculate_days(&config, &dto).await {
                let unchanged = day_type.get_untracked() == kind
                    && parse_date(&start_text.get_untracked()) == Some(start)
                    && parse_date(&end_text.get_untracked()) == Some(end);
                if unchanged {
                    days_preview.set(Some(result.days));
                }
            }
        });
    };

    let submit = move |_| {
        let kind = day_type.get_untracked();
        let (start, end) = (
            parse_date(&start_text.get_untracked()),
            parse_date(&end_text.get_untracked()),
        );
        let (Some(start), Some(end)) = (start, end) else {
            toasts.error("시작일과 종료일을 입력하세요.");
            return;
        };
        let days = match count_leave_days(kind, start, end) {
            Ok(days) => days,
            Err(e) => {
                toasts.error(e.to_string());
                return;
            }
        };
        if days <= 0.0 {
            toasts.error("신청 일수가 0일입니다.");
            return;
        }

        let trimmed_reason = reason.get_untracked().trim().to_string();
        let dto = ApplyLeaveDto {
            day_type: kind,
            start_date: start,
            end_date: end,
            reason: if trimmed_reason.is_empty() {
                None
            } else {
                Some(trimmed_reason)
            },
        };

        set_submitting.set(true);
        spawn_local(async move {
            match api::apply(&config, &dto).await {
                Ok(payload) => {
                    toasts.success(payload.message.unwrap_or_else(|| "신청되었습니다.".to_string()));
                    start_text.set(String::new());
                    end_text.set(String::new());
                    reason.set(String::new());
                    days_preview.set(None);
                    set_submitting.set(false);
                    if config.reload_after_write {
                        load_data();
                    }
                }
                Err(e) => {
                    toasts.error(e.notification_text());
                    set_submitting.set(false);
                }
            }
        });
    };

    let cancel_request = move |request: LeaveRequest| {
        spawn_local(async move {
            let question = format!(
                "{} ~ {} ({}일) 신청을 취소하시겠습니까?",
                request.start_date, request.end_date, request.days
            );
            if !confirm(modals, "휴가 취소", &question).await {
                return;
            }
            match api::cancel(&config, request.id).await {
                Ok(payload) => {
                    toasts.success(payload.message.unwrap_or_else(|| "취소되었습니다.".to_string()));
                    load_data();
                }
                Err(e) => toasts.error(e.notification_text()),
            }
        });
    };

    view! {
        <PageFrame page_id="leave-my--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"내 휴가"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_data()>
                        {icon("refresh")}
                        " 새로고침"
                    </Button>
                </div>
            </div>

            <div class="page__content leave-my">
                <div class="leave-my__balance">
                    {move || match balance.get() {
                        LoadState::Loading => {
                            view! { <div class="page__placeholder">"불러오는 중..."</div> }.into_any()
                        }
                        LoadState::Failed(message) => {
                            view! { <div class="alert alert--error">{message}</div> }.into_any()
                        }
                        LoadState::Loaded(b) => {
                            view! {
                                <div class="balance-cards">
                                    <div class="balance-card">
                                        <span class="balance-card__label">"부여"</span>
                                        <span class="balance-card__value">{b.granted}</span>
                                    </div>
                                    <div class="balance-card">
                                        <span class="balance-card__label">"사용"</span>
                                        <span class="balance-card__value">{b.used}</span>
                                    </div>
                                    <div class="balance-card">
                                        <span class="balance-card__label">"대기"</span>
                                        <span class="balance-card__value">{b.pending}</span>
                                    </div>
                                    <div class="balance-card balance-card--primary">
                                        <span class="balance-card__label">"잔여"</span>
                                        <span class="balance-card__value">{b.balance}</span>
                                    </div>
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </div>

                <div class="leave-my__form form">
                    <div class="form__group">
                        <Label>"구분"</Label>
                        <select
                            class="form__input"
                            on:change=move |ev| {
                                let half = event_target_value(&ev) == "half";
                                day_type.set(if half { DayType::HalfDay } else { DayType::Annual });
                                recalc();
                            }
                        >
                            <option value="annual" selected=move || !day_type.get().is_half_day()>
                                {DayType::Annual.label()}
                            </option>
                            <option value="half" selected=move || day_type.get().is_half_day()>
                                {DayType::HalfDay.label()}
                            </option>
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"시작일"</Label>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || start_text.get()
                            on:change=move |ev| {
                                start_text.set(event_target_value(&ev));
                                recalc();
                            }
                        />
                    </div>

                    <div class="form__group">
                        <Label>"종료일"</Label>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || end_text.get()
                            on:change=move |ev| {
                                end_text.set(event_target_value(&ev));
                                recalc();
                            }
                        />
                    </div>

                    <div class="form__group">
                        <Label>"사유"</Label>
                        <Input value=reason placeholder="(선택)" />
                    </div>

                    <div class="leave-my__days">
                        {move || match days_preview.get() {
                            Some(days) => format!("신청 일수: {}일", days),
                            None => "신청 일수: -".to_string(),
                        }}
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=submit
                        disabled=Signal::derive(move || submitting.get())
                    >
                        {move || if submitting.get() { "신청 중..." } else { "휴가 신청" }}
                    </Button>
                </div>

                <div class="table-wrapper">
                    {move || match requests.get() {
                        LoadState::Loading => {
                            view! { <div class="page__placeholder">"불러오는 중..."</div> }.into_any()
                        }
                        LoadState::Failed(message) => {
                            view! { <div class="alert alert--error">{message}</div> }.into_any()
                        }
                        LoadState::Loaded(rows) => {
                            view! {
                                <Table attr:id="leave-my-table" attr:style="width: 100%;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>"구분"</TableHeaderCell>
                                            <TableHeaderCell>"기간"</TableHeaderCell>
                                            <TableHeaderCell>"일수"</TableHeaderCell>
                                            <TableHeaderCell>"사유"</TableHeaderCell>
                                            <TableHeaderCell>"상태"</TableHeaderCell>
                                            <TableHeaderCell></TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {if rows.is_empty() {
                                            view! {
                                                <TableRow>
                                                    <TableCell attr:colspan="6">
                                                        <TableCellLayout>"데이터가 없습니다."</TableCellLayout>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                            .into_any()
                                        } else {
                                            rows.into_iter()
                                                .map(|request| {
                                                    let for_cancel = request.clone();
                                                    let cancellable =
                                                        request.status == LeaveStatus::Pending;
                                                    view! {
                                                        <TableRow>
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
                                                                {if cancellable {
                                                                    view! {
                                                                        <Button
                                                                            appearance=ButtonAppearance::Subtle
                                                                            on_click=move |_| cancel_request(for_cancel.clone())
                                                                            attr:title="취소"
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
                                        }}
                                    </TableBody>
                                </Table>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cross-wired channels: each side completes only if the other one has
    // already started, so sequential awaits would never finish.
    #[test]
    fn both_loads_run_concurrently() {
        use futures::channel::oneshot;
        use futures::executor::block_on;

        let (started_a, seen_a) = oneshot::channel::<()>();
        let (started_b, seen_b) = oneshot::channel::<()>();

        let balance = async move {
            let _ = started_a.send(());
            seen_b.await.ok();
            12.5_f64
        };
        let requests = async move {
            let _ = started_b.send(());
            seen_a.await.ok();
            vec![1_i64, 2]
        };

        let (days, ids) = block_on(load_both(balance, requests));
        assert_eq!(days, 12.5);
        assert_eq!(ids, vec![1, 2]);
    }
}

//! Awaitable confirmation and single-field input dialogs.
//!
//! Both suspend the calling handler until the user answers. Closing the dialog
//! any other way (Escape, overlay click) resolves to the declining outcome, so
//! a destructive action gated on `confirm` is never issued by accident.

use crate::shared::modal_stack::ModalStackService;
use futures::channel::oneshot;
use leptos::prelude::*;
use std::sync::{Arc, Mutex};
use thaw::*;

/// Runs on every submit attempt of `prompt_text`; an `Err` blocks submission
/// and shows the message inline.
pub type TextValidator = Arc<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

type Settle<T> = Arc<Mutex<Option<oneshot::Sender<T>>>>;

fn settle<T>(slot: &Settle<T>, value: T) {
    let sender = slot.lock().ok().and_then(|mut s| s.take());
    if let Some(tx) = sender {
        let _ = tx.send(value);
    }
}

/// Ask the user a yes/no question. Resolves `true` only on explicit 확인.
pub async fn confirm(stack: ModalStackService, title: &str, body: &str) -> bool {
    let (tx, rx) = oneshot::channel::<bool>();
    let slot: Settle<bool> = Arc::new(Mutex::new(Some(tx)));
    let title = title.to_string();
    let body = body.to_string();

    stack.push(move |handle| {
        let title = title.clone();
        let body = body.clone();
        let accept = {
            let slot = slot.clone();
            let handle = handle.clone();
            move |_| {
                settle(&slot, true);
                handle.close();
            }
        };
        let decline = {
            let slot = slot.clone();
            let handle = handle.clone();
            move |_| {
                settle(&slot, false);
                handle.close();
            }
        };

        view! {
            <div class="dialog dialog--confirm">
                <h2 class="dialog__title">{title}</h2>
                <p class="dialog__body">{body}</p>
                <div class="dialog__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=decline>
                        "취소"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=accept>
                        "확인"
                    </Button>
                </div>
            </div>
        }
        .into_any()
    });

    // A dropped sender means the dialog was dismissed without answering.
    rx.await.unwrap_or(false)
}

/// Ask the user for a single text value. Resolves `None` on cancel or dismiss.
pub async fn prompt_text(
    stack: ModalStackService,
    title: &str,
    label: &str,
    placeholder: &str,
    validator: Option<TextValidator>,
) -> Option<String> {
    let (tx, rx) = oneshot::channel::<Option<String>>();
    let slot: Settle<Option<String>> = Arc::new(Mutex::new(Some(tx)));
    let title = title.to_string();
    let label = label.to_string();
    let placeholder = placeholder.to_string();

    stack.push(move |handle| {
        let title = title.clone();
        let label = label.clone();
        let placeholder = placeholder.clone();
        let validator = validator.clone();
        let value = RwSignal::new(String::new());
        let error = RwSignal::new(None::<String>);

        let submit = {
            let slot = slot.clone();
            let handle = handle.clone();
            let validator = validator.clone();
            move |_| {
                let text = value.get_untracked();
                if let Some(validate) = validator.as_ref() {
                    if let Err(message) = validate(&text) {
                        error.set(Some(message));
                        return;
                    }
                }
                settle(&slot, Some(text));
                handle.close();
            }
        };
        let cancel = {
            let slot = slot.clone();
            let handle = handle.clone();
            move |_| {
                settle(&slot, None);
                handle.close();
            }
        };

        view! {
            <div class="dialog dialog--prompt">
                <h2 class="dialog__title">{title}</h2>
                <div class="form__group">
                    <Label>{label}</Label>
                    <Input value=value placeholder=placeholder />
                    {move || {
                        error
                            .get()
                            .map(|message| view! { <div class="form__error">{message}</div> })
                    }}
                </div>
                <div class="dialog__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=cancel>
                        "취소"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=submit>
                        "확인"
                    </Button>
                </div>
            </div>
        }
        .into_any()
    });

    rx.await.ok().flatten()
}

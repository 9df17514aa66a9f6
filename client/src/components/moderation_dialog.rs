//! Reason dialog shared by the reject and request-changes actions.

use leptos::prelude::*;

use crate::net::types::RejectReason;
use crate::state::item::ModerationDraft;

/// Modal with a reason select and, for "Другое", a free-text comment.
///
/// Renders nothing while `draft` is `None`. Confirm stays disabled until
/// [`ModerationDraft::can_confirm`] holds.
#[component]
pub fn ModerationDialog(
    #[prop(into)] draft: Signal<Option<ModerationDraft>>,
    on_reason: Callback<Option<RejectReason>>,
    on_comment: Callback<String>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let kind = move || draft.with(|d| d.as_ref().map(|d| d.kind));
    let reason = move || draft.with(|d| d.as_ref().and_then(|d| d.reason));
    let show_comment = move || draft.with(|d| d.as_ref().is_some_and(ModerationDraft::shows_comment));
    let can_confirm = move || draft.with(|d| d.as_ref().is_some_and(ModerationDraft::can_confirm));
    let comment = move || draft.with(|d| d.as_ref().map(|d| d.comment.clone()).unwrap_or_default());

    let reason_options = move || {
        RejectReason::ALL
            .into_iter()
            .map(|option| {
                view! {
                    <option value=option.as_str() selected=move || reason() == Some(option)>
                        {option.as_str()}
                    </option>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || kind().is_some()>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div
                    class="dialog dialog--moderation"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.run(());
                        }
                    }
                >
                    <h2 class="dialog__title">{move || kind().map(|k| k.title())}</h2>
                    <label class="dialog__label">
                        "Причина"
                        <select
                            class="input"
                            prop:value=move || reason().map(RejectReason::as_str).unwrap_or_default()
                            on:change=move |ev| on_reason.run(RejectReason::from_wire(&event_target_value(&ev)))
                        >
                            <option value="" disabled=true selected=move || reason().is_none()>
                                "Выберите причину"
                            </option>
                            {reason_options}
                        </select>
                    </label>
                    <Show when=show_comment>
                        <label class="dialog__label">
                            "Укажите причину"
                            <textarea
                                class="dialog__textarea"
                                rows="3"
                                prop:value=comment
                                on:input=move |ev| on_comment.run(event_target_value(&ev))
                            ></textarea>
                        </label>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_cancel.run(())>
                            "Отмена"
                        </button>
                        <button
                            class=move || format!("btn btn--contained btn--{}", kind().map_or("default", |k| k.tone()))
                            disabled=move || !can_confirm()
                            on:click=move |_| on_confirm.run(())
                        >
                            {move || kind().map(|k| k.confirm_label())}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

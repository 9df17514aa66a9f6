//! Ad detail page: gallery, description, seller, history and moderation actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/item/:id`. The ad, its neighbors in the newest-first listing and
//! the open moderation dialog live in one `RwSignal<ItemState>`. Any change of
//! the route id reloads the ad and recomputes neighbors. Ad loads carry a
//! sequence number and neighbor lookups their id, so responses for a previous
//! route are dropped. Keyboard shortcuts are read from a window `keydown`
//! listener that is removed on unmount.
//!
//! ERROR HANDLING
//! ==============
//! A failed load keeps whatever was shown before (or "not found" when nothing
//! was). A failed moderation action is logged and leaves the dialog open so
//! the moderator can retry.

use leptos::ev;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::image_gallery::ImageGallery;
use crate::components::moderation_dialog::ModerationDialog;
use crate::config::ConsoleConfig;
use crate::net::api::ApiClient;
use crate::net::types::{AdStatus, Advertisement, ModerationHistoryEntry, ModerationRequest, RejectReason};
use crate::state::item::{DialogKind, ItemState, parse_ad_id};
use crate::util::format::{format_date, format_date_time, format_price_fixed};
use crate::util::shortcuts::{KeyModifiers, Shortcut, resolve_shortcut};

const SHORTCUT_HINT: &str =
    "Горячие клавиши: A - одобрить, D - отклонить, R - вернуть на доработку, Alt+←/→ - навигация";

#[component]
pub fn ItemPage() -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let params = use_params_map();
    let navigate = use_navigate();
    let route_id = Memo::new(move |_| params.read().get("id").and_then(|raw| parse_ad_id(&raw)));
    let item = RwSignal::new(ItemState::for_route(route_id.get_untracked()));

    let api = config.api.clone();
    Effect::new(move || match route_id.get() {
        Some(id) => {
            if let Some(seq) = item.try_update(|s| s.begin_load(id)) {
                load_ad(api.clone(), id, seq, item);
                load_neighbors(api.clone(), id, item);
            }
        }
        None => item.update(ItemState::not_found),
    });

    let api = config.api.clone();
    let on_approve = Callback::new(move |()| {
        if let Some(id) = item.with_untracked(|s| s.ad.as_ref().map(|ad| ad.id)) {
            approve(api.clone(), id, item);
        }
    });
    let on_open = Callback::new(move |kind: DialogKind| item.update(|s| s.open_dialog(kind)));
    let on_reason = Callback::new(move |reason: Option<RejectReason>| item.update(|s| s.set_reason(reason)));
    let on_comment = Callback::new(move |comment: String| item.update(|s| s.set_comment(comment)));
    let on_cancel = Callback::new(move |()| item.update(ItemState::close_dialog));

    let api = config.api.clone();
    let on_confirm = Callback::new(move |()| {
        let pending = item.with_untracked(|s| {
            let id = s.ad.as_ref().map(|ad| ad.id)?;
            let draft = s.draft.as_ref()?;
            Some((id, draft.kind, draft.request()?))
        });
        if let Some((id, kind, request)) = pending {
            submit(api.clone(), id, kind, request, item);
        }
    });

    let keydown = window_event_listener(ev::keydown, move |ev| {
        let ctx = item.with_untracked(ItemState::shortcut_context);
        let modifiers = KeyModifiers { alt: ev.alt_key(), ctrl: ev.ctrl_key(), meta: ev.meta_key() };
        let Some(shortcut) = resolve_shortcut(&ev.key(), modifiers, &ctx) else {
            return;
        };
        ev.prevent_default();
        match shortcut {
            Shortcut::Approve => on_approve.run(()),
            Shortcut::OpenDialog(kind) => on_open.run(kind),
            Shortcut::Navigate(id) => navigate(&format!("/item/{id}"), NavigateOptions::default()),
        }
    });
    on_cleanup(move || keydown.remove());

    // Split out so dialog edits do not rebuild the detail view.
    let loading = Memo::new(move |_| item.with(|s| s.loading));
    let ad = Memo::new(move |_| item.with(|s| s.ad.clone()));

    let body = move || {
        if loading.get() {
            return view! { <div class="spinner" role="status" aria-label="Загрузка"></div> }.into_any();
        }
        match ad.get() {
            None => not_found().into_any(),
            Some(ad) => view! {
                <ItemNav item=item />
                {ad_details(ad, on_approve, on_open)}
            }
            .into_any(),
        }
    };

    view! {
        <div class="page item-page">
            {body}
            <ModerationDialog
                draft=Signal::derive(move || item.with(|s| s.draft.clone()))
                on_reason=on_reason
                on_comment=on_comment
                on_cancel=on_cancel
                on_confirm=on_confirm
            />
        </div>
    }
}

/// Back link, previous/next buttons and the shortcut hint.
#[component]
fn ItemNav(item: RwSignal<ItemState>) -> impl IntoView {
    let navigate = use_navigate();
    let prev = move || item.with(|s| s.neighbors.prev);
    let next = move || item.with(|s| s.neighbors.next);
    let go = move |target: Option<u64>| {
        if let Some(id) = target {
            navigate(&format!("/item/{id}"), NavigateOptions::default());
        }
    };
    let go_next = go.clone();

    view! {
        <div class="item-page__nav">
            <a class="btn btn--text" href="/list">"← Назад к списку"</a>
            <span class="item-page__spacer"></span>
            <button
                class="btn btn--outlined"
                title="Предыдущее объявление (Alt + ←)"
                disabled=move || prev().is_none()
                on:click=move |_| go(prev())
            >
                "←"
            </button>
            <button
                class="btn btn--outlined"
                title="Следующее объявление (Alt + →)"
                disabled=move || next().is_none()
                on:click=move |_| go_next(next())
            >
                "→"
            </button>
        </div>
        <p class="item-page__hint">{SHORTCUT_HINT}</p>
    }
}

fn not_found() -> impl IntoView {
    view! {
        <div class="empty-state empty-state--page">
            <h2>"Объявление не найдено"</h2>
            <a class="btn btn--contained" href="/list">"Вернуться к списку"</a>
        </div>
    }
}

fn ad_details(ad: Advertisement, on_approve: Callback<()>, on_open: Callback<DialogKind>) -> impl IntoView {
    let status = ad.status;
    let status_class = format!("chip chip--{}", status.tone());
    let characteristics = (!ad.characteristics.is_empty()).then(|| {
        let rows = ad
            .characteristics
            .iter()
            .map(|(name, value)| {
                view! {
                    <tr>
                        <th scope="row">{name.clone()}</th>
                        <td>{value.clone()}</td>
                    </tr>
                }
            })
            .collect_view();
        view! {
            <section class="panel">
                <h3 class="panel__title">"Характеристики"</h3>
                <table class="spec-table">
                    <tbody>{rows}</tbody>
                </table>
            </section>
        }
    });
    let history = moderation_history(&ad.moderation_history);
    let seller = &ad.seller;

    view! {
        <div class="item-page__grid">
            <div class="item-page__main">
                <ImageGallery images=ad.images.clone() title=ad.title.clone() />
                <section class="panel">
                    <h1 class="item-page__title">{ad.title.clone()}</h1>
                    <div class="item-page__meta">
                        <span>{ad.category.clone()}</span>
                        <span>{format!("Создано {}", format_date_time(&ad.created_at))}</span>
                        <span class=status_class>{status.label()}</span>
                    </div>
                    <p class="item-page__price">{format!("{} ₽", format_price_fixed(ad.price))}</p>
                </section>
                <section class="panel">
                    <h3 class="panel__title">"Полное описание"</h3>
                    <p class="item-page__description">{ad.description.clone()}</p>
                </section>
                {characteristics}
            </div>
            <aside class="item-page__side">
                <section class="panel">
                    <h3 class="panel__title">"Информация о продавце"</h3>
                    <dl class="seller">
                        <dt>"Имя"</dt>
                        <dd>{seller.name.clone()}</dd>
                        <dt>"Рейтинг"</dt>
                        <dd>{format!("★ {}", seller.rating)}</dd>
                        <dt>"Объявлений"</dt>
                        <dd>{seller.total_ads}</dd>
                        <dt>"На сайте"</dt>
                        <dd>{format!("с {}", format_date(&seller.registered_at))}</dd>
                    </dl>
                </section>
                <section class="panel">
                    <h3 class="panel__title">"История модерации"</h3>
                    {history}
                </section>
                <section class="panel">
                    <h3 class="panel__title">"Действия модератора"</h3>
                    <div class="item-page__actions">
                        <button
                            class="btn btn--contained btn--success"
                            disabled=status == AdStatus::Approved
                            on:click=move |_| on_approve.run(())
                        >
                            "Одобрить"
                        </button>
                        <button
                            class="btn btn--contained btn--error"
                            disabled=status == AdStatus::Rejected
                            on:click=move |_| on_open.run(DialogKind::Reject)
                        >
                            "Отклонить"
                        </button>
                        <button
                            class="btn btn--contained btn--warning"
                            on:click=move |_| on_open.run(DialogKind::RequestChanges)
                        >
                            "Вернуть на доработку"
                        </button>
                    </div>
                </section>
            </aside>
        </div>
    }
}

fn moderation_history(entries: &[ModerationHistoryEntry]) -> AnyView {
    if entries.is_empty() {
        return view! { <p class="empty-state">"История модерации отсутствует"</p> }.into_any();
    }
    entries
        .iter()
        .map(|entry| {
            let action_class = format!("chip chip--{}", entry.action.tone());
            let reason = entry
                .reason
                .map(|reason| view! { <p class="history__reason">{format!("Причина: {reason}")}</p> });
            let comment = entry
                .comment
                .clone()
                .filter(|c| !c.is_empty())
                .map(|comment| view! { <p class="history__comment">{comment}</p> });
            view! {
                <div class="history__entry">
                    <div class="history__header">
                        <strong>{entry.moderator_name.clone()}</strong>
                        <span class=action_class>{entry.action.label()}</span>
                    </div>
                    <p class="history__time">{format_date_time(&entry.timestamp)}</p>
                    {reason}
                    {comment}
                </div>
            }
        })
        .collect_view()
        .into_any()
}

fn load_ad(api: ApiClient, id: u64, seq: u64, item: RwSignal<ItemState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = api.get_ad(id).await;
        if let Err(e) = &result {
            leptos::logging::error!("ad {id} request failed: {e}");
        }
        if item.try_update(|s| s.finish_load(seq, result)) == Some(false) {
            leptos::logging::log!("dropped stale response for ad {id}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, id, seq, item);
    }
}

fn load_neighbors(api: ApiClient, id: u64, item: RwSignal<ItemState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::query::{AdsQuery, SortField, SortOrder};
        use crate::state::item::{NEIGHBOR_WINDOW, find_neighbors};

        let query = AdsQuery::limited(NEIGHBOR_WINDOW).sorted(SortField::CreatedAt, SortOrder::Desc);
        match api.list_ads(&query).await {
            Ok(response) => {
                let ids: Vec<u64> = response.ads.iter().map(|ad| ad.id).collect();
                let neighbors = find_neighbors(&ids, id);
                item.update(|s| {
                    s.set_neighbors(id, neighbors);
                });
            }
            Err(e) => leptos::logging::error!("neighbor lookup for ad {id} failed: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, id, item);
    }
}

fn approve(api: ApiClient, id: u64, item: RwSignal<ItemState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api.approve_ad(id).await {
            Ok(response) => {
                leptos::logging::log!("ad {id} approved: {}", response.message);
                if let Some(seq) = item.try_update(|s| s.begin_load(id)) {
                    load_ad(api, id, seq, item);
                }
            }
            Err(e) => leptos::logging::error!("approve ad {id} failed: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, id, item);
    }
}

fn submit(api: ApiClient, id: u64, kind: DialogKind, request: ModerationRequest, item: RwSignal<ItemState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = match kind {
            DialogKind::Reject => api.reject_ad(id, &request).await,
            DialogKind::RequestChanges => api.request_changes(id, &request).await,
        };
        match result {
            Ok(response) => {
                leptos::logging::log!("ad {id} moderated: {}", response.message);
                let reload = item.try_update(|s| {
                    s.close_dialog();
                    s.begin_load(id)
                });
                if let Some(seq) = reload {
                    load_ad(api, id, seq, item);
                }
            }
            Err(e) => leptos::logging::error!("moderation of ad {id} failed: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, id, kind, request, item);
    }
}

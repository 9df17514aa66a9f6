//! Ad list page: filters, sort, paginated results.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/list`. All state lives in one `RwSignal<ListState>`; a memo over
//! the derived query re-issues `GET /ads` whenever filters, sort or the
//! current page change. Category options are sampled once at mount.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged to the console and the list degrades to "no results";
//! there is no error banner.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::ad_card::AdCard;
use crate::components::filter_bar::FilterBar;
use crate::components::pagination::Pagination;
use crate::config::ConsoleConfig;
use crate::net::api::ApiClient;
use crate::net::query::{AdsQuery, SortOption};
use crate::state::list::{FilterState, ListState};

#[component]
pub fn ListPage() -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let list = RwSignal::new(ListState::default());
    let query = Memo::new(move |_| list.with(ListState::query));

    let api = config.api.clone();
    Effect::new(move || {
        let query = query.get();
        let seq = list.try_update(ListState::begin_request).unwrap_or_default();
        load_ads(api.clone(), query, seq, list);
    });

    load_categories(config.api.clone(), list);

    let on_filters = Callback::new(move |filters: FilterState| list.update(|s| s.set_filters(filters)));
    let on_page = Callback::new(move |page: u32| list.update(|s| s.set_page(page)));
    let on_sort = move |ev: leptos::ev::Event| {
        if let Some(sort) = SortOption::from_value(&event_target_value(&ev)) {
            list.update(|s| s.set_sort(sort));
        }
    };

    let sort_options = SortOption::ALL
        .into_iter()
        .map(|option| view! { <option value=option.value()>{option.label()}</option> })
        .collect_view();

    let results = move || {
        list.with(|s| {
            if s.loading {
                view! { <div class="spinner" role="status" aria-label="Загрузка"></div> }.into_any()
            } else if s.ads.is_empty() {
                view! { <p class="empty-state">"Объявления не найдены"</p> }.into_any()
            } else {
                s.ads
                    .iter()
                    .cloned()
                    .map(|ad| view! { <AdCard ad=ad /> })
                    .collect_view()
                    .into_any()
            }
        })
    };

    view! {
        <div class="page list-page">
            <h1 class="page__title">"Список объявлений"</h1>
            <FilterBar
                filters=Signal::derive(move || list.with(|s| s.filters.clone()))
                categories=Signal::derive(move || list.with(|s| s.categories.clone()))
                on_change=on_filters
            />
            <div class="list-page__toolbar">
                <label class="list-page__sort">
                    <span>"Сортировка"</span>
                    <select
                        class="input"
                        prop:value=move || list.with(|s| s.sort.value())
                        on:change=on_sort
                    >
                        {sort_options}
                    </select>
                </label>
            </div>
            <div class="list-page__results">{results}</div>
            <Pagination
                pagination=Signal::derive(move || list.with(|s| s.pagination))
                on_page_change=on_page
            />
        </div>
    }
}

fn load_ads(api: ApiClient, query: AdsQuery, seq: u64, list: RwSignal<ListState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = api.list_ads(&query).await;
        if let Err(e) = &result {
            leptos::logging::error!("ads list request failed: {e}");
        }
        list.update(|s| {
            if !s.apply_response(seq, result) {
                leptos::logging::log!("discarded stale ads response #{seq}");
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, query, seq, list);
    }
}

fn load_categories(api: ApiClient, list: RwSignal<ListState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::list::{CATEGORY_SAMPLE_LIMIT, derive_categories};

        match api.list_ads(&AdsQuery::limited(CATEGORY_SAMPLE_LIMIT)).await {
            Ok(response) => {
                let categories = derive_categories(&response.ads);
                list.update(|s| s.categories = categories);
            }
            Err(e) => leptos::logging::error!("category sample request failed: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, list);
    }
}

//! Filter controls for the ad list.
//!
//! DESIGN
//! ======
//! The bar owns no state. Every edit builds a complete new `FilterState` from
//! the current one and hands it to `on_change`; the page decides what a
//! change means (it resets paging).

use leptos::prelude::*;

use crate::net::types::AdStatus;
use crate::state::list::{CategoryOption, FilterState};

/// Parse a price input; blank or invalid input clears the bound.
fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn price_value(bound: Option<f64>) -> String {
    bound.map(|v| v.to_string()).unwrap_or_default()
}

/// Search, status, category and price filters plus a reset button.
#[component]
pub fn FilterBar(
    #[prop(into)] filters: Signal<FilterState>,
    #[prop(into)] categories: Signal<Vec<CategoryOption>>,
    on_change: Callback<FilterState>,
) -> impl IntoView {
    let edit = move |apply: &dyn Fn(&mut FilterState)| {
        let mut next = filters.get_untracked();
        apply(&mut next);
        on_change.run(next);
    };

    let status_options = move || {
        AdStatus::ALL
            .into_iter()
            .map(|status| {
                let checked = move || filters.get().statuses.contains(&status);
                view! {
                    <label class="filter-bar__status">
                        <input
                            type="checkbox"
                            prop:checked=checked
                            on:change=move |_| on_change.run(filters.get_untracked().with_status_toggled(status))
                        />
                        <span class=format!("chip chip--{}", status.tone())>{status.label()}</span>
                    </label>
                }
            })
            .collect_view()
    };

    let category_options = move || {
        categories
            .get()
            .into_iter()
            .map(|category| {
                view! { <option value=category.id.to_string()>{category.name}</option> }
            })
            .collect_view()
    };

    view! {
        <section class="card filter-bar">
            <h2 class="filter-bar__title">"Фильтры"</h2>
            <div class="filter-bar__grid">
                <input
                    class="input filter-bar__search"
                    type="search"
                    placeholder="Поиск по названию или описанию"
                    prop:value=move || filters.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit(&|f| f.search.clone_from(&value));
                    }
                />

                <fieldset class="filter-bar__statuses">
                    <legend>"Статус"</legend>
                    {status_options}
                </fieldset>

                <label class="filter-bar__field">
                    <span>"Категория"</span>
                    <select
                        class="input"
                        prop:value=move || filters.get().category_id.map(|id| id.to_string()).unwrap_or_default()
                        on:change=move |ev| {
                            let id = event_target_value(&ev).parse::<u64>().ok();
                            edit(&|f| f.category_id = id);
                        }
                    >
                        <option value="">"Все категории"</option>
                        {category_options}
                    </select>
                </label>

                <label class="filter-bar__field">
                    <span>"Цена от"</span>
                    <input
                        class="input"
                        type="number"
                        min="0"
                        prop:value=move || price_value(filters.get().min_price)
                        on:input=move |ev| {
                            let bound = parse_price(&event_target_value(&ev));
                            edit(&|f| f.min_price = bound);
                        }
                    />
                </label>

                <label class="filter-bar__field">
                    <span>"Цена до"</span>
                    <input
                        class="input"
                        type="number"
                        min="0"
                        prop:value=move || price_value(filters.get().max_price)
                        on:input=move |ev| {
                            let bound = parse_price(&event_target_value(&ev));
                            edit(&|f| f.max_price = bound);
                        }
                    />
                </label>

                <button
                    class="btn btn--outlined filter-bar__reset"
                    on:click=move |_| on_change.run(FilterState::default())
                >
                    "Сбросить"
                </button>
            </div>
        </section>
    }
}

//! Category breakdown list for the stats dashboard.

use leptos::prelude::*;

use crate::net::types::CategoryCounts;

/// Name/count rows in the order the server sent them.
#[component]
pub fn CategoriesChart(#[prop(into)] data: Signal<CategoryCounts>) -> impl IntoView {
    let rows = move || {
        data.with(|counts| {
            counts
                .iter()
                .map(|(name, count)| {
                    view! {
                        <li class="categories-chart__row">
                            <span>{name.to_owned()}</span>
                            <strong>{count}</strong>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! { <ul class="categories-chart">{rows}</ul> }
}

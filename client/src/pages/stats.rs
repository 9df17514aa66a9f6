//! Moderation statistics dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/stats`. A memo over the selected period drives one effect; every
//! run fetches summary, activity, decisions and categories together and
//! applies them in a single state update once all four have settled.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::activity_chart::ActivityChart;
use crate::components::categories_chart::CategoriesChart;
use crate::components::decisions_chart::DecisionsChart;
use crate::components::stat_card::StatCard;
use crate::config::ConsoleConfig;
use crate::net::api::ApiClient;
use crate::net::query::StatsQuery;
use crate::net::types::StatsSummary;
use crate::state::stats::{StatsPeriod, StatsState};
use crate::util::format::{format_percent, format_review_time};

#[component]
pub fn StatsPage() -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let stats = RwSignal::new(StatsState::default());
    let period = Memo::new(move |_| stats.with(|s| s.period));

    let api = config.api.clone();
    Effect::new(move || {
        period.track();
        if let Some(query) = stats.try_update(StatsState::begin) {
            load_stats(api.clone(), query, stats);
        }
    });

    let toggles = StatsPeriod::ALL
        .into_iter()
        .map(|option| {
            view! {
                <button
                    class="toggle"
                    class:toggle--active=move || period.get() == option
                    aria-pressed=move || (period.get() == option).to_string()
                    on:click=move |_| {
                        stats.update(|s| {
                            s.select_period(option);
                        });
                    }
                >
                    {option.label()}
                </button>
            }
        })
        .collect_view();

    let summary = move |f: fn(&StatsSummary) -> String| {
        Signal::derive(move || stats.with(|s| s.summary.as_ref().map(f).unwrap_or_else(|| "0".to_owned())))
    };

    // Memos keep charts from rebuilding when only the loading flag flips.
    let activity_data = Memo::new(move |_| stats.with(|s| s.activity.clone()));
    let decisions_data = Memo::new(move |_| stats.with(|s| s.decisions));
    let categories_data = Memo::new(move |_| stats.with(|s| s.categories.clone()));

    let activity = move || {
        if activity_data.with(Vec::is_empty) {
            view! { <p class="empty-state">"Нет данных за выбранный период"</p> }.into_any()
        } else {
            view! { <ActivityChart data=activity_data /> }.into_any()
        }
    };
    let decisions = move || match decisions_data.get() {
        Some(data) => view! { <DecisionsChart data=data /> }.into_any(),
        None => view! { <p class="empty-state">"Нет данных"</p> }.into_any(),
    };
    let categories = move || {
        if categories_data.with(|c| c.is_empty()) {
            view! { <p class="empty-state">"Нет данных по категориям"</p> }.into_any()
        } else {
            view! { <CategoriesChart data=categories_data /> }.into_any()
        }
    };

    view! {
        <div class="page stats-page">
            <div class="stats-page__header">
                <h1 class="page__title">"Статистика модерации"</h1>
                <div class="toggle-group" role="group">{toggles}</div>
            </div>
            <Show when=move || stats.with(|s| s.loading)>
                <div class="progress" role="progressbar"></div>
            </Show>
            <div class="stats-page__cards">
                <StatCard
                    title="Проверено"
                    caption="всего объявлений"
                    value=summary(|s| s.total_reviewed.to_string())
                />
                <StatCard
                    title="Одобрено"
                    caption="процент одобрения"
                    accent="success"
                    value=summary(|s| format_percent(s.approved_percentage, 2))
                />
                <StatCard
                    title="Отклонено"
                    caption="процент отклонения"
                    accent="error"
                    value=summary(|s| format_percent(s.rejected_percentage, 2))
                />
                <StatCard
                    title="Время"
                    caption="среднее на проверку"
                    accent="warning"
                    value=summary(|s| format_review_time(s.average_review_time))
                />
            </div>
            <div class="stats-page__charts">
                <section class="panel">
                    <h3 class="panel__title">"Активность модерации"</h3>
                    {activity}
                </section>
                <section class="panel">
                    <h3 class="panel__title">"Распределение решений"</h3>
                    {decisions}
                </section>
                <section class="panel">
                    <h3 class="panel__title">"Категории объявлений"</h3>
                    {categories}
                </section>
            </div>
        </div>
    }
}

fn load_stats(api: ApiClient, query: StatsQuery, stats: RwSignal<StatsState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = api.fetch_stats(&query).await;
        if let Err(e) = &result {
            leptos::logging::error!("stats request failed: {e}");
        }
        stats.update(|s| s.finish(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, query, stats);
    }
}

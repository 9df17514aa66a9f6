//! Decision breakdown ring for the stats dashboard.

#[cfg(test)]
#[path = "decisions_chart_test.rs"]
mod decisions_chart_test;

use leptos::prelude::*;

use crate::config::ConsoleConfig;
use crate::net::types::DecisionsData;

/// Share of each decision kind in percent: `[approved, rejected, request_changes]`.
///
/// With no decisions at all every share is 0. The total saturates, so
/// absurd server counts skew the ring instead of overflowing.
pub fn decision_shares(data: &DecisionsData) -> [f64; 3] {
    let total = data.approved.saturating_add(data.rejected).saturating_add(data.request_changes);
    if total == 0 {
        return [0.0; 3];
    }
    #[allow(clippy::cast_precision_loss)]
    let share = |count: u64| count as f64 / total as f64 * 100.0;
    [share(data.approved), share(data.rejected), share(data.request_changes)]
}

/// `conic-gradient` stops for the ring, in approved, rejected, changes order.
pub fn ring_gradient(shares: [f64; 3], colors: [&str; 3], empty: &str) -> String {
    if shares.iter().all(|s| *s <= 0.0) {
        return format!("conic-gradient({empty} 0% 100%)");
    }
    let mut start = 0.0;
    let stops: Vec<String> = shares
        .iter()
        .zip(colors)
        .map(|(share, color)| {
            let end = start + share;
            let stop = format!("{color} {start:.2}% {end:.2}%");
            start = end;
            stop
        })
        .collect();
    format!("conic-gradient({})", stops.join(", "))
}

#[component]
pub fn DecisionsChart(#[prop(into)] data: Signal<DecisionsData>) -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let theme = config.theme;
    let colors = [theme.success, theme.error, theme.warning];
    let empty = theme.border;

    let shares = move || decision_shares(&data.get());
    let background = move || ring_gradient(shares(), colors, empty);
    let row = move |index: usize, label: &'static str, modifier: &'static str| {
        view! {
            <li class=format!("chart-legend__item chart-legend__item--{modifier}")>
                {move || format!("{label}: {:.1}%", shares()[index])}
            </li>
        }
    };

    view! {
        <div class="decisions-chart">
            <div class="decisions-chart__ring" style:background=background>
                <span class="decisions-chart__hole"></span>
            </div>
            <ul class="decisions-chart__legend">
                {row(0, "Одобрено", "approved")}
                {row(1, "Отклонено", "rejected")}
                {row(2, "На доработку", "changes")}
            </ul>
        </div>
    }
}

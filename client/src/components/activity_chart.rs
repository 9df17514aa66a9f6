//! Per-day activity bars for the stats dashboard.
//!
//! DESIGN
//! ======
//! Plain proportional `div` bars rather than a charting library. Each of the
//! three series is normalized against its own maximum, so bar heights are
//! comparable within a series but not across series.

#[cfg(test)]
#[path = "activity_chart_test.rs"]
mod activity_chart_test;

use leptos::prelude::*;

use crate::net::types::ActivityData;
use crate::util::format::format_day_month;

/// Height of a bar at its series maximum, in pixels.
pub const FULL_SCALE_PX: f64 = 180.0;

/// Scale `value` against `max`. A zero maximum yields a zero-height bar.
pub fn bar_height(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = value as f64 / max as f64;
    ratio * FULL_SCALE_PX
}

/// Per-series maxima `(approved, rejected, request_changes)`.
pub fn series_max(data: &[ActivityData]) -> (u64, u64, u64) {
    data.iter().fold((0, 0, 0), |(a, r, c), day| {
        (a.max(day.approved), r.max(day.rejected), c.max(day.request_changes))
    })
}

/// Bar heights for every day, one triple per entry.
pub fn normalized_bars(data: &[ActivityData]) -> Vec<[f64; 3]> {
    let (max_approved, max_rejected, max_changes) = series_max(data);
    data.iter()
        .map(|day| {
            [
                bar_height(day.approved, max_approved),
                bar_height(day.rejected, max_rejected),
                bar_height(day.request_changes, max_changes),
            ]
        })
        .collect()
}

#[component]
pub fn ActivityChart(#[prop(into)] data: Signal<Vec<ActivityData>>) -> impl IntoView {
    let days = move || {
        data.with(|days| {
            days.iter()
                .zip(normalized_bars(days))
                .map(|(day, [approved, rejected, changes])| {
                    view! {
                        <div class="activity-chart__day">
                            <div class="activity-chart__bars">
                                <span
                                    class="activity-chart__bar activity-chart__bar--approved"
                                    style:height=format!("{approved:.1}px")
                                    title=format!("Одобрено: {}", day.approved)
                                ></span>
                                <span
                                    class="activity-chart__bar activity-chart__bar--rejected"
                                    style:height=format!("{rejected:.1}px")
                                    title=format!("Отклонено: {}", day.rejected)
                                ></span>
                                <span
                                    class="activity-chart__bar activity-chart__bar--changes"
                                    style:height=format!("{changes:.1}px")
                                    title=format!("На доработку: {}", day.request_changes)
                                ></span>
                            </div>
                            <span class="activity-chart__label">{format_day_month(&day.date)}</span>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="activity-chart">
            <div class="activity-chart__plot">{days}</div>
            <div class="chart-legend">
                <span class="chart-legend__item chart-legend__item--approved">"Одобрено"</span>
                <span class="chart-legend__item chart-legend__item--rejected">"Отклонено"</span>
                <span class="chart-legend__item chart-legend__item--changes">"На доработку"</span>
            </div>
        </div>
    }
}

//! Summary tile for the stats dashboard.

use leptos::prelude::*;

use crate::config::ConsoleConfig;

/// Title, headline value and caption. `accent` is a tone name
/// (`primary`, `success`, `error`, `warning`) resolved against the theme
/// for the value color.
#[component]
pub fn StatCard(
    title: &'static str,
    caption: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(default = "primary")] accent: &'static str,
) -> impl IntoView {
    let color = expect_context::<ConsoleConfig>().theme.tone_color(accent);

    view! {
        <div class="card stat-card">
            <h2 class="stat-card__title">{title}</h2>
            <div class="stat-card__value" style:color=color>{move || value.get()}</div>
            <p class="stat-card__caption text-secondary">{caption}</p>
        </div>
    }
}

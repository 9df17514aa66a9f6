//! Top navigation with the current moderator's name.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::moderator::ModeratorState;

/// Links to the list and stats pages; the active section is highlighted.
#[component]
pub fn NavBar() -> impl IntoView {
    let moderator = expect_context::<RwSignal<ModeratorState>>();
    let location = use_location();

    // Item pages belong to the list section.
    let in_list = move || {
        let path = location.pathname.get();
        path.starts_with("/list") || path.starts_with("/item")
    };
    let in_stats = move || location.pathname.get().starts_with("/stats");
    let name = move || moderator.with(|m| m.display_name().map(str::to_owned));

    view! {
        <nav class="nav-bar">
            <a href="/list" class="nav-bar__link" class:nav-bar__link--active=in_list>
                "Список объявлений"
            </a>
            <a href="/stats" class="nav-bar__link" class:nav-bar__link--active=in_stats>
                "Статистика"
            </a>
            <span class="nav-bar__spacer"></span>
            <Show when=move || name().is_some()>
                <span class="nav-bar__moderator" title="Модератор">
                    {move || name().unwrap_or_default()}
                </span>
            </Show>
        </nav>
    }
}

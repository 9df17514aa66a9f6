//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::config::ConsoleConfig;
use crate::pages::{item::ItemPage, list::ListPage, stats::StatsPage};
use crate::state::moderator::ModeratorState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the immutable console configuration and the moderator identity,
/// then sets up client-side routing under the nav bar.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ConsoleConfig::from_build_env();
    let theme_vars = config.theme.css_variables();
    let moderator = RwSignal::new(ModeratorState { loading: true, ..ModeratorState::default() });

    load_moderator(&config, moderator);

    provide_context(config);
    provide_context(moderator);

    view! {
        <Stylesheet id="leptos" href="/pkg/modconsole.css"/>
        <Title text="Модерация объявлений"/>

        <Router>
            <div class="app" style=theme_vars>
                <NavBar/>
                <main class="app__content">
                    <Routes fallback=|| view! { <p class="empty-state">"Страница не найдена"</p> }>
                        <Route path=StaticSegment("") view=|| view! { <Redirect path="/list"/> }/>
                        <Route path=StaticSegment("list") view=ListPage/>
                        <Route path=(StaticSegment("item"), ParamSegment("id")) view=ItemPage/>
                        <Route path=StaticSegment("stats") view=StatsPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

fn load_moderator(config: &ConsoleConfig, moderator: RwSignal<ModeratorState>) {
    #[cfg(feature = "hydrate")]
    {
        let api = config.api.clone();
        leptos::task::spawn_local(async move {
            let result = api.current_moderator().await;
            if let Err(e) = &result {
                leptos::logging::warn!("current moderator request failed: {e}");
            }
            moderator.update(|m| m.finish(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, moderator);
    }
}

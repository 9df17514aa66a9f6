//! Pagination control for the ad list.
//!
//! The page window shows the first and last page, the current page with one
//! sibling on each side, and an ellipsis for any gap wider than one page.
//! Server values are clamped before rendering: `total_pages` is at least 1
//! and the current page is kept inside `1..=total_pages`.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::PaginationResponse;

const BOUNDARY: i64 = 1;
const SIBLINGS: i64 = 1;

/// One slot of the page window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// `(current_page, total_pages)` after clamping.
pub fn clamp_pages(pagination: &PaginationResponse) -> (u32, u32) {
    let total = pagination.total_pages.max(1);
    let current = pagination.current_page.clamp(1, total);
    (current, total)
}

/// Page buttons to render for `current` out of `total` pages.
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    let count = i64::from(total.max(1));
    let page = i64::from(current.clamp(1, total.max(1)));

    let start_pages: Vec<i64> = (1..=BOUNDARY.min(count)).collect();
    let end_pages: Vec<i64> = ((count - BOUNDARY + 1).max(BOUNDARY + 1)..=count).collect();

    let siblings_start = (page - SIBLINGS).min(count - BOUNDARY - SIBLINGS * 2 - 1).max(BOUNDARY + 2);
    let siblings_end = (page + SIBLINGS)
        .max(BOUNDARY + SIBLINGS * 2 + 2)
        .min(end_pages.first().map_or(count - 1, |first| first - 2));

    let mut out: Vec<PageItem> = start_pages.into_iter().map(to_item).collect();
    if siblings_start > BOUNDARY + 2 {
        out.push(PageItem::Ellipsis);
    } else if BOUNDARY + 1 < count - BOUNDARY {
        out.push(to_item(BOUNDARY + 1));
    }
    out.extend((siblings_start..=siblings_end).map(to_item));
    if siblings_end < count - BOUNDARY - 1 {
        out.push(PageItem::Ellipsis);
    } else if count - BOUNDARY > BOUNDARY {
        out.push(to_item(count - BOUNDARY));
    }
    out.extend(end_pages.into_iter().map(to_item));
    out
}

fn to_item(page: i64) -> PageItem {
    PageItem::Page(u32::try_from(page).unwrap_or(1))
}

/// Total count label and, for more than one page, navigation buttons.
#[component]
pub fn Pagination(
    #[prop(into)] pagination: Signal<PaginationResponse>,
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let pages = move || clamp_pages(&pagination.get());
    let go = move |page: u32| {
        let (current, total) = pages();
        if page != current && (1..=total).contains(&page) {
            on_page_change.run(page);
        }
    };

    let page_buttons = move || {
        let (current, total) = pages();
        page_items(current, total)
            .into_iter()
            .map(|item| match item {
                PageItem::Page(page) => view! {
                    <button
                        class="pagination__page"
                        class:pagination__page--active=page == current
                        aria-current=if page == current { Some("page") } else { None }
                        on:click=move |_| go(page)
                    >
                        {page}
                    </button>
                }
                .into_any(),
                PageItem::Ellipsis => view! { <span class="pagination__ellipsis">"…"</span> }.into_any(),
            })
            .collect_view()
    };

    view! {
        <nav class="pagination" aria-label="Пагинация">
            <span class="pagination__total">
                {move || format!("Всего: {} объявлений", pagination.get().total_items)}
            </span>
            <Show when=move || { pages().1 > 1 }>
                <div class="pagination__pages">
                    <button
                        class="pagination__nav"
                        title="Первая страница"
                        disabled=move || pages().0 == 1
                        on:click=move |_| go(1)
                    >
                        "«"
                    </button>
                    <button
                        class="pagination__nav"
                        title="Предыдущая страница"
                        disabled=move || pages().0 == 1
                        on:click=move |_| go(pages().0.saturating_sub(1))
                    >
                        "‹"
                    </button>
                    {page_buttons}
                    <button
                        class="pagination__nav"
                        title="Следующая страница"
                        disabled=move || pages().0 == pages().1
                        on:click=move |_| go(pages().0 + 1)
                    >
                        "›"
                    </button>
                    <button
                        class="pagination__nav"
                        title="Последняя страница"
                        disabled=move || pages().0 == pages().1
                        on:click=move |_| go(pages().1)
                    >
                        "»"
                    </button>
                </div>
            </Show>
        </nav>
    }
}

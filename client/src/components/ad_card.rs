//! List row for a single advertisement.

use leptos::prelude::*;

use crate::net::types::Advertisement;
use crate::util::format::{format_date, format_price};

/// Shown when an ad has no images.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.jpg";

/// Card with thumbnail, chips, price and an "Открыть" link to the item page.
#[component]
pub fn AdCard(ad: Advertisement) -> impl IntoView {
    let href = format!("/item/{}", ad.id);
    let thumbnail = ad.images.first().cloned().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());
    let status_class = format!("chip chip--{}", ad.status.tone());
    let priority_class = format!("chip chip--outlined chip--{}", ad.priority.tone());

    view! {
        <article class="ad-card">
            <img class="ad-card__thumb" src=thumbnail alt=ad.title.clone() />
            <div class="ad-card__body">
                <div class="ad-card__header">
                    <h2 class="ad-card__title">{ad.title.clone()}</h2>
                    <div class="ad-card__chips">
                        <span class=status_class>{ad.status.label()}</span>
                        <span class=priority_class>{ad.priority.label()}</span>
                    </div>
                </div>
                <p class="ad-card__price">{format!("{} ₽", format_price(ad.price))}</p>
                <div class="ad-card__footer">
                    <span class="ad-card__meta">
                        <span>{ad.category.clone()}</span>
                        <span class="ad-card__divider" aria-hidden="true"></span>
                        <span>{format_date(&ad.created_at)}</span>
                    </span>
                    <a class="btn btn--outlined" href=href>
                        <strong>"Открыть"</strong>
                        " →"
                    </a>
                </div>
            </div>
        </article>
    }
}

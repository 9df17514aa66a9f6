//! Image gallery for the item page.

use leptos::prelude::*;

use crate::components::ad_card::PLACEHOLDER_IMAGE;
use crate::state::gallery::GalleryState;

/// Main image with wrap-around arrows, thumbnails and a fit/cover zoom toggle.
///
/// The cursor resets whenever the image list changes (e.g. after a reload).
#[component]
pub fn ImageGallery(#[prop(into)] images: Signal<Vec<String>>, #[prop(into)] title: Signal<String>) -> impl IntoView {
    let gallery = RwSignal::new(GalleryState::new(images.get_untracked().len()));
    Effect::new(move || {
        let len = images.with(Vec::len);
        if gallery.get_untracked().len() != len {
            gallery.set(GalleryState::new(len));
        }
    });

    let current_src = move || {
        let index = gallery.get().index();
        images
            .with(|list| list.get(index).cloned())
            .filter(|src| !src.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned())
    };

    let thumbnails = move || {
        images
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, src)| {
                let src = if src.is_empty() { PLACEHOLDER_IMAGE.to_owned() } else { src };
                view! {
                    <button
                        class="gallery__thumb"
                        class:gallery__thumb--active=move || gallery.get().index() == index
                        on:click=move |_| gallery.update(|g| g.select(index))
                    >
                        <img src=src alt=move || format!("{} {}", title.get(), index + 1) />
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <Show
            when=move || !gallery.get().is_empty()
            fallback=|| {
                view! {
                    <section class="card gallery gallery--empty">
                        <p class="text-secondary">"Изображения отсутствуют"</p>
                    </section>
                }
            }
        >
            <section class="card gallery">
                <h1 class="gallery__title">{move || title.get()}</h1>
                <span class="chip chip--outlined chip--primary gallery__counter">
                    {move || gallery.get().counter_label()}
                </span>
                <div class="gallery__stage">
                    <div
                        class="gallery__frame"
                        class:gallery__frame--fit=move || gallery.get().is_fit()
                        on:click=move |_| gallery.update(GalleryState::toggle_zoom)
                    >
                        <img
                            class="gallery__image"
                            src=current_src
                            alt=move || format!("{} {}", title.get(), gallery.get().index() + 1)
                            style:object-fit=move || gallery.get().object_fit()
                        />
                    </div>
                    <Show when=move || gallery.get().has_controls()>
                        <button
                            class="gallery__arrow gallery__arrow--prev"
                            aria-label="Предыдущее изображение"
                            on:click=move |_| gallery.update(GalleryState::previous)
                        >
                            "‹"
                        </button>
                        <button
                            class="gallery__arrow gallery__arrow--next"
                            aria-label="Следующее изображение"
                            on:click=move |_| gallery.update(GalleryState::next)
                        >
                            "›"
                        </button>
                    </Show>
                </div>
                <Show when=move || gallery.get().has_controls()>
                    <div class="gallery__thumbs">{thumbnails}</div>
                </Show>
            </section>
        </Show>
    }
}

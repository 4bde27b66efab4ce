use gloo_timers::callback::Interval;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::gallery::catalog::Catalog;
use crate::gallery::error::GalleryError;
use crate::gallery::lightbox::LightboxClick;
use crate::gallery::widget::{GalleryConfig, GalleryEvent, GalleryKey, GalleryWidget};

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub catalog: Catalog,
    pub config: GalleryConfig,
    #[prop_or_default]
    pub class: Classes,
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(1024.0)
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let widget = {
        let catalog = props.catalog.clone();
        let config = props.config;
        use_reducer(move || GalleryWidget::new(catalog, config, viewport_width()))
    };

    // Mount/unmount bookkeeping
    {
        let dispatcher = widget.dispatcher();
        let len = props.catalog.len();
        use_effect_with_deps(
            move |_| {
                if len == 0 {
                    warn!("{}; rendering an empty gallery", GalleryError::EmptyCatalog);
                } else {
                    info!("Gallery mounted with {} images", len);
                }
                move || dispatcher.dispatch(GalleryEvent::Teardown)
            },
            (),
        );
    }

    let (width, _) = use_window_size();
    {
        let dispatcher = widget.dispatcher();
        use_effect_with_deps(
            move |width| {
                dispatcher.dispatch(GalleryEvent::Resize(*width));
                || ()
            },
            width,
        );
    }

    // Autoplay timer, cancelled when the effect is torn down
    {
        let dispatcher = widget.dispatcher();
        let period = props.config.autoplay.map(|autoplay| autoplay.period_ms);
        use_effect_with_deps(
            move |period| {
                let interval = period.map(|ms| {
                    Interval::new(ms, move || dispatcher.dispatch(GalleryEvent::Tick))
                });
                move || drop(interval)
            },
            period,
        );
    }

    // Escape closes the overlay no matter where focus is
    {
        let dispatcher = widget.dispatcher();
        let is_open = widget.lightbox().is_open();
        use_effect_with_deps(
            move |is_open| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) if *is_open => {
                        let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if GalleryKey::from_key(&e.key()) == Some(GalleryKey::Escape) {
                                dispatcher.dispatch(GalleryEvent::Key(GalleryKey::Escape));
                            }
                        }) as Box<dyn FnMut(KeyboardEvent)>);
                        let _ = window.add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    _ => Box::new(|| ()),
                };
                destructor
            },
            is_open,
        );
    }

    let emit = |event: GalleryEvent| {
        let dispatcher = widget.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(event);
        })
    };

    let on_enter = {
        let dispatcher = widget.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(GalleryEvent::PointerEnter))
    };
    let on_leave = {
        let dispatcher = widget.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(GalleryEvent::PointerLeave))
    };
    let on_key = {
        let dispatcher = widget.dispatcher();
        Callback::from(move |e: KeyboardEvent| {
            match GalleryKey::from_key(&e.key()) {
                Some(key) if key.is_navigation() => {
                    e.prevent_default();
                    dispatcher.dispatch(GalleryEvent::Key(key));
                }
                _ => (),
            }
        })
    };

    let carousel = widget.carousel();
    let per_page = carousel.items_per_page();
    let current_page = carousel.current_page();

    let lightbox = match widget.open_item() {
        Some(item) => {
            let on_backdrop = emit(GalleryEvent::LightboxClick(LightboxClick::Backdrop));
            let on_close = {
                let dispatcher = widget.dispatcher();
                Callback::from(move |e: MouseEvent| {
                    e.stop_propagation();
                    dispatcher.dispatch(GalleryEvent::LightboxClick(LightboxClick::CloseButton));
                })
            };
            let on_image = {
                let dispatcher = widget.dispatcher();
                Callback::from(move |e: MouseEvent| {
                    // Must not reach the backdrop handler
                    e.stop_propagation();
                    dispatcher.dispatch(GalleryEvent::LightboxClick(LightboxClick::Image));
                })
            };
            html! {
                <div class="lightbox-backdrop" role="dialog" aria-modal="true" onclick={on_backdrop}>
                    <button class="lightbox-close" aria-label="Fechar" onclick={on_close}>{"×"}</button>
                    <figure class="lightbox-content" onclick={on_image}>
                        <img src={item.image_ref.clone()} alt={item.caption.clone()} />
                        <figcaption>{&item.caption}</figcaption>
                    </figure>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <div
            class={classes!("gallery", widget.state().is_paused.then(|| "paused"), props.class.clone())}
            tabindex="0"
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            onkeydown={on_key}
        >
            <style>
                {r#"
                    .gallery {
                        position: relative;
                        outline: none;
                    }
                    .gallery-viewport {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .gallery-track {
                        flex: 1;
                        display: grid;
                        gap: 1.5rem;
                    }
                    .gallery-track.per-page-1 { grid-template-columns: 1fr; }
                    .gallery-track.per-page-3 { grid-template-columns: repeat(3, 1fr); }
                    .gallery-item {
                        margin: 0;
                        cursor: zoom-in;
                        border-radius: 1rem;
                        overflow: hidden;
                        background: #fff;
                        box-shadow: 0 1px 3px rgba(15, 23, 42, 0.1);
                        transition: box-shadow 0.3s ease;
                    }
                    .gallery-item:hover {
                        box-shadow: 0 10px 25px rgba(15, 23, 42, 0.15);
                    }
                    .gallery-item img {
                        width: 100%;
                        height: 16rem;
                        object-fit: cover;
                        display: block;
                    }
                    .gallery-item figcaption {
                        padding: 0.75rem 1rem;
                        color: #475569;
                        font-size: 0.9rem;
                    }
                    .gallery-nav {
                        border: none;
                        background: #2563eb;
                        color: #fff;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .gallery-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 1.25rem;
                    }
                    .gallery-dot {
                        width: 0.65rem;
                        height: 0.65rem;
                        border-radius: 9999px;
                        border: none;
                        background: #cbd5e1;
                        cursor: pointer;
                    }
                    .gallery-dot.active {
                        background: #f97316;
                    }
                    .lightbox-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        background: rgba(15, 23, 42, 0.9);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                    }
                    .lightbox-content {
                        margin: 0;
                        max-width: 90vw;
                        max-height: 85vh;
                        text-align: center;
                        color: #e2e8f0;
                    }
                    .lightbox-content img {
                        max-width: 100%;
                        max-height: 78vh;
                        border-radius: 0.75rem;
                    }
                    .lightbox-close {
                        position: absolute;
                        top: 1.25rem;
                        right: 1.5rem;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 2.5rem;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="gallery-viewport">
                <button class="gallery-nav prev" aria-label="Anterior" onclick={emit(GalleryEvent::Previous)}>{"‹"}</button>
                <div class={classes!("gallery-track", format!("per-page-{}", per_page))}>
                    { for widget.visible_items().into_iter().map(|(position, item)| html! {
                        <figure key={position} class="gallery-item" onclick={emit(GalleryEvent::Select(position))}>
                            <img src={item.image_ref.clone()} alt={item.caption.clone()} loading="lazy" />
                            <figcaption>{&item.caption}</figcaption>
                        </figure>
                    }) }
                </div>
                <button class="gallery-nav next" aria-label="Próximo" onclick={emit(GalleryEvent::Next)}>{"›"}</button>
            </div>
            <div class="gallery-dots">
                { for (0..carousel.page_count()).map(|page| html! {
                    <button
                        class={classes!("gallery-dot", (page == current_page).then(|| "active"))}
                        aria-label={format!("Ir para {}", page + 1)}
                        onclick={emit(widget.dot_event(page))}
                    />
                }) }
            </div>
            { lightbox }
        </div>
    }
}

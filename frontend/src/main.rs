use yew::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod contact;
mod gallery {
    pub mod breakpoint;
    pub mod carousel;
    pub mod catalog;
    pub mod error;
    pub mod lightbox;
    pub mod widget;
}
mod components {
    pub mod contact_form;
    pub mod faq;
    pub mod gallery;
}
mod pages {
    pub mod landing;
}

use contact::{tel_link, whatsapp_link};
use pages::landing::Landing;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#tratamento", "O Tratamento"),
    ("#diferenciais", "Diferenciais"),
    ("#unidades", "Unidades"),
    ("#contato", "Contato"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(win) = web_sys::window() {
                        if let Ok(scroll_y) = win.scroll_y() {
                            is_scrolled.set(scroll_y > 80.0);
                        }
                    }
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());

                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                })
            } else {
                Box::new(|| ())
            };
            destructor
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor links keep their default scroll, they only fold the menu
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 60;
                        background: rgba(255, 255, 255, 0.95);
                        border-bottom: 1px solid #e2e8f0;
                        transition: box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        box-shadow: 0 4px 12px rgba(15, 23, 42, 0.08);
                    }
                    .nav-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        display: flex;
                        flex-direction: column;
                        text-decoration: none;
                        line-height: 1;
                    }
                    .nav-logo strong { color: #1e3a8a; font-size: 1.25rem; }
                    .nav-logo span { color: #2563eb; font-size: 0.8rem; letter-spacing: 0.2em; }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link { color: #475569; text-decoration: none; font-weight: 500; }
                    .nav-hotline { display: flex; flex-direction: column; align-items: flex-end; font-size: 0.85rem; }
                    .nav-hotline a { color: #1e3a8a; font-weight: 700; font-size: 1.1rem; text-decoration: none; }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #475569;
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            align-items: stretch;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            background: #fff;
                            padding: 1rem 1.5rem;
                            gap: 1rem;
                            box-shadow: 0 10px 15px rgba(15, 23, 42, 0.1);
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <strong>{"GRUPO"}</strong>
                    <span>{"RESTAURA VIDAS"}</span>
                </a>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <div class="nav-hotline">
                        <span>{"Precisa de ajuda urgente?"}</span>
                        <a href={tel_link(config::HOTLINE)}>{config::HOTLINE}</a>
                    </div>
                    <a
                        class="btn btn-primary"
                        href={whatsapp_link(config::WHATSAPP_NUMBER, Some(config::WHATSAPP_GREETING))}
                        target="_blank"
                        rel="noopener noreferrer"
                        onclick={close_menu.clone()}
                    >
                        {"Plantão 24h"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting {} landing page", config::CLINIC_NAME);
    yew::Renderer::<App>::new().render();
}

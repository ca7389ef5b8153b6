use log::debug;
use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::brand::Brand;
use crate::config;
use crate::content;
use crate::scroll::use_scroll_past;
use crate::state::MenuState;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub items: Vec<String>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let is_scrolled = use_scroll_past(config::SCROLL_THRESHOLD_PX);
    let menu = use_state(MenuState::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = *menu;
            next.toggle();
            debug!("Mobile menu open: {}", next.is_open());
            menu.set(next);
        })
    };

    // Anchor clicks still scroll to their section, so no prevent_default here.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.close();
            menu.set(next);
        })
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Brand />

                <div class="nav-links">
                    { for props.items.iter().map(|item| html! {
                        <a key={item.clone()} href={content::anchor(item)} class="nav-link">
                            {item}
                        </a>
                    }) }
                    <button class="nav-book-button">
                        {"Book Now"}
                        <IconView icon={Icon::ChevronRight} size={14} />
                    </button>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <IconView icon={if menu.is_open() { Icon::X } else { Icon::Menu }} />
                </button>
            </div>

            {
                if menu.is_open() {
                    html! {
                        <div class="mobile-menu">
                            { for props.items.iter().map(|item| html! {
                                <a
                                    key={item.clone()}
                                    href={content::anchor(item)}
                                    class="mobile-menu-link"
                                    onclick={close_menu.clone()}
                                >
                                    {item}
                                </a>
                            }) }
                            <button class="mobile-book-button">{"Book Appointment"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 1.5rem 0;
                        background: transparent;
                        transition: all 0.5s ease;
                    }
                    .top-nav.scrolled {
                        padding: 1rem 0;
                        background: rgba(5, 8, 10, 0.8);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2.5rem;
                    }
                    .nav-link {
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        transition: color 0.2s;
                    }
                    .nav-link:hover {
                        color: var(--brand-cyan);
                    }
                    .nav-book-button {
                        background: #fff;
                        color: var(--brand-dark);
                        padding: 0.5rem 1.5rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .nav-book-button:hover {
                        background: var(--brand-cyan);
                    }
                    .burger-menu {
                        display: none;
                        color: #fff;
                    }
                    .mobile-menu {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        background: var(--brand-dark);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        animation: menuDrop 0.3s ease-out;
                    }
                    @keyframes menuDrop {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .mobile-menu-link {
                        font-family: var(--font-display);
                        font-size: 1.125rem;
                    }
                    .mobile-book-button {
                        background: var(--brand-cyan);
                        color: var(--brand-dark);
                        padding: 1rem;
                        border-radius: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                    @media (min-width: 769px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

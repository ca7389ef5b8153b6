use std::rc::Rc;

use yew::prelude::*;
use log::{error, info};

mod config;
mod content;
mod scroll;
mod state;
mod components {
    pub mod brand;
    pub mod footer;
    pub mod icon;
    pub mod nav;
    pub mod theme;
}
mod pages {
    pub mod interactive_detail;
    pub mod landing;
}

use components::theme::Theme;
use content::SiteContent;
use pages::landing::Landing;
use scroll::ViewportScroll;


#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Option<Rc<SiteContent>>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let viewport = use_state(ViewportScroll::current);

    let page = match &props.content {
        Some(content) => html! { <Landing content={content.clone()} /> },
        None => html! {
            <div class="content-unavailable">
                <p>{"This page is temporarily unavailable. Please try again later."}</p>
            </div>
        },
    };

    html! {
        <>
            <Theme />
            {
                match (*viewport).clone() {
                    Some(viewport) => html! {
                        <ContextProvider<ViewportScroll> context={viewport}>
                            { page }
                        </ContextProvider<ViewportScroll>>
                    },
                    None => page,
                }
            }
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let content = match content::load() {
        Ok(content) => Some(Rc::new(content)),
        Err(e) => {
            error!("Failed to load site content: {}", e);
            None
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { content }).render();
}

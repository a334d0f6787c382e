use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod hooks;
mod interaction;
mod scroll;
mod content {
    pub mod catalog;
    pub mod error;
    pub mod icons;
    pub mod model;
}
mod components {
    pub mod about;
    pub mod case_study;
    pub mod contact;
    pub mod expertise;
    pub mod expertise_modal;
    pub mod footer;
    pub mod glyph;
    pub mod hero;
    pub mod nav;
    pub mod portfolio;
    pub mod progress_bar;
    pub mod testimonial;
}
mod pages {
    pub mod home;
    pub mod legal;
    pub mod not_found;
}

use components::nav::Nav;
use content::catalog::Catalog;
use hooks::{detect_input_mode, use_body_scroll_lock};
use interaction::{Interaction, InteractionHandle, InteractionState};
use pages::{
    home::Home,
    legal::{PrivacyPolicy, TermsOfService},
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        }
    }
}

const GLOBAL_STYLE: &str = r#"
    :root {
        --bg: #0a0a0a;
        --accent: #d4af37;
        --serif: "Cormorant Garamond", Georgia, serif;
        --sans: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    }
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        background: var(--bg);
        color: #fff;
        font-family: var(--sans);
        -webkit-font-smoothing: antialiased;
    }
    ::selection {
        background: var(--accent);
        color: var(--bg);
    }
    .eyebrow {
        font-size: 0.75rem;
        font-weight: 400;
        letter-spacing: 0.5em;
        text-transform: uppercase;
        color: var(--accent);
        margin: 0 0 1.5rem;
    }
    .reveal {
        animation: riseIn 0.8s ease-out both;
    }
    .glass {
        background: rgba(255, 255, 255, 0.03);
        backdrop-filter: blur(20px);
        border: 1px solid rgba(255, 255, 255, 0.05);
    }
    .overlay {
        position: fixed;
        inset: 0;
        overflow-y: auto;
        background: var(--bg);
        animation: fadeIn 0.4s ease-out;
    }
    .overlay-close {
        position: fixed;
        top: 2rem;
        right: 2rem;
        z-index: 110;
        padding: 1rem;
        display: flex;
        color: #fff;
        background: rgba(255, 255, 255, 0.05);
        backdrop-filter: blur(24px);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 9999px;
        cursor: pointer;
        transition: all 0.3s;
    }
    .overlay-close:hover {
        background: var(--accent);
        color: var(--bg);
    }
    .solid-button {
        padding: 1rem 3rem;
        border: none;
        background: var(--accent);
        color: var(--bg);
        font-size: 0.75rem;
        font-weight: 700;
        letter-spacing: 0.3em;
        text-transform: uppercase;
        cursor: pointer;
        transition: background 0.3s;
    }
    .solid-button:hover {
        background: #fff;
    }
    .outline-button {
        padding: 0.75rem 2rem;
        border: 1px solid var(--accent);
        background: transparent;
        color: var(--accent);
        font-size: 0.625rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        text-decoration: none;
        cursor: pointer;
        transition: all 0.3s;
    }
    .outline-button:hover {
        background: var(--accent);
        color: var(--bg);
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes riseIn {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes fadeScale {
        from { opacity: 0; transform: scale(0.9); }
        to { opacity: 1; transform: scale(1); }
    }
"#;

#[derive(Properties, PartialEq)]
struct AppProps {
    catalog: Rc<Catalog>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let interaction = use_reducer(|| InteractionState::new(detect_input_mode()));
    use_body_scroll_lock(interaction.any_overlay_open());

    let on_interaction = {
        let dispatcher = interaction.dispatcher();
        Callback::from(move |event: Interaction| dispatcher.dispatch(event))
    };

    html! {
        <ContextProvider<Rc<Catalog>> context={props.catalog.clone()}>
            <ContextProvider<InteractionHandle> context={interaction.clone()}>
                <BrowserRouter>
                    <style>{GLOBAL_STYLE}</style>
                    <Nav
                        solid={interaction.nav_solid()}
                        menu_open={interaction.menu_open}
                        {on_interaction}
                    />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<InteractionHandle>>
        </ContextProvider<Rc<Catalog>>>
    }
}

#[derive(Properties, PartialEq)]
struct CatalogFailureProps {
    message: String,
}

/// Mounted instead of the site when the catalog fails validation.
#[function_component]
fn CatalogFailure(props: &CatalogFailureProps) -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 2rem; background: #0a0a0a; color: #fff; font-family: sans-serif;">
            <div style="max-width: 40rem;">
                <h1 style="font-weight: 400;">{"This site is misconfigured."}</h1>
                <p style="color: rgba(255, 255, 255, 0.6);">{&props.message}</p>
            </div>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match Catalog::builtin() {
        Ok(catalog) => {
            yew::Renderer::<App>::with_props(AppProps {
                catalog: Rc::new(catalog),
            })
            .render();
        }
        Err(e) => {
            error!("Catalog failed validation: {}", e);
            yew::Renderer::<CatalogFailure>::with_props(CatalogFailureProps {
                message: e.to_string(),
            })
            .render();
        }
    }
}

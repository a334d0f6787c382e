use yew::prelude::*;

use crate::config::{inquiry_mailto, STUDIO_NAME};
use crate::content::icons::CLOSE;
use crate::components::glyph::GlyphIcon;
use crate::hooks::WindowListener;
use crate::interaction::Interaction;
use crate::scroll::nav_is_solid;

const NAV_ITEMS: [(&str, &str); 4] = [
    ("Projects", "/#projects"),
    ("About", "/#about"),
    ("Expertise", "/#expertise"),
    ("Contact", "/#contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub solid: bool,
    pub menu_open: bool,
    pub on_interaction: Callback<Interaction>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { solid, menu_open, on_interaction } = props;

    {
        let on_interaction = on_interaction.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new(&["scroll"], move || {
                    if let Some(window) = web_sys::window() {
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        on_interaction.emit(Interaction::Scrolled(nav_is_solid(scroll_y)));
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let on_interaction = on_interaction.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_interaction.emit(Interaction::ToggleMenu);
        })
    };

    let close_menu = {
        let on_interaction = on_interaction.clone();
        Callback::from(move |_: MouseEvent| on_interaction.emit(Interaction::CloseMenu))
    };

    html! {
        <nav class={classes!("top-nav", solid.then(|| "solid"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 2rem 0;
                        background: transparent;
                        transition: all 0.5s ease;
                    }
                    .top-nav.solid {
                        padding: 1rem 0;
                        background: rgba(10, 10, 10, 0.9);
                        backdrop-filter: blur(16px);
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
                    .nav-logo {
                        font-family: var(--serif);
                        font-size: 1.25rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: var(--accent);
                        z-index: 50;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 3rem;
                    }
                    .nav-link {
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: rgba(255, 255, 255, 0.6);
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .nav-link:hover {
                        color: var(--accent);
                    }
                    .nav-inquiry {
                        padding: 0.5rem 1.5rem;
                        border: 1px solid rgba(212, 175, 55, 0.3);
                        border-radius: 9999px;
                        font-size: 0.625rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: #fff;
                        text-decoration: none;
                        transition: all 0.5s;
                    }
                    .nav-inquiry:hover {
                        background: var(--accent);
                        color: var(--bg);
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #fff;
                        padding: 0.5rem;
                        z-index: 50;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        height: 1px;
                        background: #fff;
                        margin: 6px 0 6px auto;
                    }
                    .burger-menu span:first-child { width: 24px; }
                    .burger-menu span:last-child { width: 16px; }
                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        background: var(--bg);
                        z-index: 40;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 2rem;
                        animation: dropIn 0.4s ease-out;
                    }
                    .mobile-menu a {
                        font-family: var(--serif);
                        font-size: 1.875rem;
                        color: #fff;
                        text-decoration: none;
                    }
                    .mobile-menu a:hover {
                        color: var(--accent);
                    }
                    .mobile-menu a.mobile-inquiry {
                        margin-top: 2rem;
                        padding: 1rem 3rem;
                        border: 1px solid rgba(212, 175, 55, 0.3);
                        border-radius: 9999px;
                        font-family: var(--sans);
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: var(--accent);
                    }
                    @keyframes dropIn {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @media (max-width: 1023px) {
                        .nav-links, .nav-inquiry { display: none; }
                        .burger-menu { display: block; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="/#home" class="nav-logo">{STUDIO_NAME}</a>

                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|(label, href)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }) }
                </div>

                <a href={inquiry_mailto()} class="nav-inquiry">{"Inquiry"}</a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    {
                        if *menu_open {
                            html! { <GlyphIcon glyph={CLOSE} size={24} /> }
                        } else {
                            html! {
                                <>
                                    <span></span>
                                    <span></span>
                                </>
                            }
                        }
                    }
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_ITEMS.iter().map(|(label, href)| html! {
                                <a href={*href} onclick={close_menu.clone()}>{*label}</a>
                            }) }
                            <a href={inquiry_mailto()} class="mobile-inquiry" onclick={close_menu.clone()}>
                                {"Inquiry"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

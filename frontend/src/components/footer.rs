use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::STUDIO_NAME;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        padding: 3rem 0;
                        background: var(--bg);
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .site-footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 2rem;
                        font-size: 0.625rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    .site-footer-inner p {
                        color: rgba(255, 255, 255, 0.2);
                        margin: 0;
                    }
                    .site-footer-links {
                        display: flex;
                        gap: 3rem;
                    }
                    .site-footer-links a {
                        color: rgba(255, 255, 255, 0.4);
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .site-footer-links a:hover {
                        color: #fff;
                    }
                    @media (max-width: 767px) {
                        .site-footer-inner { flex-direction: column; }
                    }
                "#}
            </style>
            <div class="site-footer-inner">
                <p>{format!("© {} {}. All rights reserved.", year, STUDIO_NAME)}</p>
                <div class="site-footer-links">
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                </div>
            </div>
        </footer>
    }
}

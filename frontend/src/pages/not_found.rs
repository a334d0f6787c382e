use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 2rem;
                        text-align: center;
                    }
                    .not-found h1 {
                        font-family: var(--serif);
                        font-weight: 400;
                        font-size: 3rem;
                        margin: 0;
                    }
                "#}
            </style>
            <p class="eyebrow">{"404"}</p>
            <h1>{"This room doesn't exist."}</h1>
            <Link<Route> to={Route::Home} classes="outline-button">
                {"Back to the Portfolio"}
            </Link<Route>>
        </div>
    }
}

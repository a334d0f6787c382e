use yew::prelude::*;

use crate::hooks::use_scroll_metrics;

/// Thin accent line across the top of the viewport tracking document scroll.
#[function_component(ProgressBar)]
pub fn progress_bar() -> Html {
    let metrics = use_scroll_metrics();

    html! {
        <>
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 4px;
                        background: var(--accent);
                        z-index: 60;
                        transform-origin: left;
                    }
                "#}
            </style>
            <div
                class="scroll-progress"
                style={format!("transform: scaleX({:.4});", metrics.progress())}
            />
        </>
    }
}

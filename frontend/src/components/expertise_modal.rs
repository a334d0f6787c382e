use yew::prelude::*;

use crate::components::glyph::GlyphIcon;
use crate::content::icons::CLOSE;
use crate::content::model::Expertise;

#[derive(Properties, PartialEq)]
pub struct ExpertiseModalProps {
    pub item: Expertise,
    pub on_close: Callback<()>,
}

#[function_component(ExpertiseModal)]
pub fn expertise_modal(props: &ExpertiseModalProps) -> Html {
    let item = &props.item;
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="overlay expertise-modal">
            <style>
                {r#"
                    .expertise-modal {
                        z-index: 90;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1.5rem;
                    }
                    .expertise-modal-card {
                        max-width: 56rem;
                        width: 100%;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                    }
                    .expertise-modal-copy {
                        padding: 3rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                    }
                    .expertise-modal-icon {
                        width: 4rem;
                        height: 4rem;
                        margin-bottom: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 9999px;
                        background: var(--accent);
                        color: var(--bg);
                    }
                    .expertise-modal-copy h3 {
                        font-family: var(--serif);
                        font-weight: 400;
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        margin: 0 0 2rem;
                    }
                    .expertise-modal-quote {
                        font-family: var(--serif);
                        font-style: italic;
                        font-size: 1.25rem;
                        line-height: 1.6;
                        color: rgba(255, 255, 255, 0.8);
                        margin: 0 0 2rem;
                    }
                    .expertise-modal-body {
                        font-weight: 300;
                        line-height: 1.7;
                        color: rgba(255, 255, 255, 0.5);
                        margin: 0 0 2rem;
                    }
                    .expertise-modal-copy .outline-button {
                        align-self: flex-start;
                    }
                    .expertise-modal-previews {
                        display: grid;
                        gap: 0.5rem;
                        padding: 0.5rem;
                        background: rgba(0, 0, 0, 0.2);
                    }
                    .expertise-modal-previews div {
                        aspect-ratio: 16 / 9;
                        overflow: hidden;
                        border-radius: 0.75rem;
                    }
                    .expertise-modal-previews img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 1s;
                    }
                    .expertise-modal-previews img:hover {
                        transform: scale(1.1);
                    }
                    @media (max-width: 767px) {
                        .expertise-modal { align-items: flex-start; padding-top: 6rem; }
                        .expertise-modal-card { grid-template-columns: 1fr; }
                        .expertise-modal-copy { padding: 2rem; }
                    }
                "#}
            </style>

            <button class="overlay-close" onclick={close.clone()} aria-label="Close details">
                <GlyphIcon glyph={CLOSE} size={24} />
            </button>

            <div class="expertise-modal-card glass">
                <div class="expertise-modal-copy">
                    <div class="expertise-modal-icon">
                        <GlyphIcon glyph={item.icon.glyph()} size={32} />
                    </div>
                    <h2 class="eyebrow">{"Expertise Detail"}</h2>
                    <h3>{&item.title}</h3>
                    <p class="expertise-modal-quote">{format!("\"{}\"", item.expanded_description)}</p>
                    <p class="expertise-modal-body">
                        {format!(
                            "{} Our approach to {} is rooted in precision, creativity, and a deep understanding of spatial dynamics. We use the latest industry tools to make sure every detail is meticulously crafted.",
                            item.description,
                            item.title.to_lowercase()
                        )}
                    </p>
                    <button class="outline-button" onclick={close}>{"Close Details"}</button>
                </div>
                <div class="expertise-modal-previews">
                    { for item.previews.iter().map(|src| html! {
                        <div>
                            <img src={src.clone()} loading="lazy" referrerpolicy="no-referrer" />
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

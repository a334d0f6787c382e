use yew::prelude::*;

use crate::components::glyph::GlyphIcon;
use crate::content::icons::QUOTE;

#[function_component(StudioTestimonial)]
pub fn studio_testimonial() -> Html {
    html! {
        <section class="studio-quote">
            <style>
                {r#"
                    .studio-quote {
                        position: relative;
                        overflow: hidden;
                        padding: 12rem 0;
                        background: var(--bg);
                    }
                    .studio-quote-watermark {
                        position: absolute;
                        top: -6rem;
                        left: -6rem;
                        font-family: var(--serif);
                        font-size: 20vw;
                        opacity: 0.03;
                        pointer-events: none;
                        user-select: none;
                    }
                    .studio-quote-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        text-align: center;
                        animation: fadeScale 1s ease-out both;
                    }
                    .studio-quote-inner .glyph {
                        color: rgba(212, 175, 55, 0.3);
                        margin-bottom: 3rem;
                    }
                    .studio-quote-inner blockquote {
                        font-family: var(--serif);
                        font-style: italic;
                        font-size: clamp(1.5rem, 5vw, 3.75rem);
                        line-height: 1.25;
                        margin: 0 0 4rem;
                    }
                    .studio-quote-rule {
                        width: 6rem;
                        height: 1px;
                        background: var(--accent);
                        margin: 0 auto 2rem;
                    }
                    @media (max-width: 767px) {
                        .studio-quote { padding: 8rem 0; }
                        .studio-quote-watermark { font-size: 30vw; top: -3rem; left: -3rem; }
                    }
                "#}
            </style>
            <div class="studio-quote-watermark">{"DESIGN"}</div>
            <div class="studio-quote-inner">
                <GlyphIcon glyph={QUOTE} size={48} />
                <blockquote>
                    {"\"Design is not just what it looks like and feels like. Design is how it works and how it tells a story.\""}
                </blockquote>
                <div class="studio-quote-rule" />
                <p class="eyebrow">{"The Studio Philosophy"}</p>
            </div>
        </section>
    }
}

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::glyph::GlyphIcon;
use crate::config::{DESIGNER_PORTRAIT, HERO_BACKGROUND};
use crate::content::icons::ARROW_RIGHT;
use crate::hooks::use_scroll_metrics;
use crate::scroll::hero_parallax_percent;

#[function_component(Hero)]
pub fn hero() -> Html {
    let section_ref = use_node_ref();
    let metrics = use_scroll_metrics();

    let offset = section_ref
        .cast::<HtmlElement>()
        .map(|section| {
            hero_parallax_percent(
                metrics.scroll_y,
                section.offset_top() as f64,
                section.offset_height() as f64,
            )
        })
        .unwrap_or(0.0);

    html! {
        <section id="home" class="hero" ref={section_ref}>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        width: 100%;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.4;
                    }
                    .hero-background .zoom {
                        width: 100%;
                        height: 100%;
                        animation: slowZoom 20s infinite alternate ease-in-out;
                    }
                    .hero-background::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, var(--bg), rgba(10, 10, 10, 0.6), transparent);
                    }
                    @keyframes slowZoom {
                        from { transform: scale(1.1); }
                        to { transform: scale(1.2); }
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        width: 100%;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .hero-copy {
                        animation: riseIn 1s ease-out 0.5s both;
                    }
                    .hero-copy h1 {
                        font-family: var(--serif);
                        font-weight: 400;
                        font-size: clamp(2.25rem, 6vw, 6rem);
                        line-height: 1.1;
                        margin: 0 0 2rem;
                    }
                    .hero-copy h1 em {
                        color: var(--accent);
                    }
                    .hero-copy p {
                        font-size: 1.25rem;
                        font-weight: 300;
                        line-height: 1.6;
                        color: rgba(255, 255, 255, 0.6);
                        max-width: 28rem;
                        margin-bottom: 3rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1.5rem;
                    }
                    .hero-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1rem 2rem;
                        font-size: 0.625rem;
                        font-weight: 700;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        text-decoration: none;
                        transition: all 0.3s;
                    }
                    .hero-cta.primary {
                        background: var(--accent);
                        color: var(--bg);
                    }
                    .hero-cta.primary:hover {
                        background: #fff;
                    }
                    .hero-cta.secondary {
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        color: #fff;
                    }
                    .hero-cta.secondary:hover {
                        background: #fff;
                        color: var(--bg);
                    }
                    .hero-portrait {
                        position: relative;
                        aspect-ratio: 3 / 4;
                        width: 100%;
                        max-width: 24rem;
                        margin-left: auto;
                        animation: fadeScale 1.5s ease-out 0.8s both;
                    }
                    .hero-portrait .frame {
                        position: absolute;
                        inset: -1rem;
                        border: 1px solid rgba(212, 175, 55, 0.2);
                        transform: translate(2rem, 2rem);
                    }
                    .hero-portrait img {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: grayscale(1);
                        transition: filter 1s;
                    }
                    .hero-portrait img:hover {
                        filter: grayscale(0);
                    }
                    .scroll-hint {
                        position: absolute;
                        bottom: 3rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        opacity: 0.4;
                    }
                    .scroll-hint span {
                        font-size: 0.625rem;
                        letter-spacing: 0.5em;
                        text-transform: uppercase;
                        writing-mode: vertical-rl;
                    }
                    .scroll-hint div {
                        width: 1px;
                        height: 3rem;
                        background: rgba(255, 255, 255, 0.2);
                    }
                    @media (max-width: 1023px) {
                        .hero { padding: 8rem 0 6rem; }
                        .hero-content {
                            grid-template-columns: 1fr;
                            text-align: center;
                        }
                        .hero-copy p { margin-left: auto; margin-right: auto; }
                        .hero-cta-group { justify-content: center; }
                        .hero-portrait { max-width: 20rem; margin: 0 auto; }
                    }
                "#}
            </style>
            <div class="hero-background">
                <div style={format!("height: 100%; transform: translateY({:.2}%);", offset)}>
                    <div class="zoom">
                        <img src={HERO_BACKGROUND} alt="Luxury Interior" referrerpolicy="no-referrer" />
                    </div>
                </div>
            </div>

            <div class="hero-content">
                <div class="hero-copy">
                    <h1>
                        {"Senior Interior "}
                        <em>{"Designer"}</em>
                        {" & 3D Visualizer"}
                    </h1>
                    <p>
                        {"Creating immersive residential and commercial spaces through spatial storytelling and high-quality visualization."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#projects" class="hero-cta primary">
                            {"View Projects"}
                            <GlyphIcon glyph={ARROW_RIGHT} size={14} />
                        </a>
                        <a href="#contact" class="hero-cta secondary">{"Contact"}</a>
                    </div>
                </div>

                <div class="hero-portrait">
                    <div class="frame"></div>
                    <img src={DESIGNER_PORTRAIT} alt="Designer Portrait" referrerpolicy="no-referrer" />
                </div>
            </div>

            <div class="scroll-hint">
                <span>{"Scroll"}</span>
                <div></div>
            </div>
        </section>
    }
}

use yew::prelude::*;

use crate::components::glyph::GlyphIcon;
use crate::content::icons::{CLOSE, QUOTE};
use crate::content::model::Project;

#[derive(Properties, PartialEq)]
pub struct CaseStudyProps {
    pub project: Project,
    pub on_close: Callback<()>,
}

/// Full-screen case study for one project.
#[function_component(CaseStudyView)]
pub fn case_study_view(props: &CaseStudyProps) -> Html {
    let project = &props.project;
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Validation guarantees at least one drawing and one execution photo.
    let drawing = project.drawings.first().cloned().unwrap_or_default();
    let execution = project.execution.first().cloned().unwrap_or_default();

    html! {
        <div class="overlay case-study">
            <style>
                {r#"
                    .case-study {
                        z-index: 100;
                    }
                    .case-study-hero {
                        position: relative;
                        height: 80vh;
                        width: 100%;
                        overflow: hidden;
                    }
                    .case-study-hero img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .case-study-hero-copy {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.4);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 0 1.5rem;
                    }
                    .case-study-hero-copy p {
                        font-size: 0.75rem;
                        letter-spacing: 0.5em;
                        text-transform: uppercase;
                        color: var(--accent);
                        margin: 0 0 1.5rem;
                        animation: riseIn 0.6s ease-out both;
                    }
                    .case-study-hero-copy h1 {
                        font-family: var(--serif);
                        font-weight: 400;
                        font-size: clamp(3rem, 8vw, 6rem);
                        margin: 0;
                        animation: riseIn 0.6s ease-out 0.2s both;
                    }
                    .case-study-body {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 6rem 1.5rem;
                    }
                    .case-study-block {
                        margin-bottom: 8rem;
                    }
                    .case-study-columns {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 6rem;
                        align-items: start;
                    }
                    .case-study-label {
                        font-size: 0.625rem;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        color: rgba(255, 255, 255, 0.4);
                        margin: 0 0 2rem;
                    }
                    .case-study-concept {
                        font-family: var(--serif);
                        font-style: italic;
                        font-size: 1.5rem;
                        line-height: 1.6;
                        color: var(--accent);
                        margin: 0;
                    }
                    .case-study-overview {
                        font-size: 1.125rem;
                        font-weight: 300;
                        line-height: 1.7;
                        color: rgba(255, 255, 255, 0.7);
                        margin: 0;
                    }
                    .case-study-gallery {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }
                    .case-study-gallery div {
                        overflow: hidden;
                        aspect-ratio: 1;
                    }
                    .case-study-gallery div.wide {
                        grid-column: span 2;
                        aspect-ratio: 16 / 9;
                    }
                    .case-study-gallery img,
                    .case-study-plate img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: all 1s;
                    }
                    .case-study-gallery img:hover {
                        transform: scale(1.05);
                    }
                    .case-study-plate {
                        aspect-ratio: 4 / 3;
                        background: #171717;
                        overflow: hidden;
                    }
                    .case-study-plate.drawing img {
                        opacity: 0.5;
                        filter: grayscale(1);
                    }
                    .case-study-plate.drawing img:hover {
                        filter: grayscale(0);
                    }
                    .case-study-plate.execution img {
                        opacity: 0.8;
                    }
                    .case-study-video {
                        aspect-ratio: 16 / 9;
                        width: 100%;
                        background: #171717;
                    }
                    .case-study-video iframe {
                        width: 100%;
                        height: 100%;
                        border: 0;
                    }
                    .case-study-vr {
                        display: inline-flex;
                        margin-top: 2rem;
                        padding: 0.75rem 2rem;
                        border: 1px solid var(--accent);
                        color: var(--accent);
                        font-size: 0.625rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        text-decoration: none;
                    }
                    .case-study-testimonial {
                        padding: 8rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                        text-align: center;
                    }
                    .case-study-testimonial .glyph {
                        color: var(--accent);
                        opacity: 0.5;
                        margin-bottom: 3rem;
                    }
                    .case-study-testimonial blockquote {
                        font-family: var(--serif);
                        font-style: italic;
                        font-size: clamp(1.5rem, 4vw, 3rem);
                        line-height: 1.25;
                        max-width: 56rem;
                        margin: 0 auto 3rem;
                    }
                    .case-study-footer {
                        background: #171717;
                        padding: 6rem 0;
                        text-align: center;
                    }
                    .case-study-footer h2 {
                        font-family: var(--serif);
                        font-weight: 400;
                        font-size: 1.875rem;
                        margin: 0 0 2rem;
                    }
                    @media (max-width: 767px) {
                        .case-study-body { padding: 3rem 1.5rem; }
                        .case-study-block { margin-bottom: 5rem; }
                        .case-study-columns, .case-study-gallery { grid-template-columns: 1fr; gap: 3rem; }
                        .case-study-gallery div.wide { grid-column: auto; }
                        .case-study-testimonial { padding: 5rem 0; }
                    }
                "#}
            </style>

            <button class="overlay-close" onclick={close.clone()} aria-label="Close case study">
                <GlyphIcon glyph={CLOSE} size={24} />
            </button>

            <section class="case-study-hero">
                <img src={project.hero_image.clone()} alt={project.title.clone()} referrerpolicy="no-referrer" />
                <div class="case-study-hero-copy">
                    <p>{project.category.label()}</p>
                    <h1>{&project.title}</h1>
                </div>
            </section>

            <div class="case-study-body">
                <div class="case-study-block case-study-columns">
                    <div>
                        <h2 class="case-study-label">{"The Concept"}</h2>
                        <p class="case-study-concept">{format!("\"{}\"", project.concept)}</p>
                    </div>
                    <div>
                        <h2 class="case-study-label">{"Overview"}</h2>
                        <p class="case-study-overview">{&project.description}</p>
                    </div>
                </div>

                <div class="case-study-block">
                    <h2 class="case-study-label">{"3D Visualization Gallery"}</h2>
                    <div class="case-study-gallery">
                        { for project.gallery.iter().enumerate().map(|(i, src)| html! {
                            <div class={classes!((i == 0).then(|| "wide"))}>
                                <img src={src.clone()} loading="lazy" referrerpolicy="no-referrer" />
                            </div>
                        }) }
                    </div>
                </div>

                <div class="case-study-block case-study-columns">
                    <div>
                        <h2 class="case-study-label">{"Technical Documentation"}</h2>
                        <div class="case-study-plate drawing">
                            <img src={drawing} loading="lazy" referrerpolicy="no-referrer" />
                        </div>
                    </div>
                    <div>
                        <h2 class="case-study-label">{"Site Execution"}</h2>
                        <div class="case-study-plate execution">
                            <img src={execution} loading="lazy" referrerpolicy="no-referrer" />
                        </div>
                    </div>
                </div>

                {
                    if project.video_url.is_some() || project.vr_url.is_some() {
                        html! {
                            <div class="case-study-block">
                                <h2 class="case-study-label">{"Cinematic Walkthrough"}</h2>
                                {
                                    if let Some(video) = &project.video_url {
                                        html! {
                                            <div class="case-study-video">
                                                <iframe
                                                    src={video.clone()}
                                                    title="Project walkthrough"
                                                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                                                    allowfullscreen={true}
                                                />
                                            </div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                                {
                                    if let Some(vr) = &project.vr_url {
                                        html! {
                                            <a class="case-study-vr" href={vr.clone()} target="_blank" rel="noopener noreferrer">
                                                {"Enter VR Tour"}
                                            </a>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(testimonial) = &project.testimonial {
                        html! {
                            <div class="case-study-testimonial">
                                <GlyphIcon glyph={QUOTE} size={32} />
                                <blockquote>{format!("\"{}\"", testimonial.text)}</blockquote>
                                <p class="eyebrow">{format!("— {}", testimonial.author)}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <footer class="case-study-footer">
                <h2>{"Ready to start your project?"}</h2>
                <button class="solid-button" onclick={close}>{"Back to Portfolio"}</button>
            </footer>
        </div>
    }
}

use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <style>
                {r#"
                    .about {
                        padding: 8rem 0;
                        background: var(--bg);
                    }
                    .about-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: grid;
                        grid-template-columns: 4fr 8fr;
                        gap: 3rem;
                    }
                    .about-lead {
                        font-family: var(--serif);
                        font-size: clamp(1.5rem, 4vw, 3rem);
                        line-height: 1.25;
                        margin: 0 0 3rem;
                    }
                    .about-body {
                        font-size: 1.25rem;
                        font-weight: 300;
                        line-height: 1.7;
                        color: rgba(255, 255, 255, 0.5);
                        max-width: 42rem;
                        margin: 0 0 3rem;
                    }
                    .luxury-divider {
                        width: 6rem;
                        height: 1px;
                        background: linear-gradient(to right, var(--accent), transparent);
                    }
                    @media (max-width: 767px) {
                        .about { padding: 5rem 0; }
                        .about-inner { grid-template-columns: 1fr; gap: 2rem; }
                    }
                "#}
            </style>
            <div class="about-inner">
                <div>
                    <h2 class="eyebrow">{"The Philosophy"}</h2>
                </div>
                <div>
                    <p class="about-lead reveal">
                        {"I am a Senior Interior Designer & 3D Visualizer specializing in concept development, space planning, and photorealistic visualization."}
                    </p>
                    <p class="about-body reveal">
                        {"With experience across residential and commercial projects, including international collaborations in Kuwait and Singapore, I transform ideas into immersive visual experiences. Design is not just my profession. It is my passion."}
                    </p>
                    <div class="luxury-divider" />
                </div>
            </div>
        </section>
    }
}

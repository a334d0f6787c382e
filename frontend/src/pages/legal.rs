use yew::prelude::*;

use crate::components::footer::Footer;
use crate::config::{CONTACT_EMAIL, STUDIO_NAME};

const LEGAL_STYLE: &str = r#"
    .legal-content {
        min-height: 100vh;
        padding: 10rem 1.5rem 6rem;
        background: var(--bg);
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .legal-content > div {
        max-width: 48rem;
        width: 100%;
    }
    .legal-content h1 {
        font-family: var(--serif);
        font-weight: 400;
        font-size: clamp(2.25rem, 5vw, 3.75rem);
        margin: 0 0 3rem;
    }
    .legal-content section {
        padding: 2rem 0;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
    }
    .legal-content h2 {
        font-size: 0.75rem;
        letter-spacing: 0.3em;
        text-transform: uppercase;
        color: var(--accent);
        margin: 0 0 1rem;
    }
    .legal-content p {
        font-weight: 300;
        line-height: 1.7;
        color: rgba(255, 255, 255, 0.6);
    }
"#;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <>
            <div class="legal-content">
                <style>{LEGAL_STYLE}</style>
                <div>
                    <h2 class="eyebrow">{STUDIO_NAME}</h2>
                    <h1>{"Privacy Policy"}</h1>
                    <section>
                        <h2>{"What this site collects"}</h2>
                        <p>{"Nothing. This portfolio has no accounts, no analytics and no server of its own. The contact form is not submitted anywhere."}</p>
                    </section>
                    <section>
                        <h2>{"Third-party content"}</h2>
                        <p>{"Project imagery is served by an external image host and walkthrough videos are embedded from a video platform. Those services may log standard request data under their own policies."}</p>
                    </section>
                    <section>
                        <h2>{"Contact"}</h2>
                        <p>{format!("Questions about this policy can be sent to {}.", CONTACT_EMAIL)}</p>
                    </section>
                </div>
            </div>
            <Footer />
        </>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <>
            <div class="legal-content">
                <style>{LEGAL_STYLE}</style>
                <div>
                    <h2 class="eyebrow">{STUDIO_NAME}</h2>
                    <h1>{"Terms of Service"}</h1>
                    <section>
                        <h2>{"Use of this site"}</h2>
                        <p>{"This site presents past and ongoing interior design work for information only. Viewing it creates no engagement or obligation on either side."}</p>
                    </section>
                    <section>
                        <h2>{"Intellectual property"}</h2>
                        <p>{"Concepts, drawings and renders shown here remain the property of the studio or its clients and may not be reproduced without written permission."}</p>
                    </section>
                    <section>
                        <h2>{"Commissions"}</h2>
                        <p>{"Design engagements are governed by a separate written agreement agreed before any work begins."}</p>
                    </section>
                </div>
            </div>
            <Footer />
        </>
    }
}

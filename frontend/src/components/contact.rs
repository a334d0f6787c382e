use log::info;
use yew::prelude::*;

use crate::components::glyph::GlyphIcon;
use crate::config::{CONTACT_EMAIL, CONTACT_PHONE, INSTAGRAM_URL, LINKEDIN_URL};
use crate::content::icons::{INSTAGRAM, LINKEDIN, MAIL, PHONE};

const PROJECT_TYPES: [&str; 4] = ["Residential", "Commercial", "3D Visualization Only", "Other"];

#[function_component(Contact)]
pub fn contact() -> Html {
    // The form is presentational only; nothing is sent anywhere.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submit ignored");
    });

    html! {
        <section id="contact" class="contact">
            <style>
                {r#"
                    .contact {
                        padding: 8rem 0;
                        background: #171717;
                    }
                    .contact-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 6rem;
                    }
                    .contact h3 {
                        font-family: var(--serif);
                        font-weight: 400;
                        font-size: clamp(2.25rem, 7vw, 6rem);
                        line-height: 1;
                        margin: 0 0 3rem;
                    }
                    .contact h3 em {
                        color: var(--accent);
                    }
                    .contact-details {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .contact-row {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .contact-badge {
                        width: 3rem;
                        height: 3rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        transition: all 0.3s;
                    }
                    .contact-row:hover .contact-badge {
                        background: var(--accent);
                        color: var(--bg);
                    }
                    .contact-label {
                        font-size: 0.625rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: rgba(255, 255, 255, 0.4);
                        margin: 0 0 0.25rem;
                    }
                    .contact-value {
                        font-size: 1.125rem;
                        font-weight: 300;
                        margin: 0;
                    }
                    .contact-social {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .contact-social a {
                        padding: 1rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #fff;
                        display: flex;
                        transition: all 0.3s;
                    }
                    .contact-social a:hover {
                        background: #fff;
                        color: var(--bg);
                    }
                    .contact-form {
                        padding: 3rem;
                        border-radius: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .contact-form .pair {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }
                    .contact-form label {
                        display: block;
                        font-size: 0.625rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: rgba(255, 255, 255, 0.4);
                        margin-bottom: 0.5rem;
                    }
                    .contact-form input,
                    .contact-form select,
                    .contact-form textarea {
                        width: 100%;
                        background: transparent;
                        border: none;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 1rem 0;
                        color: #fff;
                        font: inherit;
                        outline: none;
                        resize: none;
                        appearance: none;
                        transition: border-color 0.3s;
                    }
                    .contact-form input:focus,
                    .contact-form select:focus,
                    .contact-form textarea:focus {
                        border-bottom-color: var(--accent);
                    }
                    .contact-form option {
                        background: var(--bg);
                    }
                    .contact-form button {
                        padding: 1.5rem 0;
                        border: none;
                        background: var(--accent);
                        color: var(--bg);
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.4em;
                        text-transform: uppercase;
                        cursor: pointer;
                        transition: background 0.5s;
                    }
                    .contact-form button:hover {
                        background: #fff;
                    }
                    @media (max-width: 1023px) {
                        .contact-inner { grid-template-columns: 1fr; gap: 4rem; }
                    }
                    @media (max-width: 767px) {
                        .contact { padding: 5rem 0; }
                        .contact-form { padding: 2rem; }
                        .contact-form .pair { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="contact-inner">
                <div>
                    <h2 class="eyebrow">{"Get in Touch"}</h2>
                    <h3>
                        {"Let’s Design"}<br />{"Something"}<br /><em>{"Exceptional."}</em>
                    </h3>

                    <div class="contact-details">
                        <div class="contact-row">
                            <div class="contact-badge"><GlyphIcon glyph={MAIL} size={18} /></div>
                            <div>
                                <p class="contact-label">{"Email"}</p>
                                <p class="contact-value">{CONTACT_EMAIL}</p>
                            </div>
                        </div>
                        <div class="contact-row">
                            <div class="contact-badge"><GlyphIcon glyph={PHONE} size={18} /></div>
                            <div>
                                <p class="contact-label">{"Phone / WhatsApp"}</p>
                                <p class="contact-value">{CONTACT_PHONE}</p>
                            </div>
                        </div>
                    </div>

                    <div class="contact-social">
                        <a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" aria-label="Instagram">
                            <GlyphIcon glyph={INSTAGRAM} size={20} />
                        </a>
                        <a href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                            <GlyphIcon glyph={LINKEDIN} size={20} />
                        </a>
                    </div>
                </div>

                <form class="contact-form glass" {onsubmit}>
                    <div class="pair">
                        <div>
                            <label>{"Full Name"}</label>
                            <input type="text" placeholder="John Doe" />
                        </div>
                        <div>
                            <label>{"Email Address"}</label>
                            <input type="email" placeholder="john@example.com" />
                        </div>
                    </div>
                    <div>
                        <label>{"Project Type"}</label>
                        <select>
                            { for PROJECT_TYPES.iter().map(|kind| html! { <option>{*kind}</option> }) }
                        </select>
                    </div>
                    <div>
                        <label>{"Message"}</label>
                        <textarea rows="4" placeholder="Tell us about your vision..."></textarea>
                    </div>
                    <button type="submit">{"Send Message"}</button>
                </form>
            </div>
        </section>
    }
}

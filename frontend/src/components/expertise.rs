use std::rc::Rc;

use yew::prelude::*;

use crate::components::glyph::GlyphIcon;
use crate::content::catalog::Catalog;
use crate::content::icons::ARROW_RIGHT;
use crate::content::model::Expertise;
use crate::interaction::{cell_click, pointer_hover, ClickOrigin, Interaction};

#[derive(Properties, PartialEq)]
struct ExpertiseCellProps {
    index: usize,
    item: Expertise,
    disclosed: bool,
    spans_row: bool,
    on_interaction: Callback<Interaction>,
}

#[function_component(ExpertiseCell)]
fn expertise_cell(props: &ExpertiseCellProps) -> Html {
    let index = props.index;
    let item = &props.item;

    let onpointerenter = {
        let on_interaction = props.on_interaction.clone();
        Callback::from(move |e: PointerEvent| {
            if let Some(event) = pointer_hover(&e.pointer_type(), index, true) {
                on_interaction.emit(event);
            }
        })
    };
    let onpointerleave = {
        let on_interaction = props.on_interaction.clone();
        Callback::from(move |e: PointerEvent| {
            if let Some(event) = pointer_hover(&e.pointer_type(), index, false) {
                on_interaction.emit(event);
            }
        })
    };
    let onclick = {
        let on_interaction = props.on_interaction.clone();
        Callback::from(move |e: MouseEvent| {
            // The section treats clicks that reach it as taps outside every cell.
            e.stop_propagation();
            on_interaction.emit(cell_click(ClickOrigin::Cell, index));
        })
    };
    let on_view_more = {
        let on_interaction = props.on_interaction.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_interaction.emit(cell_click(ClickOrigin::ViewMore, index));
        })
    };

    html! {
        <div
            class={classes!("expertise-cell", props.disclosed.then(|| "disclosed"), props.spans_row.then(|| "span-row"))}
            style={format!("animation-delay: {}ms;", index * 100)}
            {onpointerenter}
            {onpointerleave}
            {onclick}
        >
            {
                if props.disclosed {
                    html! {
                        <div class="preview-panel">
                            <div class="preview-card">
                                <div class="preview-images">
                                    { for item.previews.iter().map(|src| html! {
                                        <div class="preview-image">
                                            <img src={src.clone()} alt="Preview" referrerpolicy="no-referrer" />
                                        </div>
                                    }) }
                                </div>
                                <p class="preview-text">{&item.expanded_description}</p>
                                <div class="preview-more" onclick={on_view_more}>
                                    {"View More"}
                                    <GlyphIcon glyph={ARROW_RIGHT} size={10} />
                                </div>
                            </div>
                            <div class="preview-arrow" />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="expertise-icon">
                <GlyphIcon glyph={item.icon.glyph()} size={20} />
            </div>
            <h4>{&item.title}</h4>
            <p class="expertise-summary">{&item.description}</p>
            <div class="expertise-rule" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExpertiseGridProps {
    pub disclosed: Option<usize>,
    pub on_interaction: Callback<Interaction>,
}

#[function_component(ExpertiseGrid)]
pub fn expertise_grid(props: &ExpertiseGridProps) -> Html {
    let catalog = use_context::<Rc<Catalog>>();
    let Some(catalog) = catalog else {
        return html! {};
    };

    let dismiss = {
        let on_interaction = props.on_interaction.clone();
        Callback::from(move |_: MouseEvent| on_interaction.emit(Interaction::DismissDisclosure))
    };

    let entries = catalog.expertise();
    // An odd trailing entry stretches across both columns of the two-column layout.
    let odd_tail = entries.len() % 2 != 0;

    html! {
        <section id="expertise" class="expertise" onclick={dismiss}>
            <style>
                {r#"
                    .expertise {
                        padding: 8rem 0;
                        background: rgba(23, 23, 23, 0.5);
                    }
                    .expertise-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .expertise-header {
                        text-align: center;
                        margin-bottom: 6rem;
                    }
                    .expertise-header h3 {
                        font-family: var(--serif);
                        font-weight: 400;
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        margin: 0;
                    }
                    .expertise-grid {
                        display: grid;
                        grid-template-columns: repeat(5, 1fr);
                        gap: 3rem;
                    }
                    .expertise-cell {
                        position: relative;
                        text-align: center;
                        cursor: pointer;
                        animation: riseIn 0.6s ease-out both;
                    }
                    .expertise-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        transition: all 0.5s;
                    }
                    .expertise-cell:hover .expertise-icon,
                    .expertise-cell.disclosed .expertise-icon {
                        border-color: var(--accent);
                        background: var(--accent);
                        color: var(--bg);
                        box-shadow: 0 0 20px rgba(212, 175, 55, 0.3);
                        transform: translateY(-5px);
                    }
                    .expertise-cell h4 {
                        font-size: 0.875rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        margin: 0 0 1rem;
                        transition: color 0.3s;
                    }
                    .expertise-cell:hover h4,
                    .expertise-cell.disclosed h4 {
                        color: var(--accent);
                    }
                    .expertise-summary {
                        font-size: 0.75rem;
                        line-height: 1.6;
                        color: rgba(255, 255, 255, 0.4);
                        padding: 0 0.5rem;
                        margin: 0;
                    }
                    .expertise-rule {
                        width: 0;
                        height: 1px;
                        background: var(--accent);
                        margin: 1rem auto 0;
                        transition: width 0.5s;
                    }
                    .expertise-cell:hover .expertise-rule,
                    .expertise-cell.disclosed .expertise-rule {
                        width: 3rem;
                    }
                    .preview-panel {
                        position: absolute;
                        bottom: 100%;
                        left: 50%;
                        transform: translateX(-50%);
                        margin-bottom: 2rem;
                        width: 20rem;
                        z-index: 30;
                        animation: panelIn 0.4s cubic-bezier(0.22, 1, 0.36, 1);
                    }
                    .preview-card {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(23, 23, 23, 0.85);
                        backdrop-filter: blur(20px);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }
                    .preview-images {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .preview-image {
                        aspect-ratio: 1;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        background: #262626;
                    }
                    .preview-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.8;
                    }
                    .preview-text {
                        font-size: 0.75rem;
                        font-weight: 300;
                        font-style: italic;
                        line-height: 1.6;
                        text-align: left;
                        color: rgba(255, 255, 255, 0.7);
                        margin: 0 0 1rem;
                    }
                    .preview-more {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.625rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: var(--accent);
                        transition: color 0.3s;
                    }
                    .preview-more:hover {
                        color: #fff;
                    }
                    .preview-arrow {
                        position: absolute;
                        bottom: -0.5rem;
                        left: 50%;
                        width: 1rem;
                        height: 1rem;
                        transform: translateX(-50%) rotate(45deg);
                        background: #171717;
                        border-right: 1px solid rgba(255, 255, 255, 0.1);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        z-index: -1;
                    }
                    @keyframes panelIn {
                        from { opacity: 0; transform: translate(-50%, 10px) scale(0.95); }
                        to { opacity: 1; transform: translate(-50%, 0) scale(1); }
                    }
                    @media (max-width: 1023px) {
                        .expertise-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    @media (max-width: 767px) {
                        .expertise { padding: 5rem 0; }
                        .expertise-grid { grid-template-columns: repeat(2, 1fr); gap: 2rem; }
                        .expertise-cell.span-row { grid-column: span 2; }
                        .expertise-icon { width: 3rem; height: 3rem; margin-bottom: 1.5rem; }
                        .expertise-cell h4, .expertise-summary { font-size: 0.625rem; }
                        .preview-panel { width: 16rem; }
                    }
                "#}
            </style>
            <div class="expertise-inner">
                <div class="expertise-header">
                    <h2 class="eyebrow">{"Visualization Studio"}</h2>
                    <h3>{"Areas of Expertise"}</h3>
                </div>

                <div class="expertise-grid">
                    { for entries.iter().enumerate().map(|(index, item)| html! {
                        <ExpertiseCell
                            key={index}
                            {index}
                            item={item.clone()}
                            disclosed={props.disclosed == Some(index)}
                            spans_row={odd_tail && index + 1 == entries.len()}
                            on_interaction={props.on_interaction.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

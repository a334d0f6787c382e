use yew::prelude::*;

use crate::content::icons::Glyph;

#[derive(Properties, PartialEq)]
pub struct GlyphIconProps {
    pub glyph: Glyph,
    #[prop_or(20)]
    pub size: u32,
}

#[function_component(GlyphIcon)]
pub fn glyph_icon(props: &GlyphIconProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            class="glyph"
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.glyph.paths.iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

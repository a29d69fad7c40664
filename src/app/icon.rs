use leptos::prelude::*;

use crate::content::Icon;

/// Inline stroked icon. `classes` sets size and colour, defaulting to `w-4 h-4`.
#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional, into)] classes: String) -> impl IntoView {
    let classes = if classes.is_empty() {
        "w-4 h-4".to_string()
    } else {
        classes
    };
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=format!("inline-block shrink-0 {classes}")
            inner_html=icon.svg_body()
        ></svg>
    }
}

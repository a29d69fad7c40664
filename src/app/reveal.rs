use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::reveal::RevealLatch;

fn transition_class(entered: bool, hidden: &str) -> String {
    let state = if entered {
        "opacity-100 translate-y-0"
    } else {
        hidden
    };
    format!("transition-all duration-700 ease-out {state}")
}

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] classes: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let latch = RwSignal::new(RevealLatch::new());

    Effect::new(move |_| {
        let is_visible = visible.get();
        latch.maybe_update(|l| l.observe(is_visible));
    });

    view! {
        <div
            node_ref=target
            class=move || {
                let entered = latch.get().entered();
                format!("{} {classes}", transition_class(entered, "opacity-0 translate-y-10"))
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}

/// Drops its children in from above once the page has hydrated.
#[component]
pub fn RevealOnMount(#[prop(optional, into)] classes: String, children: Children) -> impl IntoView {
    let latch = RwSignal::new(RevealLatch::new());

    // effects only run in the browser
    Effect::new(move |_| {
        latch.maybe_update(|l| l.observe(true));
    });

    view! {
        <div class=move || {
            let entered = latch.get().entered();
            format!("{} {classes}", transition_class(entered, "opacity-0 -translate-y-10"))
        }>{children()}</div>
    }
}

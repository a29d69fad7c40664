use leptos::prelude::*;

use crate::content::{build_year, portfolio};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-4 bg-foreground text-muted">
            <div class="container mx-auto text-center">
                <p>
                    {format!(
                        "© {} {}. Built with Rust and Leptos.",
                        build_year(),
                        portfolio().owner,
                    )}
                </p>
            </div>
        </footer>
    }
}

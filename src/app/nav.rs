use leptos::prelude::*;

use crate::content::{portfolio, Section};

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="fixed top-0 w-full bg-background/80 backdrop-blur-sm border-b z-50">
            <div class="container mx-auto px-4 py-4">
                <div class="flex items-center justify-between">
                    <div class="font-bold text-xl text-foreground">
                        {portfolio().owner.clone()}
                    </div>
                    <div class="hidden md:flex items-center space-x-6">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.anchor()
                                        class="text-muted-foreground hover:text-foreground transition-colors"
                                    >
                                        {section.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

use leptos::prelude::*;

use crate::content::{portfolio, Section};

use super::{icon::IconGlyph, reveal::Reveal};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id={Section::Skills.id()} class="py-16 px-4 bg-muted">
            <Reveal classes="container mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12 text-foreground">
                    "Skills & Technologies"
                </h2>
                <div class="grid md:grid-cols-3 gap-6">
                    {portfolio()
                        .skills
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="rounded-lg border card-glass">
                                    <div class="flex flex-col space-y-1.5 p-6 text-center">
                                        <IconGlyph
                                            icon=group.icon
                                            classes="w-12 h-12 mx-auto mb-4 text-primary"
                                        />
                                        <h3 class="text-2xl font-semibold leading-none tracking-tight">
                                            {group.title.clone()}
                                        </h3>
                                    </div>
                                    <div class="p-6 pt-0">
                                        <div class="flex flex-wrap gap-2 justify-center">
                                            {group
                                                .tags
                                                .iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="rounded-full px-2.5 py-0.5 text-xs font-semibold bg-primary text-primary-foreground">
                                                            {tag.clone()}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{portfolio, Icon, Section};

use super::{
    contact::ContactSection,
    icon::IconGlyph,
    projects::ProjectsSection,
    reveal::{Reveal, RevealOnMount},
    skills::SkillsSection,
};

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center gap-2 rounded-md bg-primary text-primary-foreground hover:bg-primary/90 font-medium transition-colors button-premium";
pub const BUTTON_OUTLINE: &str = "inline-flex items-center justify-center gap-2 rounded-md border border-input bg-transparent hover:bg-accent hover:text-accent-foreground font-medium transition-colors button-premium";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <ProjectsSection />
        <SkillsSection />
        <ContactSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let content = portfolio();
    view! {
        <section class="pt-24 pb-16 px-4">
            <div class="container mx-auto text-center">
                <RevealOnMount classes="mb-8">
                    <div class="w-32 h-32 mx-auto mb-6 rounded-full bg-gradient-to-br from-primary to-secondary flex items-center justify-center animate-glow">
                        <IconGlyph icon=Icon::User classes="w-16 h-16 text-primary-foreground" />
                    </div>
                    <h1 class="text-4xl md:text-6xl font-bold mb-4 text-foreground">
                        "Hi, I'm " <span class="text-primary">{content.owner.clone()}</span>
                    </h1>
                    <p class="text-xl md:text-2xl text-muted-foreground mb-8 max-w-2xl mx-auto">
                        {content.tagline.clone()}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href={Section::Projects.anchor()}
                            class=format!("{BUTTON_PRIMARY} h-11 px-8")
                        >
                            <IconGlyph icon=Icon::Briefcase />
                            "View My Work"
                        </a>
                        <a
                            href={Section::Contact.anchor()}
                            class=format!("{BUTTON_OUTLINE} h-11 px-8")
                        >
                            <IconGlyph icon=Icon::Mail />
                            "Get In Touch"
                        </a>
                    </div>
                </RevealOnMount>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id={Section::About.id()} class="py-16 px-4 bg-muted">
            <Reveal classes="container mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12 text-foreground">"About Me"</h2>
                <div class="max-w-3xl mx-auto">
                    <div class="rounded-lg border card-glass">
                        <div class="p-8">
                            {portfolio()
                                .about
                                .iter()
                                .map(|para| {
                                    view! {
                                        <p class="text-lg text-card-foreground leading-relaxed mb-6 last:mb-0">
                                            {para.clone()}
                                        </p>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

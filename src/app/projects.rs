use leptos::{either::Either, prelude::*};

use crate::content::{portfolio, Icon, Project, Section};

use super::{
    homepage::{BUTTON_OUTLINE, BUTTON_PRIMARY},
    icon::IconGlyph,
    reveal::Reveal,
};

const STAGGER_MS: u32 = 100;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id={Section::Projects.id()} class="py-16 px-4">
            <div class="container mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12 text-foreground">"My Projects"</h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {portfolio()
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal delay_ms={(i as u32 + 1) * STAGGER_MS}>
                                    <ProjectCard project=project.clone() />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="group rounded-lg border hover:shadow-xl transition-shadow card-glass">
            <div class="flex flex-col space-y-1.5 p-6">
                <div class=format!(
                    "w-full h-48 bg-gradient-to-br {} rounded-lg mb-4 flex items-center justify-center",
                    project.banner,
                )>
                    <IconGlyph icon=project.icon classes=format!("w-12 h-12 {}", project.tint) />
                </div>
                <h3 class="text-2xl font-semibold leading-none tracking-tight">{project.title}</h3>
                <p class="text-sm text-muted-foreground">{project.description}</p>
            </div>
            <div class="p-6 pt-0">
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="rounded-full px-2.5 py-0.5 text-xs font-semibold bg-secondary text-secondary-foreground">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-2">
                    <LinkButton
                        href=project.code_url
                        icon=Icon::Github
                        label="Code"
                        classes=BUTTON_OUTLINE
                    />
                    <LinkButton
                        href=project.demo_url
                        icon=Icon::ExternalLink
                        label="Live Demo"
                        classes=BUTTON_PRIMARY
                    />
                </div>
            </div>
        </div>
    }
}

/// A small button that becomes a link when there is somewhere to go.
#[component]
pub fn LinkButton(
    href: Option<String>,
    icon: Icon,
    #[prop(into)] label: String,
    classes: &'static str,
) -> impl IntoView {
    let class = format!("{classes} h-9 px-3 text-sm");
    match href {
        Some(href) => Either::Left(view! {
            <a href=href target="_blank" rel="noopener noreferrer" class=class>
                <IconGlyph icon />
                {label}
            </a>
        }),
        None => Either::Right(view! {
            <button type="button" class=class>
                <IconGlyph icon />
                {label}
            </button>
        }),
    }
}

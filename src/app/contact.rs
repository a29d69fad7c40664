use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
};

use crate::{
    contact::{ContactFormController, Field},
    content::{portfolio, Icon, Section},
};

use super::{
    homepage::{BUTTON_OUTLINE, BUTTON_PRIMARY},
    icon::IconGlyph,
    projects::LinkButton,
    reveal::Reveal,
    toaster::Toaster,
};

type Form = RwSignal<ContactFormController<Toaster>>;

const INPUT_CLASS: &str = "flex w-full rounded-md border border-input bg-background px-3 py-2 text-sm placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring";

#[component]
pub fn ContactSection() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let form: Form = RwSignal::new(ContactFormController::new(toaster));
    let content = portfolio();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            if let Err(e) = f.submit_checked() {
                log::warn!("contact form not submitted: {e}");
            }
        });
    };

    view! {
        <section id={Section::Contact.id()} class="py-16 px-4 bg-sidebar">
            <Reveal classes="container mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12 text-sidebar-foreground">
                    "Get In Touch"
                </h2>
                <div class="max-w-2xl mx-auto">
                    <div class="rounded-lg border card-glass">
                        <div class="flex flex-col space-y-1.5 p-6">
                            <h3 class="text-2xl font-semibold leading-none tracking-tight">
                                {content.contact.title.clone()}
                            </h3>
                            <p class="text-sm text-muted-foreground">
                                {content.contact.description.clone()}
                            </p>
                        </div>
                        <div class="p-6 pt-0">
                            <form on:submit=on_submit class="space-y-4">
                                {Field::ALL
                                    .into_iter()
                                    .map(|field| view! { <div><FormInput form field /></div> })
                                    .collect_view()}
                                <button
                                    type="submit"
                                    class=format!("{BUTTON_PRIMARY} w-full h-10 px-4 py-2")
                                >
                                    <IconGlyph icon=Icon::Send />
                                    "Send Message"
                                </button>
                            </form>
                            <div class="mt-8 pt-8 border-t">
                                <div class="flex justify-center space-x-6">
                                    {content
                                        .socials
                                        .iter()
                                        .map(|link| {
                                            view! {
                                                <LinkButton
                                                    href=link.href.clone()
                                                    icon=link.icon
                                                    label=link.label.clone()
                                                    classes=BUTTON_OUTLINE
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

/// Controlled input bound to one field of the form.
#[component]
fn FormInput(form: Form, field: Field) -> impl IntoView {
    let value = move || form.with(|f| f.state().get(field).to_string());
    let on_input = move |ev: Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.update_field(field, value));
    };

    match field {
        Field::Message => Either::Left(view! {
            <textarea
                name=field.as_str()
                placeholder=field.placeholder()
                rows=4
                required
                prop:value=value
                on:input=on_input
                class=format!("{INPUT_CLASS} min-h-[80px]")
            />
        }),
        Field::Name | Field::Email => Either::Right(view! {
            <input
                name=field.as_str()
                type=if field == Field::Email { "email" } else { "text" }
                placeholder=field.placeholder()
                required
                prop:value=value
                on:input=on_input
                class=format!("{INPUT_CLASS} h-10")
            />
        }),
    }
}

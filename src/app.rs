mod contact;
mod footer;
mod homepage;
mod icon;
mod nav;
mod projects;
mod reveal;
mod skills;
mod toaster;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{portfolio, FAVICON_HREF};

use footer::Footer;
use homepage::HomePage;
use nav::Nav;
use toaster::{ToastViewport, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href=FAVICON_HREF />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    Toaster::provide();

    let owner = portfolio().owner.clone();

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Router>
            <div class="min-h-screen bg-background relative overflow-x-hidden">
                <div class="bg-animated-gradient" />
                <Nav />
                <main>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
            <ToastViewport />
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
        res.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <div class="pt-32 pb-16 px-4 text-center">
            <h1 class="text-3xl font-bold mb-4 text-foreground">"Page not found."</h1>
            <a href="/" class="text-primary hover:underline">
                "Back to the home page"
            </a>
        </div>
    }
}

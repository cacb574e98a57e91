mod about;
mod chatbot;
mod client;
mod contact;
mod experiences;
mod homepage;
mod navigation;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use chatbot::Chatbot;
use contact::ContactPage;
use experiences::ExperiencesPage;
use homepage::HomePage;
use navigation::Navigation;
use projects::ProjectsPage;

use crate::content::{FAVICON, OWNER_NAME};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta
                    name="description"
                    content="Portfolio of Mathéo Gonnet, engineering student in Data & AI at ECE Paris."
                />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-cupertino-600 font-sans text-cupertino-50 antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />

        <Router>
            <Navigation />
            <main class="relative min-h-screen overflow-hidden">
                <Backdrop />
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/experiences") view=ExperiencesPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Chatbot />
        </Router>
    }
}

#[component]
fn Backdrop() -> impl IntoView {
    view! {
        <div class="pointer-events-none absolute inset-0 z-0">
            <div class="absolute -left-40 -top-40 h-80 w-80 rounded-full bg-accent-blue/20 blur-[100px]" />
            <div class="absolute -right-40 top-1/3 h-80 w-80 rounded-full bg-accent-purple/20 blur-[100px]" />
            <div class="absolute bottom-0 left-1/3 h-80 w-80 rounded-full bg-accent-indigo/20 blur-[100px]" />
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page not found" />
        <div class="container relative z-10 mx-auto flex min-h-[calc(100vh-80px)] flex-col items-center justify-center px-4 text-center">
            <h1 class="mb-4 text-5xl font-bold text-cupertino-50">"404"</h1>
            <p class="mb-8 text-lg text-cupertino-200">"This page doesn't exist."</p>
            <A href="/" attr:class="rounded-full bg-accent-blue px-6 py-2 text-cupertino-50 hover:bg-accent-blue/90">
                "Back home"
            </A>
        </div>
    }
}

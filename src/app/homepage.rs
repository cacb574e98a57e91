use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{CONSOLE_LINES, OWNER_FIRST_NAME};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="container relative z-10 mx-auto flex min-h-[calc(100vh-80px)] flex-col items-center justify-center px-4">
            <div class="text-center section-content">
                <h1 class="mb-8 bg-gradient-to-b from-cupertino-50 to-cupertino-200 bg-clip-text text-5xl font-bold tracking-tight text-transparent md:text-6xl">
                    {format!("Hi! I'm {OWNER_FIRST_NAME}")}
                </h1>
                <div class="mx-auto max-w-lg">
                    <Console />
                </div>
            </div>
        </div>
    }
}

#[component]
fn Console() -> impl IntoView {
    view! {
        <div class="glass-card overflow-hidden rounded-lg p-4">
            <div class="flex items-center space-x-2 border-b border-cupertino-500/30 pb-2">
                <div class="h-3 w-3 rounded-full bg-red-500/50" />
                <div class="h-3 w-3 rounded-full bg-yellow-500/50" />
                <div class="h-3 w-3 rounded-full bg-green-500/50" />
                <span class="ml-2 text-sm text-cupertino-300">"Terminal"</span>
            </div>
            <div class="mt-4 space-y-2 font-mono text-sm text-left">
                {CONSOLE_LINES
                    .iter()
                    .enumerate()
                    .map(|(i, line)| {
                        // each line fades in 0.4s after the previous one
                        let delay = format!("animation-delay: {}ms", 800 + i * 400);
                        view! {
                            <div class="console-line flex items-center space-x-2" style=delay>
                                <span class="text-accent-purple">">"</span>
                                <span class="text-cupertino-200">{*line}</span>
                            </div>
                        }
                    })
                    .collect_view()}
                <div class="mt-1 h-4 w-2 animate-pulse bg-accent-purple" />
            </div>
        </div>
    }
}

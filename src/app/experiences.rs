use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{Experience, EXPERIENCES};

#[component]
pub fn ExperiencesPage() -> impl IntoView {
    view! {
        <Title text="Experiences" />
        <div class="container relative z-10 mx-auto px-4 pt-32 pb-16">
            <div class="mb-8 section-content">
                <div class="glass-card overflow-hidden p-8">
                    <div class="flex items-center space-x-4">
                        <div class="flex h-12 w-12 animate-pulse items-center justify-center rounded-full bg-accent-purple/20 text-accent-purple">
                            "•••"
                        </div>
                        <div>
                            <h2 class="text-2xl font-bold text-cupertino-50">
                                "🚀 Next Experience is Loading..."
                            </h2>
                            <div class="mt-2 h-1 w-32 overflow-hidden rounded-full bg-cupertino-500/40">
                                <div class="loading-bar h-full w-1/2 bg-accent-purple" />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <div class="space-y-6 section-content">
                {EXPERIENCES
                    .iter()
                    .map(|experience| view! { <ExperienceCard experience=*experience /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ExperienceCard(experience: Experience) -> impl IntoView {
    view! {
        <div class="glass-card overflow-hidden p-8 transition-transform duration-200 hover:scale-[1.02]">
            <div class="flex items-start space-x-4">
                <div class="flex h-12 w-12 items-center justify-center rounded-full bg-accent-blue/20 text-2xl">
                    {experience.icon}
                </div>
                <div class="flex-1">
                    <div class="flex items-center justify-between">
                        <h3 class="text-xl font-bold text-cupertino-50">{experience.title}</h3>
                        <span class="rounded-full bg-accent-purple/10 px-3 py-1 text-sm text-accent-purple">
                            {experience.year}
                        </span>
                    </div>
                    <p class="mt-1 text-lg text-accent-blue">{experience.company}</p>
                    <ul class="mt-4 list-inside list-disc space-y-2 text-cupertino-200">
                        {experience
                            .description
                            .iter()
                            .map(|item| view! { <li>{*item}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}

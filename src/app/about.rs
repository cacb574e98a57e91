use chrono::Utc;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{
    age_on, EDUCATION, INTERESTS, LANGUAGES, OWNER_NAME, SOFT_SKILLS, TECHNICAL_SKILLS,
};

#[component]
pub fn AboutPage() -> impl IntoView {
    let age = age_on(Utc::now().date_naive());

    view! {
        <Title text="About" />
        <div class="container relative z-10 mx-auto px-4 pt-32 pb-16">
            <div class="grid gap-8 md:grid-cols-2">
                <div class="space-y-8 section-content">
                    <div class="relative p-8">
                        <h1 class="mb-6 text-4xl font-bold tracking-tight text-cupertino-50">
                            "About Me"
                        </h1>
                        <p class="text-lg text-cupertino-200">
                            {format!(
                                "Hi! 👋 I'm {OWNER_NAME}, a {age}-year-old student pursuing a Master's in Data & Artificial Intelligence at ECE Paris. Passionate about data science, web development, and AI, I'm constantly seeking to learn and take on new challenges. 🚀",
                            )}
                        </p>
                        <p class="mt-4 text-sm text-cupertino-300">{format!("Languages: {LANGUAGES}")}</p>
                    </div>
                    <div class="glass-card p-8">
                        <h2 class="mb-6 text-2xl font-bold text-cupertino-50">"Soft Skills"</h2>
                        <div class="flex flex-wrap gap-4">
                            {SOFT_SKILLS
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <div class="group flex items-center rounded-lg bg-cupertino-500/40 px-4 py-2 transition-transform hover:scale-105">
                                            <span class="mr-2 text-accent-blue">"💡"</span>
                                            <span class="text-cupertino-100">{*skill}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="glass-card p-8">
                        <h2 class="mb-6 text-2xl font-bold text-cupertino-50">"Technical Skills"</h2>
                        <div class="flex flex-wrap gap-2">
                            {TECHNICAL_SKILLS
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <span class="rounded-full bg-accent-blue/10 px-3 py-1 text-sm text-accent-blue hover:text-blue-400">
                                            {*skill}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="space-y-8 section-content">
                    <Education />
                    <Interests />
                </div>
            </div>
        </div>
    }
}

#[component]
fn Education() -> impl IntoView {
    view! {
        <div class="glass-card p-8">
            <h2 class="mb-6 text-2xl font-bold text-cupertino-50">"Education"</h2>
            <div class="relative">
                <div class="absolute left-3 top-0 h-full w-0.5 bg-gradient-to-b from-accent-blue via-blue-500 to-blue-400" />
                <div class="space-y-8">
                    {EDUCATION
                        .iter()
                        .map(|edu| {
                            view! {
                                <a
                                    href=edu.link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="group relative flex items-start pl-10"
                                >
                                    <div class="absolute left-[0.3rem] top-[1.125rem] h-4 w-4 rounded-full bg-accent-blue transition-colors duration-200 group-hover:bg-blue-400" />
                                    <div class="w-full rounded-lg bg-cupertino-500/40 p-4 transition-all duration-200 hover:bg-cupertino-500/60">
                                        <h3 class="font-semibold text-accent-blue">{edu.school}</h3>
                                        <p class="text-sm text-cupertino-200">{edu.period}</p>
                                        <p class="mt-1 text-cupertino-100">{edu.degree}</p>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn Interests() -> impl IntoView {
    view! {
        <div class="glass-card p-8">
            <h2 class="mb-6 text-2xl font-bold text-cupertino-50">"Interests"</h2>
            <div class="grid gap-4">
                {INTERESTS
                    .iter()
                    .map(|interest| {
                        view! {
                            <div class="group rounded-lg bg-cupertino-500/40 p-4 transition-transform hover:scale-[1.01]">
                                <div class="flex items-center space-x-3">
                                    <div class="flex h-10 w-10 items-center justify-center rounded-full bg-cupertino-500/40 text-xl">
                                        {interest.icon}
                                    </div>
                                    <div>
                                        <h3 class="font-semibold text-accent-blue">{interest.name}</h3>
                                        <p class="text-sm text-cupertino-200">{interest.details}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

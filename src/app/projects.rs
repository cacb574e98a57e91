use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    content::{Project, PROJECTS},
    projects::{categories, filter_projects, technologies, years, ProjectFilters},
};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let filters = RwSignal::new(ProjectFilters::default());
    let visible = Memo::new(move |_| {
        filters.with(|f| {
            search.with(|s| {
                filter_projects(PROJECTS, s, f)
                    .into_iter()
                    .copied()
                    .collect::<Vec<_>>()
            })
        })
    });

    view! {
        <Title text="Projects" />
        <div class="container relative z-10 mx-auto px-4 pt-32 pb-16">
            <h1 class="mb-12 text-center text-4xl font-bold text-cupertino-50 md:text-5xl section-content">
                "My Projects"
            </h1>
            <div class="glass-card mb-8 space-y-4 p-6 section-content">
                <label for="project_search" class="sr-only">
                    "Search projects"
                </label>
                <input
                    id="project_search"
                    type="search"
                    class="w-full rounded-full bg-cupertino-500/40 px-4 py-2 text-cupertino-50 placeholder-cupertino-300 outline-none ring-accent-blue focus:ring-2"
                    placeholder="Search by name, description or technology..."
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <FacetRow label="Category">
                    {categories(PROJECTS)
                        .into_iter()
                        .map(|category| {
                            view! {
                                <Chip
                                    label=category.to_string()
                                    active=Signal::derive(move || {
                                        filters.with(|f| f.categories.contains(category))
                                    })
                                    on_toggle=move || filters.update(|f| f.toggle_category(category))
                                />
                            }
                        })
                        .collect_view()}
                </FacetRow>
                <FacetRow label="Technology">
                    {technologies(PROJECTS)
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <Chip
                                    label=tech.to_string()
                                    active=Signal::derive(move || {
                                        filters.with(|f| f.technologies.contains(tech))
                                    })
                                    on_toggle=move || filters.update(|f| f.toggle_technology(tech))
                                />
                            }
                        })
                        .collect_view()}
                </FacetRow>
                <FacetRow label="Year">
                    {years(PROJECTS)
                        .into_iter()
                        .map(|year| {
                            view! {
                                <Chip
                                    label=year.to_string()
                                    active=Signal::derive(move || {
                                        filters.with(|f| f.years.contains(&year))
                                    })
                                    on_toggle=move || filters.update(|f| f.toggle_year(year))
                                />
                            }
                        })
                        .collect_view()}
                </FacetRow>
                <div class="flex items-center justify-between text-sm text-cupertino-300">
                    <span>
                        {move || {
                            let n = visible.with(Vec::len);
                            format!("{n} project{}", if n == 1 { "" } else { "s" })
                        }}
                    </span>
                    <Show when=move || !filters.with(ProjectFilters::is_empty)>
                        <button
                            class="text-accent-blue hover:underline"
                            on:click=move |_| filters.update(ProjectFilters::clear)
                        >
                            {move || format!("Clear filters ({})", filters.with(ProjectFilters::active_count))}
                        </button>
                    </Show>
                </div>
            </div>
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| {
                    view! {
                        <p class="text-center text-lg text-cupertino-300">
                            "No projects match these filters."
                        </p>
                    }
                }
            >
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    <For
                        each=move || visible.get()
                        key=|p| p.name
                        children=move |project| view! { <ProjectCard project=project /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn FacetRow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center gap-2">
            <span class="mr-2 text-sm font-semibold text-accent-purple">{label}</span>
            {children()}
        </div>
    }
}

#[component]
fn Chip(
    label: String,
    #[prop(into)] active: Signal<bool>,
    on_toggle: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                if active.get() {
                    "rounded-full bg-accent-blue px-3 py-1 text-sm text-cupertino-50 transition-colors"
                } else {
                    "rounded-full bg-accent-blue/10 px-3 py-1 text-sm text-accent-blue transition-colors hover:bg-accent-blue/20"
                }
            }
            aria-pressed=move || active.get().to_string()
            on:click=move |_| on_toggle()
        >
            {label}
        </button>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="group relative transition-transform duration-200 hover:scale-[1.02]">
            <div class="glass-card flex h-full flex-col overflow-hidden p-6">
                <div class="mb-4 flex items-center justify-between">
                    <div class="flex items-center space-x-3">
                        <span class="text-3xl">{project.icon}</span>
                        <h2 class="text-xl font-bold text-cupertino-50">{project.name}</h2>
                    </div>
                    {project
                        .github_link
                        .map(|link| {
                            view! {
                                <a
                                    href=link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="rounded-full bg-cupertino-500/40 p-2 text-cupertino-200 transition-colors hover:bg-cupertino-500/60"
                                    aria-label=format!("{} on GitHub", project.name)
                                >
                                    <i class="devicon-github-plain" />
                                </a>
                            }
                        })}
                </div>
                <div class="mb-3 flex gap-2 text-xs">
                    <span class="rounded-full bg-accent-purple/10 px-2 py-0.5 text-accent-purple">
                        {project.category}
                    </span>
                    <span class="rounded-full bg-cupertino-500/40 px-2 py-0.5 text-cupertino-200">
                        {project.year}
                    </span>
                </div>
                <p class="mb-4 text-cupertino-200">{project.description}</p>
                <div class="mt-auto">
                    <h3 class="mb-2 font-semibold text-accent-purple">"Technologies"</h3>
                    <p class="text-sm text-cupertino-300">{project.technologies}</p>
                </div>
            </div>
        </div>
    }
}

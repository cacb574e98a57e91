use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};
use leptos_use::use_window_scroll;

use crate::{
    content::{LOGO, OWNER_NAME},
    nav::{MenuState, NavItem, ScrollState, NAV_ITEMS},
};

#[component]
pub fn Navigation() -> impl IntoView {
    let pathname = use_location().pathname;
    let (menu, set_menu) = signal(MenuState::Closed);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| ScrollState::from_offset(scroll_y.get()));

    let close_menu = move || set_menu.set(MenuState::Closed);

    view! {
        <nav class=move || {
            let height = match scrolled.get() {
                ScrollState::Scrolled => "h-[70px]",
                ScrollState::Unscrolled => "h-[80px]",
            };
            format!("fixed top-0 z-50 w-full transition-all duration-300 {height}")
        }>
            <div class=move || {
                let bg = match scrolled.get() {
                    ScrollState::Scrolled => "bg-cupertino-600/80",
                    ScrollState::Unscrolled => "bg-transparent",
                };
                format!("relative h-full glass-effect backdrop-blur-2xl transition-all duration-300 {bg}")
            }>
                <div class="absolute inset-x-0 top-0 h-[1px] bg-gradient-to-r from-transparent via-cupertino-200/20 to-transparent" />
                <div class="container mx-auto h-full px-4">
                    <div class="flex h-full items-center justify-between">
                        <A href="/" attr:class="relative transition-transform duration-200 hover:scale-105">
                            <img
                                src=LOGO
                                alt=format!("{OWNER_NAME} Logo")
                                width="240"
                                height="100"
                                class="object-contain h-14 w-auto"
                            />
                        </A>
                        <ul class="hidden md:flex space-x-6">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li class="relative">
                                            <DesktopLink item=*item pathname=pathname />
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <button
                            class=move || {
                                let active = if menu.get().is_open() { "bg-accent-blue/20" } else { "" };
                                format!("glass-button p-2 transition-all duration-300 md:hidden {active}")
                            }
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu.update(|m| *m = m.toggled())
                        >
                            <div class="relative h-5 w-5">
                                <span class=move || {
                                    let open = if menu.get().is_open() { "rotate-45 translate-y-2" } else { "" };
                                    format!("absolute left-0 top-0 h-0.5 w-5 bg-cupertino-50 transition-all duration-300 {open}")
                                } />
                                <span class=move || {
                                    let open = if menu.get().is_open() { "opacity-0" } else { "" };
                                    format!("absolute left-0 top-2 h-0.5 w-5 bg-cupertino-50 transition-all duration-300 {open}")
                                } />
                                <span class=move || {
                                    let open = if menu.get().is_open() { "-rotate-45 -translate-y-2" } else { "" };
                                    format!("absolute left-0 top-4 h-0.5 w-5 bg-cupertino-50 transition-all duration-300 {open}")
                                } />
                            </div>
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || menu.get().is_open()>
                <div class="absolute left-0 right-0 top-[56px] glass-effect backdrop-blur-2xl md:hidden">
                    <ul class="container mx-auto px-4 py-4 space-y-2">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let item = *item;
                                view! {
                                    <li class="transform transition-all duration-200 hover:translate-x-2">
                                        <A
                                            href=item.path
                                            on:click=move |_| close_menu()
                                            attr:class=move || {
                                                if item.is_active(&pathname.get()) {
                                                    "block rounded-lg px-4 py-2 text-sm bg-accent-blue/20 text-accent-blue"
                                                } else {
                                                    "block rounded-lg px-4 py-2 text-sm text-cupertino-200 hover:bg-cupertino-500/40 hover:text-cupertino-50"
                                                }
                                            }
                                        >
                                            {item.name}
                                        </A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </Show>
        </nav>
        <Show when=move || menu.get().is_open()>
            <div
                class="fixed inset-0 z-40 bg-black/20 backdrop-blur-sm md:hidden"
                on:click=move |_| close_menu()
            />
        </Show>
    }
}

#[component]
fn DesktopLink(item: NavItem, pathname: Memo<String>) -> impl IntoView {
    let active = move || item.is_active(&pathname.get());
    view! {
        <A
            href=item.path
            attr:class=move || {
                if active() {
                    "group relative px-3 py-2 text-sm transition-all duration-300 text-accent-blue"
                } else {
                    "group relative px-3 py-2 text-sm transition-all duration-300 text-cupertino-200 hover:text-cupertino-50"
                }
            }
        >
            <span class="relative z-10">{item.name}</span>
            <Show when=active>
                <div class="absolute -bottom-1 left-0 h-0.5 w-full bg-gradient-to-r from-accent-blue to-accent-purple" />
            </Show>
        </A>
    }
}

use std::collections::BTreeMap;

use leptos::{prelude::*, task::spawn_local};
use leptos_meta::Title;

use super::client::send_contact;
use crate::{
    contact::{ContactField, ContactFormData},
    content::{
        GITHUB_HANDLE, GITHUB_URL, LINKEDIN_HANDLE, LINKEDIN_URL, OWNER_EMAIL, RESUME_EN,
        RESUME_FR,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed,
}

type FieldErrors = BTreeMap<ContactField, String>;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <div class="container relative z-10 mx-auto px-4 pt-32 pb-16">
            <div class="grid gap-8 md:grid-cols-2">
                <div class="section-content">
                    <ContactInfo />
                </div>
                <div class="section-content">
                    <ContactForm />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="glass-card p-8">
            <h1 class="mb-6 text-4xl font-bold tracking-tight text-cupertino-50">"Get in Touch"</h1>
            <p class="mb-8 text-lg text-cupertino-200">
                "Feel free to reach out! I'm always open to discussing new projects, opportunities, or just having a chat."
            </p>
            <div class="space-y-4">
                <ContactLink
                    href=format!("mailto:{OWNER_EMAIL}")
                    icon="✉️"
                    label="Email"
                    value=OWNER_EMAIL
                    external=false
                />
                <ContactLink
                    href=GITHUB_URL.to_string()
                    icon="🐙"
                    label="GitHub"
                    value=GITHUB_HANDLE
                    external=true
                />
                <ContactLink
                    href=LINKEDIN_URL.to_string()
                    icon="💼"
                    label="LinkedIn"
                    value=LINKEDIN_HANDLE
                    external=true
                />
                <div class="rounded-lg bg-cupertino-500/40 p-4">
                    <div class="mb-2 flex items-center space-x-2">
                        <span class="text-accent-indigo">"📄"</span>
                        <h3 class="text-lg font-semibold text-cupertino-50">"Resume"</h3>
                    </div>
                    <div class="grid gap-2 sm:grid-cols-2">
                        <ResumeLink href=RESUME_FR code="FR" title="Version Française" action="Voir le CV" />
                        <ResumeLink href=RESUME_EN code="EN" title="English Version" action="View Resume" />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactLink(
    href: String,
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    external: bool,
) -> impl IntoView {
    view! {
        <a
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class="flex items-center space-x-4 rounded-lg bg-cupertino-500/40 p-4 transition-all hover:bg-cupertino-500/60"
        >
            <div class="flex h-12 w-12 items-center justify-center rounded-full bg-accent-blue/20 text-xl">
                {icon}
            </div>
            <div>
                <p class="text-sm text-cupertino-200">{label}</p>
                <p class="text-cupertino-50">{value}</p>
            </div>
        </a>
    }
}

#[component]
fn ResumeLink(
    href: &'static str,
    code: &'static str,
    title: &'static str,
    action: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center space-x-3 rounded-lg bg-cupertino-500/40 p-3 transition-all hover:bg-cupertino-500/60"
        >
            <div class="flex h-10 w-10 items-center justify-center rounded-full bg-accent-blue/20">
                <span class="text-sm font-bold text-accent-blue">{code}</span>
            </div>
            <div>
                <p class="text-sm text-cupertino-200">{title}</p>
                <p class="text-xs text-cupertino-300">{action}</p>
            </div>
        </a>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormData::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (status, set_status) = signal(SubmitStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == SubmitStatus::Sending {
            return;
        }
        let data = form.get_untracked();
        if let Err(failed) = data.validate() {
            errors.set(
                failed
                    .into_iter()
                    .map(|e| (e.field(), data.field_message(e)))
                    .collect(),
            );
            return;
        }
        errors.set(FieldErrors::new());
        set_status.set(SubmitStatus::Sending);
        spawn_local(async move {
            match send_contact(&data).await {
                Ok(sent) => {
                    log::debug!("contact message accepted as {}", sent.id);
                    form.set(ContactFormData::default());
                    set_status.set(SubmitStatus::Sent);
                }
                Err(err) => {
                    log::error!("Contact form error: {err}");
                    set_status.set(SubmitStatus::Failed);
                }
            }
        });
    };

    view! {
        <div class="glass-card p-8">
            <form class="space-y-6" on:submit=on_submit novalidate=true>
                <FormField field=ContactField::Name label="Name" placeholder="Your name" form=form errors=errors />
                <FormField
                    field=ContactField::Email
                    label="Email"
                    placeholder="your@email.com"
                    form=form
                    errors=errors
                />
                <FormField
                    field=ContactField::Message
                    label="Message"
                    placeholder="Your message..."
                    form=form
                    errors=errors
                />
                <button
                    type="submit"
                    disabled=move || status.get() == SubmitStatus::Sending
                    class="group relative w-full overflow-hidden rounded-lg bg-gradient-to-r from-accent-blue to-accent-purple p-[1px] disabled:opacity-60"
                >
                    <span class="block rounded-lg bg-cupertino-600 px-8 py-2 text-center font-medium transition-all group-hover:bg-transparent">
                        {move || {
                            if status.get() == SubmitStatus::Sending { "Sending..." } else { "Send Message" }
                        }}
                    </span>
                </button>
                {move || match status.get() {
                    SubmitStatus::Sent => {
                        Some(
                            view! {
                                <div class="flex items-center space-x-2 rounded-lg bg-green-500/10 p-3 text-green-500">
                                    <span>"✓"</span>
                                    <span>"Message sent successfully! I'll get back to you soon."</span>
                                </div>
                            }
                                .into_any(),
                        )
                    }
                    SubmitStatus::Failed => {
                        Some(
                            view! {
                                <div class="flex items-center space-x-2 rounded-lg bg-red-500/10 p-3 text-red-500">
                                    <span>"!"</span>
                                    <span>"Oops! Something went wrong. Please try again."</span>
                                </div>
                            }
                                .into_any(),
                        )
                    }
                    SubmitStatus::Idle | SubmitStatus::Sending => None,
                }}
            </form>
        </div>
    }
}

#[component]
fn FormField(
    field: ContactField,
    label: &'static str,
    placeholder: &'static str,
    form: RwSignal<ContactFormData>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let id = label.to_lowercase();
    let error = move || errors.with(|e| e.get(&field).cloned());
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        form.update(|f| *f.value_mut(field) = text);
        // typing clears that field's error
        if errors.with_untracked(|e| e.contains_key(&field)) {
            errors.update(|e| {
                e.remove(&field);
            });
        }
    };
    let class = move || {
        let ring = if error().is_some() { "ring-2 ring-red-500" } else { "ring-accent-blue" };
        format!(
            "w-full rounded-lg bg-cupertino-500/40 px-4 py-2 text-cupertino-50 outline-none transition-all focus:bg-cupertino-500/60 focus:ring-2 {ring}",
        )
    };

    let input = if field == ContactField::Message {
        view! {
            <textarea
                id=id.clone()
                name=id.clone()
                rows="4"
                class=class
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            />
        }
            .into_any()
    } else {
        let kind = if field == ContactField::Email { "email" } else { "text" };
        view! {
            <input
                type=kind
                id=id.clone()
                name=id.clone()
                class=class
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            />
        }
            .into_any()
    };

    view! {
        <div>
            <label for=id class="mb-2 block text-sm text-cupertino-200">
                {label}
            </label>
            {input}
            {move || {
                error()
                    .map(|message| {
                        view! {
                            <p class="mt-2 flex items-center space-x-1 text-sm text-red-500">
                                <span>"⚠"</span>
                                <span>{message}</span>
                            </p>
                        }
                    })
            }}
        </div>
    }
}

use leptos::{html, prelude::*, task::spawn_local};

use super::client::ask_chatbot;
use crate::chat::{format_reply, ChatMessage, Segment, Transcript};

/// Floating "ask me anything" widget, mounted once for the whole app.
#[component]
pub fn Chatbot() -> impl IntoView {
    let (open, set_open) = signal(false);
    let transcript = RwSignal::new(Transcript::new());
    let (draft, set_draft) = signal(String::new());
    let end_ref = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        transcript.track();
        if let Some(el) = end_ref.get() {
            el.scroll_into_view();
        }
    });

    let pending = move || transcript.with(Transcript::is_pending);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        let Some(request) = transcript.try_update(|t| t.submit(&text)).flatten() else {
            return;
        };
        set_draft.set(String::new());
        spawn_local(async move {
            let result = ask_chatbot(&request).await;
            if let Err(err) = &result {
                log::error!("Chat error: {err}");
            }
            transcript.update(|t| t.resolve(result));
        });
    };

    view! {
        <div class="fixed bottom-4 right-4 z-50">
            <Show when=move || open.get()>
                <div class="absolute bottom-20 right-0 mb-2 w-[350px] overflow-hidden rounded-2xl bg-cupertino-500/40 backdrop-blur-md">
                    <div class="flex items-center justify-between border-b border-cupertino-500/30 p-4">
                        <div class="flex items-center space-x-2">
                            <span class="text-2xl text-accent-blue">"🤖"</span>
                            <h2 class="text-xl text-cupertino-50">"Ask Me Anything!"</h2>
                        </div>
                        <button
                            class="rounded-full p-1 text-cupertino-200 transition-colors hover:bg-cupertino-500/40 hover:text-cupertino-50"
                            aria-label="Close chat"
                            on:click=move |_| set_open.set(false)
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="h-[400px] overflow-y-auto p-4">
                        <div class="space-y-4">
                            <For
                                each=move || transcript.with(|t| t.messages().to_vec())
                                key=|m| (m.id, m.is_typing)
                                children=move |message| view! { <Bubble message=message /> }
                            />
                            <div node_ref=end_ref />
                        </div>
                    </div>
                    <form class="border-t border-cupertino-500/30 p-4" on:submit=on_submit>
                        <div class="flex space-x-2">
                            <input
                                type="text"
                                class="flex-1 rounded-full bg-cupertino-500/40 px-4 py-2 text-cupertino-50 placeholder-cupertino-300 outline-none ring-accent-blue transition-shadow focus:ring-2 disabled:opacity-50"
                                placeholder=move || {
                                    if pending() { "Waiting for response..." } else { "Type your message..." }
                                }
                                disabled=pending
                                prop:value=draft
                                on:input=move |ev| set_draft.set(event_target_value(&ev))
                            />
                            <button
                                type="submit"
                                class="flex h-10 w-10 items-center justify-center rounded-full bg-accent-blue text-cupertino-50 transition-transform hover:scale-105 disabled:opacity-50"
                                aria-label="Send"
                                disabled=move || pending() || draft.with(|d| d.trim().is_empty())
                            >
                                "➤"
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
            <button
                class="relative flex h-14 w-14 items-center justify-center rounded-full bg-accent-blue text-cupertino-50 shadow-lg transition-colors hover:bg-accent-blue/90"
                aria-label="Open chat"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span class="text-2xl">"🤖"</span>
                <Show when=move || !open.get()>
                    <div class="absolute -right-1 -top-1 h-3 w-3 animate-pulse rounded-full bg-blue-400" />
                </Show>
            </button>
        </div>
    }
}

#[component]
fn Bubble(message: ChatMessage) -> impl IntoView {
    let row = if message.is_bot { "flex justify-start" } else { "flex justify-end" };
    let style = match (message.is_bot, message.is_error) {
        (true, true) => "bg-red-500/20 text-red-200",
        (true, false) => "bg-cupertino-500/40 text-cupertino-200",
        (false, _) => "bg-accent-blue text-cupertino-50",
    };
    let body = if message.is_typing {
        view! { <TypingIndicator /> }.into_any()
    } else if message.is_bot {
        format_reply(&message.text)
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(text) => text.into_any(),
                Segment::Bold(text) => {
                    view! { <span class="font-bold text-accent-blue">{text}</span> }.into_any()
                }
                Segment::Html(html) => view! { <span inner_html=html /> }.into_any(),
            })
            .collect_view()
            .into_any()
    } else {
        message.text.into_any()
    };

    view! {
        <div class=row>
            <div class=format!("max-w-[80%] rounded-2xl px-4 py-2 {style}")>{body}</div>
        </div>
    }
}

#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex space-x-2 p-2">
            <div class="h-2 w-2 animate-bounce rounded-full bg-accent-blue/40" />
            <div class="h-2 w-2 animate-bounce rounded-full bg-accent-blue/40 [animation-delay:0.2s]" />
            <div class="h-2 w-2 animate-bounce rounded-full bg-accent-blue/40 [animation-delay:0.4s]" />
        </div>
    }
}

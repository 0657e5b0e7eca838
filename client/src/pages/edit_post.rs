//! Edit page for an existing post, prefilled from the server.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::pages::compose::validate_compose_input;

#[component]
pub fn EditPostPage() -> impl IntoView {
    let params = use_params_map();
    let post_id = move || params.read().get("id").unwrap_or_default();

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let loaded = RwSignal::new(false);

    // Prefill the form from the current post.
    Effect::new(move || {
        let id = post_id();
        if id.is_empty() || loaded.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_post(&id).await {
                Some(post) => {
                    title.set(post.title);
                    content.set(post.content);
                    loaded.set(true);
                }
                None => info.set("Post not found.".to_owned()),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(msg) = validate_compose_input(&title.get(), &content.get()) {
            info.set(msg.to_owned());
            return;
        }
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let id = post_id();
            let title_value = title.get();
            let content_value = content.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_post(&id, &title_value, &content_value).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&format!("/posts/{id}"));
                        }
                    }
                    Err(e) => {
                        info.set(e);
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="editor-page">
            <h1>"Edit Post"</h1>
            <form class="editor-form" on:submit=on_submit>
                <input
                    class="editor-input"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="editor-textarea"
                    placeholder="Post body"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="editor-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}

//! Compose page for writing a new post.

use leptos::prelude::*;

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

pub(crate) fn validate_compose_input(title: &str, content: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Give your post a title.");
    }
    if content.trim().is_empty() {
        return Err("Write something first.");
    }
    Ok(())
}

#[component]
pub fn ComposePage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

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
        info.set("Publishing...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let title_value = title.get();
            let content_value = content.get();
            let tags_value = tags.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_post(&title_value, &content_value, &tags_value).await {
                    Ok(created) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&format!("/posts/{}", created.id));
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
            <h1>"New Post"</h1>
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
                    placeholder="Write your post (markdown supported)"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <input
                    class="editor-input"
                    type="text"
                    placeholder="tags, comma, separated"
                    prop:value=move || tags.get()
                    on:input=move |ev| tags.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Publish"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="editor-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}

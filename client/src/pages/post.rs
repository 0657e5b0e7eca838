//! Single-post page: rendered body, like toggle, comment thread, and
//! author-only edit/delete controls.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::comment_list::CommentList;
use crate::net::types::PostDetail;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::markdown;
use crate::util::text;

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

fn like_label(liked: bool, count: i64) -> String {
    if liked {
        format!("♥ {count}")
    } else {
        format!("♡ {count}")
    }
}

#[component]
pub fn PostPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let post_id = move || params.read().get("id").unwrap_or_default();

    let detail = RwSignal::new(None::<PostDetail>);
    let comment_input = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    // Load the post whenever the route param changes.
    Effect::new(move || {
        let id = post_id();
        if id.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_post(&id).await {
                Some(loaded) => detail.set(Some(loaded)),
                None => info.set("Post not found.".to_owned()),
            }
        });
    });

    let on_like = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let id = post_id();
            leptos::task::spawn_local(async move {
                if let Ok(status) = crate::net::api::toggle_like(&id).await {
                    detail.update(|d| {
                        if let Some(d) = d {
                            d.liked_by_viewer = status.liked;
                            d.like_count = status.like_count;
                        }
                    });
                }
            });
        }
    };

    let on_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let content = comment_input.get();
        if content.trim().is_empty() {
            ui.update(|u| {
                u.set_flash(crate::state::ui::FlashKind::Warning, "Comment must not be empty.");
            });
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let id = post_id();
            leptos::task::spawn_local(async move {
                match crate::net::api::add_comment(&id, &content).await {
                    Ok(comment) => {
                        comment_input.set(String::new());
                        info.set(String::new());
                        detail.update(|d| {
                            if let Some(d) = d {
                                d.comments.push(comment);
                                d.comment_count += 1;
                            }
                        });
                        ui.update(|u| {
                            u.set_flash(crate::state::ui::FlashKind::Success, "Comment added.");
                        });
                    }
                    Err(e) => info.set(e),
                }
            });
        }
    };

    let on_delete = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let id = post_id();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_post(&id).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                    Err(e) => info.set(e),
                }
            });
        }
    };

    let is_author = move || {
        detail
            .get()
            .is_some_and(|d| auth.get().is_self(&d.author_id))
    };

    view! {
        <div class="post-page">
            <Show when=move || !info.get().is_empty()>
                <p class="post-page__status">{move || info.get()}</p>
            </Show>

            <Show when=move || detail.get().is_some()>
                {move || {
                    detail
                        .get()
                        .map(|d| {
                            let body_html = markdown::render(&d.content);
                            let tags = text::split_tags(&d.tags);
                            let author_href = format!("/users/{}", d.author_id);
                            let edit_href = format!("/posts/{}/edit", d.id);
                            view! {
                                <article class="post">
                                    <h1 class="post__title">{d.title.clone()}</h1>
                                    <p class="post__meta">
                                        <a href=author_href class="post__author">
                                            {d.author.clone()}
                                        </a>
                                        <span class="post__date">{d.created_at.clone()}</span>
                                    </p>
                                    <div class="post__body" inner_html=body_html></div>
                                    <Show when={
                                        let has_tags = !tags.is_empty();
                                        move || has_tags
                                    }>
                                        <p class="post__tags">
                                            {tags
                                                .iter()
                                                .map(|t| view! { <span class="tag">{t.clone()}</span> })
                                                .collect_view()}
                                        </p>
                                    </Show>
                                    <div class="post__actions">
                                        <button class="btn post__like" on:click=on_like>
                                            {move || {
                                                detail
                                                    .get()
                                                    .map(|d| like_label(d.liked_by_viewer, d.like_count))
                                                    .unwrap_or_default()
                                            }}
                                        </button>
                                        <Show when=is_author>
                                            <a href=edit_href.clone() class="btn">
                                                "Edit"
                                            </a>
                                            <button class="btn btn--danger" on:click=on_delete>
                                                "Delete"
                                            </button>
                                        </Show>
                                    </div>
                                </article>
                            }
                        })
                }}
            </Show>

            <section class="post-page__comments">
                <h2>
                    "Comments ("
                    {move || detail.get().map(|d| d.comment_count).unwrap_or_default()}
                    ")"
                </h2>
                {move || {
                    detail
                        .get()
                        .map(|d| view! { <CommentList comments=d.comments/> })
                }}
                <form class="comment-form" on:submit=on_comment>
                    <textarea
                        class="comment-form__input"
                        placeholder="Add a comment"
                        prop:value=move || comment_input.get()
                        on:input=move |ev| comment_input.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn" type="submit">
                        "Comment"
                    </button>
                </form>
            </section>
        </div>
    }
}

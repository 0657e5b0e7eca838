//! Feed page listing every post, newest first, with search.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the feed over REST on
//! mount and re-queries when a search is submitted.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::post_card::PostCard;
use crate::state::auth::AuthState;
use crate::state::feed::FeedState;

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

fn normalize_search(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[cfg(feature = "hydrate")]
fn load_feed(feed: RwSignal<FeedState>, search: Option<String>) {
    feed.update(|f| f.loading = true);
    leptos::task::spawn_local(async move {
        let posts = crate::net::api::fetch_feed(search.as_deref()).await;
        feed.update(|f| {
            if let Some(posts) = posts {
                f.posts = posts;
            }
            f.loading = false;
        });
    });
}

/// Feed page — the authenticated landing route.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn FeedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let feed = expect_context::<RwSignal<FeedState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    let navigate_login = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate_login("/login", NavigateOptions::default());
        }
    });

    // Load the feed once a user is present.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || auth.get().user.is_none() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        {
            let search = normalize_search(&feed.get_untracked().search);
            load_feed(feed, search);
        }
    });

    let search_input = RwSignal::new(String::new());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = normalize_search(&search_input.get());
        feed.update(|f| f.search = term.clone().unwrap_or_default());
        #[cfg(feature = "hydrate")]
        load_feed(feed, term);
        #[cfg(not(feature = "hydrate"))]
        let _ = term;
    };

    view! {
        <div class="feed-page">
            <div class="feed-page__controls">
                <form class="feed-search" on:submit=on_search>
                    <input
                        class="feed-search__input"
                        type="search"
                        placeholder="Search posts..."
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">
                        "Search"
                    </button>
                </form>
                <a href="/compose" class="btn btn--primary">
                    "New Post"
                </a>
            </div>

            <Show when=move || feed.get().loading>
                <p class="feed-page__status">"Loading posts..."</p>
            </Show>

            <Show when=move || {
                let f = feed.get();
                !f.loading && f.posts.is_empty()
            }>
                <p class="feed-page__status">"No posts yet. Write the first one!"</p>
            </Show>

            <div class="feed-page__posts">
                <For
                    each=move || feed.get().posts
                    key=|post| post.id.clone()
                    children=|post| view! { <PostCard post=post/> }
                />
            </div>
        </div>
    }
}

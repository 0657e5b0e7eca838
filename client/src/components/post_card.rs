//! Feed/profile card for a single post.

use leptos::prelude::*;

use crate::net::types::PostSummary;
use crate::util::text;

/// Compact post rendering used by the feed and profile pages.
#[component]
pub fn PostCard(post: PostSummary) -> impl IntoView {
    let post_href = format!("/posts/{}", post.id);
    let author_href = format!("/users/{}", post.author_id);
    let tags = text::split_tags(&post.tags);
    let excerpt = text::excerpt(&post.content);

    view! {
        <article class="post-card">
            <h2 class="post-card__title">
                <a href=post_href.clone()>{post.title}</a>
            </h2>
            <p class="post-card__meta">
                <a href=author_href class="post-card__author">
                    {post.author}
                </a>
                <span class="post-card__date">{post.created_at}</span>
            </p>
            <p class="post-card__excerpt">{excerpt}</p>
            <Show when={
                let has_tags = !tags.is_empty();
                move || has_tags
            }>
                <p class="post-card__tags">
                    {tags
                        .iter()
                        .map(|t| view! { <span class="tag">{t.clone()}</span> })
                        .collect_view()}
                </p>
            </Show>
            <p class="post-card__counts">
                <a href=post_href.clone() class="post-card__count">
                    {post.like_count}
                    " likes"
                </a>
                <a href=post_href class="post-card__count">
                    {post.comment_count}
                    " comments"
                </a>
            </p>
        </article>
    }
}

//! Comment thread rendering for the post page.

use leptos::prelude::*;

use crate::net::types::Comment;

/// Oldest-first comment list.
#[component]
pub fn CommentList(comments: Vec<Comment>) -> impl IntoView {
    view! {
        <ul class="comment-list">
            {comments
                .into_iter()
                .map(|c| {
                    let author_href = format!("/users/{}", c.author_id);
                    view! {
                        <li class="comment">
                            <p class="comment__meta">
                                <a href=author_href class="comment__author">
                                    {c.author}
                                </a>
                                <span class="comment__date">{c.created_at}</span>
                            </p>
                            <p class="comment__body">{c.content}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

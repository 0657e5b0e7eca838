//! Public profile page: user info, aggregate stats, and their posts.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::post_card::PostCard;
use crate::net::types::UserProfile;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let params = use_params_map();
    let user_id = move || params.read().get("id").unwrap_or_default();

    let profile = RwSignal::new(None::<UserProfile>);
    let info = RwSignal::new(String::new());

    Effect::new(move || {
        let id = user_id();
        if id.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_user_profile(&id).await {
                Some(loaded) => profile.set(Some(loaded)),
                None => info.set("User not found.".to_owned()),
            }
        });
    });

    view! {
        <div class="profile-page">
            <Show when=move || !info.get().is_empty()>
                <p class="profile-page__status">{move || info.get()}</p>
            </Show>

            {move || {
                profile
                    .get()
                    .map(|p| {
                        view! {
                            <header class="profile-header">
                                <h1>{p.username.clone()}</h1>
                                <Show when={
                                    let has_bio = !p.bio.is_empty();
                                    move || has_bio
                                }>
                                    <p class="profile-header__bio">{p.bio.clone()}</p>
                                </Show>
                                <p class="profile-header__meta">
                                    {p.member_since
                                        .clone()
                                        .map(|d| format!("Member since {d}"))
                                        .unwrap_or_default()}
                                </p>
                                <p class="profile-header__stats">
                                    <span>{p.stats.posts} " posts"</span>
                                    <span>{p.stats.comments_written} " comments"</span>
                                    <span>{p.stats.likes_received} " likes received"</span>
                                </p>
                            </header>
                            <div class="profile-page__posts">
                                {p.posts
                                    .iter()
                                    .cloned()
                                    .map(|post| view! { <PostCard post=post/> })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

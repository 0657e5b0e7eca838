//! Top navigation bar: brand link, primary navigation, dark-mode toggle,
//! and session controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! This component surfaces session identity and primary navigation controls
//! that remain visible on every page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Application-wide top bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username = move || auth.get().user.map(|u| u.username);
    let profile_href = move || {
        auth.get()
            .user
            .map_or_else(|| "/login".to_owned(), |u| format!("/users/{}", u.id))
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                "Miniblog"
            </a>

            <a href="/compose" class="navbar__link">
                "New Post"
            </a>
            <a href="/about" class="navbar__link">
                "About"
            </a>

            <span class="navbar__spacer"></span>

            <button
                id="toggle-dark"
                class="btn navbar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <Show
                when=move || auth.get().user.is_some()
                fallback=|| {
                    view! {
                        <a href="/login" class="navbar__link">
                            "Login"
                        </a>
                        <a href="/register" class="navbar__link">
                            "Register"
                        </a>
                    }
                }
            >
                <a href=profile_href class="navbar__self">
                    {move || username().unwrap_or_default()}
                </a>
                <button class="btn navbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}

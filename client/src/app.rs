//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::flash::FlashBanner;
use crate::components::navbar::Navbar;
use crate::pages::{
    about::AboutPage, compose::ComposePage, edit_post::EditPostPage, feed::FeedPage,
    login::LoginPage, post::PostPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::{auth::AuthState, feed::FeedState, ui::UiState};
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, restores the persisted theme, loads
/// the current session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let feed = RwSignal::new(FeedState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(feed);
    provide_context(ui);

    // Restore the persisted dark-mode preference once the app mounts.
    // Effects do not run during SSR, so this is browser-only.
    Effect::new(move |_| {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    // Resolve the current session cookie into a user.
    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            auth.update(|a| a.loading = true);
            leptos::task::spawn_local(async move {
                let user = crate::net::api::fetch_current_user().await;
                auth.update(|a| {
                    a.user = user;
                    a.loading = false;
                });
            });
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/miniblog.css"/>
        <Title text="Miniblog"/>

        <Router>
            <Navbar/>
            <FlashBanner/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=FeedPage/>
                    <Route path=StaticSegment("compose") view=ComposePage/>
                    <Route path=(StaticSegment("posts"), ParamSegment("id")) view=PostPage/>
                    <Route
                        path=(StaticSegment("posts"), ParamSegment("id"), StaticSegment("edit"))
                        view=EditPostPage
                    />
                    <Route path=(StaticSegment("users"), ParamSegment("id")) view=ProfilePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                </Routes>
            </main>
        </Router>
    }
}

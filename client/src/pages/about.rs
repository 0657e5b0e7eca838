//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About Miniblog"</h1>
            <p>
                "Miniblog is a small multi-user blog: write posts in markdown, "
                "comment on others, and leave likes. Use the moon button in the "
                "top bar to switch to the dark theme; the choice is remembered "
                "on this browser."
            </p>
        </div>
    }
}

//! One-shot notification banner driven by `UiState::flash`.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Auto-clearing flash banner shown under the navbar.
#[component]
pub fn FlashBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Clear the banner a few seconds after a new message lands.
    Effect::new(move |_| {
        let active = ui.get().flash;
        #[cfg(feature = "hydrate")]
        if let Some(shown) = active {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
                ui.update(|u| {
                    // Only clear if no newer message replaced it meanwhile.
                    if u.flash.as_ref() == Some(&shown) {
                        u.flash = None;
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = active;
        }
    });

    view! {
        <Show when=move || ui.get().flash.is_some()>
            <div
                class=move || {
                    let kind = ui.get().flash.map(|f| f.kind).unwrap_or_default();
                    format!("flash {}", kind.css_class())
                }
                on:click=move |_| ui.update(|u| u.flash = None)
            >
                {move || ui.get().flash.map(|f| f.text).unwrap_or_default()}
            </div>
        </Show>
    }
}

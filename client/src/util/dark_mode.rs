//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies the
//! `.dark-mode` class to the `<html>` element. Toggle writes back to
//! `localStorage` and updates the class. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic. Storage failures
//! (quota, disabled storage) are ignored: the toggle still changes the
//! visible theme, it just will not survive a reload.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "dark-mode";

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark-mode";

/// Decide the initial theme from a raw stored value.
///
/// Only the exact string `"true"` enables dark mode. An absent key or any
/// other value (including `"false"` and garbage) selects the default theme.
#[must_use]
pub fn preference_from_stored(stored: Option<&str>) -> bool {
    stored == Some("true")
}

/// String-encode a preference for storage.
#[must_use]
pub fn encode_preference(enabled: bool) -> &'static str {
    if enabled { "true" } else { "false" }
}

/// Read the dark mode preference from localStorage.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return false,
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(stored) = storage.get_item(STORAGE_KEY) {
                return preference_from_stored(stored.as_deref());
            }
        }

        false
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if enabled {
                    let _ = class_list.add_1(DARK_CLASS);
                } else {
                    let _ = class_list.remove_1(DARK_CLASS);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, encode_preference(next));
            }
        }
    }
    next
}

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

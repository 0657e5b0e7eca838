//! Local UI chrome state (theme flag, flash banner).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`auth`,
//! `feed`) so rendering controls can evolve independently of server data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Category of a flash banner, mirroring the server-side outcome it reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlashKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl FlashKind {
    /// CSS modifier suffix for the banner element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "flash--info",
            Self::Success => "flash--success",
            Self::Warning => "flash--warning",
            Self::Error => "flash--error",
        }
    }
}

/// A one-shot notification shown at the top of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

/// UI state for the theme flag and the flash banner.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub flash: Option<Flash>,
}

impl UiState {
    /// Replace the current flash message.
    pub fn set_flash(&mut self, kind: FlashKind, text: impl Into<String>) {
        self.flash = Some(Flash { kind, text: text.into() });
    }
}

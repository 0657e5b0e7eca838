use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_has_no_flash() {
    let state = UiState::default();
    assert!(state.flash.is_none());
}

// =============================================================
// flash
// =============================================================

#[test]
fn set_flash_replaces_previous_message() {
    let mut state = UiState::default();
    state.set_flash(FlashKind::Info, "first");
    state.set_flash(FlashKind::Error, "second");
    let flash = state.flash.expect("flash should be set");
    assert_eq!(flash.kind, FlashKind::Error);
    assert_eq!(flash.text, "second");
}

#[test]
fn flash_kind_css_classes_are_distinct() {
    let classes = [
        FlashKind::Info.css_class(),
        FlashKind::Success.css_class(),
        FlashKind::Warning.css_class(),
        FlashKind::Error.css_class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in classes.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

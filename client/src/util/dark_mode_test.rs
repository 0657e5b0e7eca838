#![cfg(not(feature = "hydrate"))]

use super::*;

// =============================================================
// preference_from_stored — only the exact string "true" counts.
// =============================================================

#[test]
fn stored_true_enables_dark() {
    assert!(preference_from_stored(Some("true")));
}

#[test]
fn absent_key_defaults_to_light() {
    assert!(!preference_from_stored(None));
}

#[test]
fn stored_false_stays_light() {
    assert!(!preference_from_stored(Some("false")));
}

#[test]
fn garbage_values_stay_light() {
    for v in ["True", "TRUE", " true", "true ", "1", "yes", "on", "dark", ""] {
        assert!(!preference_from_stored(Some(v)), "expected light for {v:?}");
    }
}

// =============================================================
// encode_preference
// =============================================================

#[test]
fn encode_decode_round_trip() {
    assert!(preference_from_stored(Some(encode_preference(true))));
    assert!(!preference_from_stored(Some(encode_preference(false))));
}

#[test]
fn encode_produces_plain_boolean_strings() {
    assert_eq!(encode_preference(true), "true");
    assert_eq!(encode_preference(false), "false");
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn double_toggle_restores_original_state() {
    assert!(!toggle(toggle(false)));
    assert!(toggle(toggle(true)));
}

// =============================================================
// non-hydrate no-op surface
// =============================================================

#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}

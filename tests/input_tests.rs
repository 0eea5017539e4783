// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn arrows_cycle_focus() {
    assert_eq!(key_action("ArrowRight"), Some(KeyAction::Next));
    assert_eq!(key_action("ArrowDown"), Some(KeyAction::Next));
    assert_eq!(key_action("ArrowLeft"), Some(KeyAction::Prev));
    assert_eq!(key_action("ArrowUp"), Some(KeyAction::Prev));
}

#[test]
fn enter_and_space_activate_escape_dismisses() {
    assert_eq!(key_action("Enter"), Some(KeyAction::Activate));
    assert_eq!(key_action(" "), Some(KeyAction::Activate));
    assert_eq!(key_action("Escape"), Some(KeyAction::Dismiss));
}

#[test]
fn other_keys_are_left_to_the_browser() {
    for key in ["Tab", "a", "Shift", "F5", ""] {
        assert_eq!(key_action(key), None, "key {key:?} should pass through");
    }
}

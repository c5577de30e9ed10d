//! Keyboard activation for non-button elements

use dioxus::prelude::*;

/// Enter and Space activate focusable items, like a pointer click
pub fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

/// Run `activate` for Enter/Space, suppressing the key's default action
/// (Space would otherwise scroll the page).
pub fn handle_activation_key(evt: &KeyboardEvent, activate: impl FnOnce()) {
    if is_activation_key(&evt.key()) {
        evt.prevent_default();
        activate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key(&Key::Enter));
        assert!(is_activation_key(&Key::Character(" ".to_string())));
    }

    #[test]
    fn test_other_keys_do_not_activate() {
        assert!(!is_activation_key(&Key::Tab));
        assert!(!is_activation_key(&Key::Escape));
        assert!(!is_activation_key(&Key::Character("a".to_string())));
    }
}

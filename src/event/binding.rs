//! Key binding registry and resolution.
//!
//! [`KeyBindingRegistry`] maps key+modifier combinations to [`Binding`]s.
//! The `with_defaults()` constructor installs the lightbox bindings
//! (Left -> Previous, Right -> Next, Escape -> Close).

use std::collections::HashMap;

use super::input::{Key, KeyEvent, Modifiers};

// ---------------------------------------------------------------------------
// BindingAction
// ---------------------------------------------------------------------------

/// Action to take when a key binding is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingAction {
    /// Show the previous item, wrapping at the start.
    Previous,
    /// Show the next item, wrapping at the end.
    Next,
    /// Dismiss the overlay.
    Close,
}

/// A resolved binding: the action plus whether it swallows the key's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub action: BindingAction,
    pub prevent_default: bool,
}

// ---------------------------------------------------------------------------
// KeyBindingRegistry
// ---------------------------------------------------------------------------

/// Registry of key bindings, mapping (Key, Modifiers) -> Binding.
#[derive(Debug, Clone)]
pub struct KeyBindingRegistry {
    bindings: HashMap<(Key, Modifiers), Binding>,
}

impl KeyBindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a registry with the standard lightbox bindings.
    ///
    /// Defaults:
    /// - `Left` -> Previous (prevents default scrolling)
    /// - `Right` -> Next (prevents default scrolling)
    /// - `Escape` -> Close
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.bind(Key::Left, Modifiers::NONE, BindingAction::Previous, true);
        registry.bind(Key::Right, Modifiers::NONE, BindingAction::Next, true);
        registry.bind(Key::Escape, Modifiers::NONE, BindingAction::Close, false);
        registry
    }

    /// Register a key binding.
    ///
    /// If a binding already exists for this key+modifier combination, it is replaced.
    pub fn bind(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        action: BindingAction,
        prevent_default: bool,
    ) {
        self.bindings.insert(
            (key, modifiers),
            Binding {
                action,
                prevent_default,
            },
        );
    }

    /// Remove a key binding.
    ///
    /// Returns the removed binding, if any.
    pub fn unbind(&mut self, key: Key, modifiers: Modifiers) -> Option<Binding> {
        self.bindings.remove(&(key, modifiers))
    }

    /// Look up the binding for a given key event.
    ///
    /// An exact key + modifiers match wins. Otherwise the binding for the same
    /// key whose modifiers are all held (and which requires the most of them)
    /// applies, so a plain binding still fires with Shift or Ctrl down.
    pub fn resolve(&self, event: &KeyEvent) -> Option<Binding> {
        if let Some(binding) = self.bindings.get(&(event.code, event.modifiers)) {
            return Some(*binding);
        }
        self.bindings
            .iter()
            .filter(|((key, mods), _)| *key == event.code && event.modifiers.contains(*mods))
            .max_by_key(|((_, mods), _)| (mods.0.count_ones(), mods.0))
            .map(|(_, binding)| *binding)
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindingRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_registry_is_empty() {
        let reg = KeyBindingRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
    }

    #[test]
    fn defaults() {
        let reg = KeyBindingRegistry::default();
        assert_eq!(reg.len(), 3);

        let left = reg.resolve(&KeyEvent::plain(Key::Left)).unwrap();
        assert_eq!(left.action, BindingAction::Previous);
        assert!(left.prevent_default);

        let right = reg.resolve(&KeyEvent::plain(Key::Right)).unwrap();
        assert_eq!(right.action, BindingAction::Next);
        assert!(right.prevent_default);

        let esc = reg.resolve(&KeyEvent::plain(Key::Escape)).unwrap();
        assert_eq!(esc.action, BindingAction::Close);
        assert!(!esc.prevent_default);
    }

    #[test]
    fn held_modifiers_fall_back_to_plain_binding() {
        let reg = KeyBindingRegistry::with_defaults();
        let shifted = KeyEvent::new(Key::Right, Modifiers::SHIFT);
        assert_eq!(reg.resolve(&shifted).map(|b| b.action), Some(BindingAction::Next));
        let escape = KeyEvent::new(Key::Escape, Modifiers::SHIFT | Modifiers::CTRL);
        assert_eq!(reg.resolve(&escape).map(|b| b.action), Some(BindingAction::Close));
    }

    #[test]
    fn exact_then_most_specific_binding_wins() {
        let mut reg = KeyBindingRegistry::with_defaults();
        reg.bind(Key::Right, Modifiers::CTRL, BindingAction::Close, false);
        let ctrl = KeyEvent::new(Key::Right, Modifiers::CTRL);
        assert_eq!(reg.resolve(&ctrl).map(|b| b.action), Some(BindingAction::Close));
        let ctrl_shift = KeyEvent::new(Key::Right, Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(reg.resolve(&ctrl_shift).map(|b| b.action), Some(BindingAction::Close));
        let shift = KeyEvent::new(Key::Right, Modifiers::SHIFT);
        assert_eq!(reg.resolve(&shift).map(|b| b.action), Some(BindingAction::Next));
    }

    #[test]
    fn modified_binding_needs_its_modifiers() {
        let mut reg = KeyBindingRegistry::new();
        reg.bind(Key::Char('n'), Modifiers::CTRL, BindingAction::Next, true);
        assert!(reg.resolve(&KeyEvent::plain(Key::Char('n'))).is_none());
    }

    #[test]
    fn unmapped_key() {
        let reg = KeyBindingRegistry::with_defaults();
        assert!(reg.resolve(&KeyEvent::plain(Key::Char('q'))).is_none());
    }

    #[test]
    fn bind_replaces_existing() {
        let mut reg = KeyBindingRegistry::with_defaults();
        reg.bind(Key::Left, Modifiers::NONE, BindingAction::Next, false);
        assert_eq!(reg.len(), 3);
        let b = reg.resolve(&KeyEvent::plain(Key::Left)).unwrap();
        assert_eq!(b.action, BindingAction::Next);
        assert!(!b.prevent_default);
    }

    #[test]
    fn unbind() {
        let mut reg = KeyBindingRegistry::with_defaults();
        let removed = reg.unbind(Key::Escape, Modifiers::NONE).unwrap();
        assert_eq!(removed.action, BindingAction::Close);
        assert!(reg.resolve(&KeyEvent::plain(Key::Escape)).is_none());
        assert!(reg.unbind(Key::Escape, Modifiers::NONE).is_none());
    }

    #[test]
    fn custom_vim_style_bindings() {
        let mut reg = KeyBindingRegistry::new();
        reg.bind(Key::Char('h'), Modifiers::NONE, BindingAction::Previous, true);
        reg.bind(Key::Char('l'), Modifiers::NONE, BindingAction::Next, true);
        assert_eq!(
            reg.resolve(&KeyEvent::plain(Key::Char('l'))).map(|b| b.action),
            Some(BindingAction::Next)
        );
    }
}

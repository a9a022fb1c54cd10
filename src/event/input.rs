//! Input event types: keys, modifiers, key events, pointer clicks.
//!
//! Keys use the browser's `KeyboardEvent.key` vocabulary at the edges
//! (`"ArrowLeft"`, `"Escape"`, single characters) and parse into [`Key`].

use std::ops::BitOr;
use std::str::FromStr;

use crate::dom::NodeId;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

/// Error returned when a DOM key name has no [`Key`] equivalent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized key name {0:?}")]
pub struct ParseKeyError(pub String);

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            "ArrowUp" | "Up" => Key::Up,
            "ArrowDown" | "Down" => Key::Down,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            " " => Key::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => match other.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
                        Some(n) if (1..=24).contains(&n) => Key::F(n),
                        _ => return Err(ParseKeyError(other.to_owned())),
                    },
                }
            }
        };
        Ok(key)
    }
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);
    pub const META: Modifiers = Modifiers(8);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A keydown event with key and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event.
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key event with no modifiers.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }
}

/// What listeners did with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// At least one listener acted on the event.
    pub handled: bool,
    /// A listener suppressed the page's default action (e.g. scrolling).
    pub default_prevented: bool,
}

impl KeyOutcome {
    /// Fold another listener's outcome into this one.
    pub fn merge(self, other: KeyOutcome) -> KeyOutcome {
        KeyOutcome {
            handled: self.handled || other.handled,
            default_prevented: self.default_prevented || other.default_prevented,
        }
    }
}

// ---------------------------------------------------------------------------
// ClickEvent
// ---------------------------------------------------------------------------

/// A primary-button click delivered to a node.
///
/// `target` is the node that was hit; listeners further up the bubble path
/// compare against it to tell "clicked me" from "clicked my content".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub target: NodeId,
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Modifiers ────────────────────────────────────────────────────

    #[test]
    fn modifiers_none_is_empty() {
        assert!(Modifiers::NONE.is_empty());
    }

    #[test]
    fn modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::ALT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::ALT));
        assert!(!mods.contains(Modifiers::SHIFT));
        assert!(mods.contains(Modifiers::NONE));
    }

    // ── Key parsing ──────────────────────────────────────────────────

    #[test]
    fn parse_dom_arrow_names() {
        assert_eq!("ArrowLeft".parse::<Key>(), Ok(Key::Left));
        assert_eq!("ArrowRight".parse::<Key>(), Ok(Key::Right));
        assert_eq!("ArrowUp".parse::<Key>(), Ok(Key::Up));
        assert_eq!("ArrowDown".parse::<Key>(), Ok(Key::Down));
    }

    #[test]
    fn parse_escape_aliases() {
        assert_eq!("Escape".parse::<Key>(), Ok(Key::Escape));
        assert_eq!("Esc".parse::<Key>(), Ok(Key::Escape));
    }

    #[test]
    fn parse_single_characters() {
        assert_eq!("a".parse::<Key>(), Ok(Key::Char('a')));
        assert_eq!(" ".parse::<Key>(), Ok(Key::Char(' ')));
        assert_eq!("é".parse::<Key>(), Ok(Key::Char('é')));
    }

    #[test]
    fn parse_function_keys() {
        assert_eq!("F5".parse::<Key>(), Ok(Key::F(5)));
        assert!("F0".parse::<Key>().is_err());
        assert!("F99".parse::<Key>().is_err());
    }

    #[test]
    fn parse_unknown() {
        let err = "MediaPlayPause".parse::<Key>().unwrap_err();
        assert_eq!(err, ParseKeyError("MediaPlayPause".to_owned()));
        assert_eq!(err.to_string(), "unrecognized key name \"MediaPlayPause\"");
        assert!("".parse::<Key>().is_err());
    }

    // ── KeyEvent / KeyOutcome ────────────────────────────────────────

    #[test]
    fn key_event_plain() {
        let ke = KeyEvent::plain(Key::Escape);
        assert_eq!(ke.code, Key::Escape);
        assert!(ke.modifiers.is_empty());
    }

    #[test]
    fn outcome_merge() {
        let a = KeyOutcome { handled: true, default_prevented: false };
        let b = KeyOutcome { handled: false, default_prevented: true };
        assert_eq!(
            a.merge(b),
            KeyOutcome { handled: true, default_prevented: true }
        );
        assert_eq!(KeyOutcome::default().merge(KeyOutcome::default()), KeyOutcome::default());
    }
}

//=========================================================================
// Host Input Events
//
// Defines the portable representation of raw host input.
//
// This module abstracts away platform-specific input (e.g. Winit)
// into the vocabulary the event dispatcher translates from.
//
// Responsibilities:
// - Represent keyboard, pointer and window input in a stable way
// - Carry the typed character alongside the physical key
// - Provide equality and hashing semantics for per-frame coalescing
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    HostInput::poll_event()
//         ↓
//    EventDispatcher (translates into Glk events)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, macro buttons, and any
/// non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// The produced character travels separately in [`InputEvent::KeyDown`].
///
/// Only keys the keyboard table cares about are named. Everything else
/// arrives as `Unidentified` and is translated through its typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys used by control chords. Identified by the character
    /// the layout assigns, not by physical location.
    KeyA, KeyE, KeyU,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Editing & Paging -------------------------------------------------

    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    PageUp,
    PageDown,
    Home,
    End,

    //--- Function Keys ----------------------------------------------------

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

//=== ScrollDirection =====================================================

/// Direction of a single mouse wheel notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Up,
    Down,
}

//=== InputEvent ==========================================================

/// Raw input event reported by the host.
///
/// # Equality & Hashing Semantics
///
/// Discrete events compare by type + payload. `MouseMoved`, `Resized`
/// and `RedrawRequested` compare equal regardless of payload so the
/// platform buffer can coalesce them (last value wins).
///
/// ```text
/// KeyDown{A, CTRL} == KeyDown{A, CTRL}       ✓
/// KeyDown{A, CTRL} == KeyDown{A, SHIFT}      ✗
/// MouseMoved{...}  == MouseMoved{...}        ✓
/// Resized{...}     == Resized{...}           ✓
/// ```
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Key pressed down. `text` is the character the key produced, if any.
    KeyDown {
        key: KeyCode,
        text: Option<char>,
        modifiers: Modifiers,
    },

    /// Key released.
    KeyUp {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Mouse button pressed at the given screen position.
    MouseButtonDown {
        button: MouseButton,
        x: u32,
        y: u32,
    },

    /// Mouse button released at the given screen position.
    MouseButtonUp {
        button: MouseButton,
        x: u32,
        y: u32,
    },

    /// Pointer moved to a new position (pixels, top-left origin).
    MouseMoved { x: u32, y: u32 },

    /// One wheel notch.
    MouseWheel(ScrollDirection),

    /// Window client area changed size.
    Resized { width: u32, height: u32 },

    /// The host asked for the screen to be repainted.
    RedrawRequested,

    /// The host is shutting the session down.
    Quit,
}

//--- Implementation ------------------------------------------------------

impl InputEvent {
    /// Convenience constructor for a key press without modifiers.
    pub fn key(key: KeyCode, text: Option<char>) -> Self {
        Self::KeyDown { key, text, modifiers: Modifiers::NONE }
    }

    /// Convenience constructor for a printable character press.
    pub fn character(ch: char) -> Self {
        Self::key(KeyCode::Unidentified, Some(ch))
    }

    /// Returns `true` for the events that end a wait-for-press.
    pub fn is_press(&self) -> bool {
        matches!(self, Self::KeyDown { .. } | Self::MouseButtonDown { .. })
    }

    /// Returns `true` for events where only the latest value matters.
    pub fn is_continuous(&self) -> bool {
        matches!(
            self,
            Self::MouseMoved { .. } | Self::Resized { .. } | Self::RedrawRequested
        )
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (
                KeyDown { key: a, text: ta, modifiers: ma },
                KeyDown { key: b, text: tb, modifiers: mb },
            ) => a == b && ta == tb && ma == mb,
            (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (
                MouseButtonDown { button: a, x: xa, y: ya },
                MouseButtonDown { button: b, x: xb, y: yb },
            ) => a == b && xa == xb && ya == yb,
            (
                MouseButtonUp { button: a, x: xa, y: ya },
                MouseButtonUp { button: b, x: xb, y: yb },
            ) => a == b && xa == xb && ya == yb,
            (MouseWheel(a), MouseWheel(b)) => a == b,
            // Continuous: payload ignored, always equal
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (Resized { .. }, Resized { .. }) => true,
            (RedrawRequested, RedrawRequested) => true,
            (Quit, Quit) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

/// Hashes discriminant + discrete payload. Continuous payloads are NOT
/// hashed (consistent with equality).
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key, text, modifiers } => {
                key.hash(state);
                text.hash(state);
                modifiers.hash(state);
            }
            Self::KeyUp { key, modifiers } => {
                key.hash(state);
                modifiers.hash(state);
            }
            Self::MouseButtonDown { button, x, y } | Self::MouseButtonUp { button, x, y } => {
                button.hash(state);
                x.hash(state);
                y.hash(state);
            }
            Self::MouseWheel(direction) => direction.hash(state),
            _ => {}
        }
    }
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// Left and right variants are not distinguished. On macOS Command
/// reports as Ctrl and Option as Alt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Shift key held (either left or right).
    pub shift: bool,

    /// Ctrl key held (either left or right, Command on macOS).
    pub ctrl: bool,

    /// Alt key held (either left or right, Option on macOS).
    pub alt: bool,
}

//--- Modifier Constants --------------------------------------------------

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };

    /// Shift only.
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };

    /// Ctrl only.
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };

    /// Alt only.
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::collections::hash_map::DefaultHasher;

    //--- Utility: compute hash -------------------------------------------
    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    //=====================================================================
    // Equality Tests
    //=====================================================================

    #[test]
    fn equality_same_key_same_text() {
        let a = InputEvent::character('x');
        let b = InputEvent::character('x');
        assert_eq!(a, b);
    }

    #[test]
    fn equality_different_text() {
        let a = InputEvent::character('x');
        let b = InputEvent::character('y');
        assert_ne!(a, b, "Typed text is part of a key press identity");
    }

    #[test]
    fn equality_different_modifiers() {
        let a = InputEvent::KeyDown { key: KeyCode::KeyA, text: None, modifiers: Modifiers::NONE };
        let b = InputEvent::KeyDown { key: KeyCode::KeyA, text: None, modifiers: Modifiers::CTRL };
        assert_ne!(a, b);
    }

    #[test]
    fn equality_continuous_ignores_payload() {
        assert_eq!(InputEvent::MouseMoved { x: 1, y: 2 }, InputEvent::MouseMoved { x: 30, y: 40 });
        assert_eq!(
            InputEvent::Resized { width: 640, height: 480 },
            InputEvent::Resized { width: 800, height: 600 }
        );
    }

    #[test]
    fn equality_clicks_compare_position() {
        let a = InputEvent::MouseButtonDown { button: MouseButton::Left, x: 1, y: 1 };
        let b = InputEvent::MouseButtonDown { button: MouseButton::Left, x: 2, y: 1 };
        assert_ne!(a, b);
    }

    #[test]
    fn equality_wheel_direction() {
        assert_ne!(
            InputEvent::MouseWheel(ScrollDirection::Up),
            InputEvent::MouseWheel(ScrollDirection::Down)
        );
    }

    //=====================================================================
    // Hashing Tests
    //=====================================================================

    #[test]
    fn hash_equality_contract_mousemoved() {
        let a = InputEvent::MouseMoved { x: 10, y: 20 };
        let b = InputEvent::MouseMoved { x: 999, y: 888 };
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn hash_different_discriminants() {
        let a = InputEvent::KeyDown { key: KeyCode::Tab, text: None, modifiers: Modifiers::NONE };
        let b = InputEvent::KeyUp { key: KeyCode::Tab, modifiers: Modifiers::NONE };
        assert_ne!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn hashset_coalesces_resizes() {
        let mut set = HashSet::new();
        set.replace(InputEvent::Resized { width: 1, height: 1 });
        set.replace(InputEvent::Resized { width: 2, height: 2 });
        assert_eq!(set.len(), 1);
        assert!(matches!(
            set.iter().next(),
            Some(InputEvent::Resized { width: 2, height: 2 })
        ));
    }

    //=====================================================================
    // Classification Tests
    //=====================================================================

    #[test]
    fn presses_are_key_and_button_downs() {
        assert!(InputEvent::character('a').is_press());
        assert!(InputEvent::MouseButtonDown { button: MouseButton::Right, x: 0, y: 0 }.is_press());
        assert!(!InputEvent::MouseButtonUp { button: MouseButton::Left, x: 0, y: 0 }.is_press());
        assert!(!InputEvent::MouseWheel(ScrollDirection::Up).is_press());
        assert!(!InputEvent::RedrawRequested.is_press());
    }

    #[test]
    fn continuous_classification() {
        assert!(InputEvent::MouseMoved { x: 0, y: 0 }.is_continuous());
        assert!(InputEvent::RedrawRequested.is_continuous());
        assert!(!InputEvent::Quit.is_continuous());
        assert!(!InputEvent::character('q').is_continuous());
    }

    #[test]
    fn modifiers_default_is_none() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }
}

//=========================================================================
// Keyboard Table
//=========================================================================
//
// Maps a host key press to the value delivered to Glk windows: either a
// special keycode sentinel or the typed character's codepoint.
//
// Chords:
//   Ctrl+A → Home          Ctrl+Left  → SkipWordLeft
//   Ctrl+E → End           Ctrl+Right → SkipWordRight
//   Ctrl+U → Escape        other Ctrl / any Alt chord → dropped
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::keycode::Keycode;
use crate::core::input::{KeyCode, Modifiers, ScrollDirection};

/// Translates a key press. Returns `None` for presses that produce
/// nothing a window can consume.
pub(crate) fn translate_key(key: KeyCode, text: Option<char>, modifiers: Modifiers) -> Option<u32> {
    if modifiers.ctrl {
        return control_chord(key).map(u32::from);
    }
    if modifiers.alt {
        return None;
    }

    special_key(key)
        .map(u32::from)
        .or_else(|| text.filter(|c| !c.is_control()).map(u32::from))
}

/// Keycode synthesized for a wheel notch.
pub(crate) fn wheel_keycode(direction: ScrollDirection) -> u32 {
    match direction {
        ScrollDirection::Up => Keycode::MouseWheelUp.into(),
        ScrollDirection::Down => Keycode::MouseWheelDown.into(),
    }
}

//--- Internal Helpers ----------------------------------------------------

fn control_chord(key: KeyCode) -> Option<Keycode> {
    match key {
        KeyCode::KeyA => Some(Keycode::Home),
        KeyCode::KeyE => Some(Keycode::End),
        KeyCode::KeyU => Some(Keycode::Escape),
        KeyCode::ArrowLeft => Some(Keycode::SkipWordLeft),
        KeyCode::ArrowRight => Some(Keycode::SkipWordRight),
        _ => None,
    }
}

fn special_key(key: KeyCode) -> Option<Keycode> {
    Some(match key {
        KeyCode::Enter => Keycode::Return,
        KeyCode::Backspace => Keycode::Delete,
        KeyCode::Delete => Keycode::Erase,
        KeyCode::Tab => Keycode::Tab,
        KeyCode::Escape => Keycode::Escape,
        KeyCode::ArrowUp => Keycode::Up,
        KeyCode::ArrowDown => Keycode::Down,
        KeyCode::ArrowLeft => Keycode::Left,
        KeyCode::ArrowRight => Keycode::Right,
        KeyCode::PageUp => Keycode::PageUp,
        KeyCode::PageDown => Keycode::PageDown,
        KeyCode::Home => Keycode::Home,
        KeyCode::End => Keycode::End,
        KeyCode::F1 => Keycode::Func1,
        KeyCode::F2 => Keycode::Func2,
        KeyCode::F3 => Keycode::Func3,
        KeyCode::F4 => Keycode::Func4,
        KeyCode::F5 => Keycode::Func5,
        KeyCode::F6 => Keycode::Func6,
        KeyCode::F7 => Keycode::Func7,
        KeyCode::F8 => Keycode::Func8,
        KeyCode::F9 => Keycode::Func9,
        KeyCode::F10 => Keycode::Func10,
        KeyCode::F11 => Keycode::Func11,
        KeyCode::F12 => Keycode::Func12,
        KeyCode::KeyA | KeyCode::KeyE | KeyCode::KeyU | KeyCode::Unidentified => return None,
    })
}

//=========================================================================
// Tests
//=========================================================================

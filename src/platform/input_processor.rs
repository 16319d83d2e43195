//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into engine InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent (engine type) → InputBuffer
//
// Stateful tracking: caches modifier state from ModifiersChanged events
// and the last pointer position from CursorMoved events. Key events pick
// up the modifiers; button events pick up the position, since winit
// reports buttons without coordinates.
//
// Chord letters (A, E, U) come from the logical key, which follows the
// keyboard layout and ignores Ctrl; everything else from the physical key.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, MouseScrollDelta},
    keyboard::{Key, KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton, ScrollDirection};

//=== InputProcessor ======================================================

/// Converts Winit events to engine InputEvents with stateful modifier
/// and pointer tracking.
pub(crate) struct InputProcessor {
    current_modifiers: Modifiers,
    pointer: (u32, u32),
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            current_modifiers: Modifiers::NONE,
            pointer: (0, 0),
        }
    }

    //--- State Management -------------------------------------------------

    /// Updates cached modifier state (applied to subsequent key events).
    pub(crate) fn update_modifiers(&mut self, modifiers_state: ModifiersState) {
        self.current_modifiers = Modifiers::from(modifiers_state);
    }

    pub(crate) fn current_modifiers(&self) -> Modifiers {
        self.current_modifiers
    }

    pub(crate) fn pointer(&self) -> (u32, u32) {
        self.pointer
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit KeyEvent. Keys that are neither named nor
    /// produce text are dropped.
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        let text = key_event.text.as_ref().and_then(|t| t.chars().next());
        let key = resolve_key(key_event.physical_key, &key_event.logical_key);
        self.create_key_input_event(key, text, key_event.state)
    }

    /// Converts a button transition at the last known pointer position.
    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let button = MouseButton::from(button);
        let (x, y) = self.pointer;

        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button, x, y },
            ElementState::Released => InputEvent::MouseButtonUp { button, x, y },
        }
    }

    /// Records the pointer (physical pixels, clamped to the window's
    /// top-left) and produces a move event.
    pub(crate) fn process_mouse_move(&mut self, x: f64, y: f64) -> InputEvent {
        let clamp = |v: f64| v.max(0.0).min(f64::from(u32::MAX)) as u32;
        self.pointer = (clamp(x), clamp(y));
        InputEvent::MouseMoved { x: self.pointer.0, y: self.pointer.1 }
    }

    /// One wheel event becomes one notch; a zero vertical delta is dropped.
    pub(crate) fn process_wheel(&self, delta: MouseScrollDelta) -> Option<InputEvent> {
        let dy = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        };

        if dy > 0.0 {
            Some(InputEvent::MouseWheel(ScrollDirection::Up))
        } else if dy < 0.0 {
            Some(InputEvent::MouseWheel(ScrollDirection::Down))
        } else {
            None
        }
    }

    pub(crate) fn process_resize(&self, size: PhysicalSize<u32>) -> InputEvent {
        InputEvent::Resized { width: size.width, height: size.height }
    }

    //--- Internal Helpers -------------------------------------------------

    fn create_key_input_event(
        &self,
        key: KeyCode,
        text: Option<char>,
        state: ElementState,
    ) -> Option<InputEvent> {
        let modifiers = self.current_modifiers;

        match state {
            ElementState::Pressed => {
                if key == KeyCode::Unidentified && text.is_none() {
                    return None;
                }
                Some(InputEvent::KeyDown { key, text, modifiers })
            }
            ElementState::Released => Some(InputEvent::KeyUp { key, modifiers }),
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Engine key for a winit key event. Letters count as chord letters only
/// when the layout produces that letter, so Ctrl+A means the key labelled
/// A on AZERTY as well as on QWERTY.
fn resolve_key(physical: PhysicalKey, logical: &Key) -> KeyCode {
    if let Key::Character(text) = logical {
        match text.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('a') => return KeyCode::KeyA,
            Some('e') => return KeyCode::KeyE,
            Some('u') => return KeyCode::KeyU,
            _ => {}
        }
    }

    match physical {
        PhysicalKey::Code(code) => KeyCode::from(code),
        PhysicalKey::Unidentified(_) => KeyCode::Unidentified,
    }
}

/// Converts Winit ModifiersState to engine Modifiers.
///
/// Winit normalizes platform keys (macOS Cmd → Ctrl, Option → Alt).
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

/// Converts Winit physical key codes to engine key codes.
///
/// Only the keys with a special meaning are named; the rest arrive as
/// `Unidentified` and are carried by their text. Letters are never named
/// here: their position differs between layouts (see `resolve_key`).
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Arrows ---------------------------------------------------

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Editing & Paging -----------------------------------------

            Enter | NumpadEnter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,
            PageUp => KeyCode::PageUp,
            PageDown => KeyCode::PageDown,
            Home => KeyCode::Home,
            End => KeyCode::End,

            //--- Function Keys --------------------------------------------

            F1 => KeyCode::F1,
            F2 => KeyCode::F2,
            F3 => KeyCode::F3,
            F4 => KeyCode::F4,
            F5 => KeyCode::F5,
            F6 => KeyCode::F6,
            F7 => KeyCode::F7,
            F8 => KeyCode::F8,
            F9 => KeyCode::F9,
            F10 => KeyCode::F10,
            F11 => KeyCode::F11,
            F12 => KeyCode::F12,

            //--- Unmapped (return Unidentified) ---------------------------

            _ => KeyCode::Unidentified,
        }
    }
}

/// Converts Winit mouse buttons to engine buttons.
///
/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;
    use winit::keyboard::NativeKeyCode;

    fn make_modifiers(shift: bool, ctrl: bool, alt: bool) -> ModifiersState {
        let mut state = ModifiersState::empty();
        if shift { state.insert(ModifiersState::SHIFT); }
        if ctrl { state.insert(ModifiersState::CONTROL); }
        if alt { state.insert(ModifiersState::ALT); }
        state
    }

    #[test]
    fn starts_with_no_modifiers() {
        let processor = InputProcessor::new();
        assert_eq!(processor.current_modifiers(), Modifiers::NONE);
        assert_eq!(processor.pointer(), (0, 0));
    }

    #[test]
    fn update_modifiers_works() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(make_modifiers(true, false, true));

        let mods = processor.current_modifiers();
        assert!(mods.shift && !mods.ctrl && mods.alt);
    }

    #[test]
    fn key_down_carries_text_and_modifiers() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(make_modifiers(false, true, false));

        let event = processor.create_key_input_event(
            KeyCode::KeyE,
            Some('e'),
            ElementState::Pressed,
        );

        match event {
            Some(InputEvent::KeyDown { key, text, modifiers }) => {
                assert_eq!(key, KeyCode::KeyE);
                assert_eq!(text, Some('e'));
                assert!(modifiers.ctrl);
            }
            other => panic!("Expected KeyDown, got {:?}", other),
        }
    }

    #[test]
    fn key_up_is_reported() {
        let processor = InputProcessor::new();
        let event = processor.create_key_input_event(
            KeyCode::Enter,
            None,
            ElementState::Released,
        );
        assert!(matches!(event, Some(InputEvent::KeyUp { key: KeyCode::Enter, .. })));
    }

    #[test]
    fn unnamed_key_with_text_is_kept() {
        let processor = InputProcessor::new();
        let event = processor.create_key_input_event(
            resolve_key(PhysicalKey::Code(WinitKeyCode::KeyQ), &Key::Character("q".into())),
            Some('q'),
            ElementState::Pressed,
        );
        assert_eq!(event, Some(InputEvent::character('q')));
    }

    #[test]
    fn silent_unnamed_key_is_dropped() {
        let processor = InputProcessor::new();
        let event = processor.create_key_input_event(
            resolve_key(PhysicalKey::Unidentified(NativeKeyCode::Unidentified), &Key::Dead(None)),
            None,
            ElementState::Pressed,
        );
        assert_eq!(event, None);

        let event = processor.create_key_input_event(
            KeyCode::from(WinitKeyCode::F13),
            None,
            ElementState::Pressed,
        );
        assert_eq!(event, None);
    }

    #[test]
    fn chord_letters_follow_the_layout() {
        // AZERTY: the key in the QWERTY "A" position types 'q'
        let key = resolve_key(PhysicalKey::Code(WinitKeyCode::KeyA), &Key::Character("q".into()));
        assert_eq!(key, KeyCode::Unidentified);

        // ...and the key in the QWERTY "Q" position types 'a'
        let key = resolve_key(PhysicalKey::Code(WinitKeyCode::KeyQ), &Key::Character("a".into()));
        assert_eq!(key, KeyCode::KeyA);

        let key = resolve_key(PhysicalKey::Code(WinitKeyCode::KeyE), &Key::Character("E".into()));
        assert_eq!(key, KeyCode::KeyE);
    }

    #[test]
    fn named_keys_come_from_physical_code() {
        use winit::keyboard::NamedKey;
        let key = resolve_key(PhysicalKey::Code(WinitKeyCode::NumpadEnter), &Key::Named(NamedKey::Enter));
        assert_eq!(key, KeyCode::Enter);
    }

    #[test]
    fn buttons_use_last_pointer_position() {
        let mut processor = InputProcessor::new();
        processor.process_mouse_move(123.6, 45.2);

        let event = processor.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed);
        assert_eq!(event, InputEvent::MouseButtonDown { button: MouseButton::Left, x: 123, y: 45 });

        let event = processor.process_mouse_button(WinitMouseButton::Back, ElementState::Released);
        assert_eq!(event, InputEvent::MouseButtonUp { button: MouseButton::Other, x: 123, y: 45 });
    }

    #[test]
    fn pointer_outside_window_is_clamped() {
        let mut processor = InputProcessor::new();
        processor.process_mouse_move(-5.0, 10.0);
        assert_eq!(processor.pointer(), (0, 10));
    }

    #[test]
    fn wheel_maps_to_notches() {
        let processor = InputProcessor::new();

        assert_eq!(
            processor.process_wheel(MouseScrollDelta::LineDelta(0.0, 1.0)),
            Some(InputEvent::MouseWheel(ScrollDirection::Up))
        );
        assert_eq!(
            processor.process_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -12.0))),
            Some(InputEvent::MouseWheel(ScrollDirection::Down))
        );
        assert_eq!(processor.process_wheel(MouseScrollDelta::LineDelta(3.0, 0.0)), None);
    }

    #[test]
    fn resize_reports_physical_size() {
        let processor = InputProcessor::new();
        let event = processor.process_resize(PhysicalSize::new(1024, 768));
        assert!(matches!(event, InputEvent::Resized { width: 1024, height: 768 }));
    }

    #[test]
    fn keycode_conversion() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyA), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadEnter), KeyCode::Enter);
        assert_eq!(KeyCode::from(WinitKeyCode::F12), KeyCode::F12);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyZ), KeyCode::Unidentified);
    }
}

//=========================================================================
// Glk Keycodes
//
// Special keys are reported as sentinel values at the top of the u32
// range so they never collide with Unicode codepoints delivered by
// character input.
//
//=========================================================================

/// Number of standard special keycodes (`0x1_0000_0000 - MAXVAL` is the
/// lowest standard sentinel).
pub const KEYCODE_MAXVAL: u32 = 28;

/// Special key sentinel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Keycode {
    Unknown = 0xffff_ffff,
    Left = 0xffff_fffe,
    Right = 0xffff_fffd,
    Up = 0xffff_fffc,
    Down = 0xffff_fffb,
    Return = 0xffff_fffa,
    Delete = 0xffff_fff9,
    Escape = 0xffff_fff8,
    Tab = 0xffff_fff7,
    PageUp = 0xffff_fff6,
    PageDown = 0xffff_fff5,
    Home = 0xffff_fff4,
    End = 0xffff_fff3,
    Func1 = 0xffff_ffef,
    Func2 = 0xffff_ffee,
    Func3 = 0xffff_ffed,
    Func4 = 0xffff_ffec,
    Func5 = 0xffff_ffeb,
    Func6 = 0xffff_ffea,
    Func7 = 0xffff_ffe9,
    Func8 = 0xffff_ffe8,
    Func9 = 0xffff_ffe7,
    Func10 = 0xffff_ffe6,
    Func11 = 0xffff_ffe5,
    Func12 = 0xffff_ffe4,

    //--- Non-standard ----------------------------------------------------
    Erase = 0xffff_ef7f,
    MouseWheelUp = 0xffff_effe,
    MouseWheelDown = 0xffff_efff,
    SkipWordLeft = 0xffff_f000,
    SkipWordRight = 0xffff_f001,
}

const ALL: [Keycode; 30] = [
    Keycode::Unknown, Keycode::Left, Keycode::Right, Keycode::Up, Keycode::Down,
    Keycode::Return, Keycode::Delete, Keycode::Escape, Keycode::Tab,
    Keycode::PageUp, Keycode::PageDown, Keycode::Home, Keycode::End,
    Keycode::Func1, Keycode::Func2, Keycode::Func3, Keycode::Func4,
    Keycode::Func5, Keycode::Func6, Keycode::Func7, Keycode::Func8,
    Keycode::Func9, Keycode::Func10, Keycode::Func11, Keycode::Func12,
    Keycode::Erase, Keycode::MouseWheelUp, Keycode::MouseWheelDown,
    Keycode::SkipWordLeft, Keycode::SkipWordRight,
];

impl Keycode {
    /// Decodes a sentinel value. Plain codepoints return `None`.
    pub fn from_u32(value: u32) -> Option<Self> {
        ALL.iter().copied().find(|k| *k as u32 == value)
    }

    /// Function key `n` (1-12).
    pub fn function(n: u8) -> Option<Self> {
        match n {
            1..=12 => Self::from_u32(Keycode::Func1 as u32 - (u32::from(n) - 1)),
            _ => None,
        }
    }

    /// Returns `true` if `value` is one of the special sentinels rather
    /// than a character codepoint.
    pub fn is_special(value: u32) -> bool {
        Self::from_u32(value).is_some()
    }
}

impl From<Keycode> for u32 {
    fn from(key: Keycode) -> Self {
        key as u32
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

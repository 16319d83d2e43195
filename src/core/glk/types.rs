//=========================================================================
// Glk Constants
//=========================================================================
//
// The enumerations of the portable interactive-fiction API: window
// types and split methods, file usages and modes, styles, hints,
// gestalt selectors and the dispatch object classes.
//
// Plain enumerations decode with `from_u32` and encode with `u32::from`.
// The two packed fields (`WinMethod`, `FileUsage`) are small structs
// with `bits`/`from_bits`.
//
//=========================================================================

/// Unsigned Glk integer.
pub type Glui32 = u32;

/// Signed Glk integer.
pub type Glsi32 = i32;

//=== Enum Helper =========================================================

/// Declares a `#[repr(u32)]` enum with `from_u32` and `From<_> for u32`.
macro_rules! glk_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value ),+
        }

        impl $name {
            pub fn from_u32(code: u32) -> Option<Self> {
                match code {
                    $( x if x == $value => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                value as u32
            }
        }
    };
}

//=== Gestalt =============================================================

glk_enum! {
    /// Capability selectors for `glk_gestalt`.
    pub enum Gestalt {
        Version = 0,
        CharInput = 1,
        LineInput = 2,
        CharOutput = 3,
        MouseInput = 4,
        Timer = 5,
        Graphics = 6,
        DrawImage = 7,
        Sound = 8,
        SoundVolume = 9,
        SoundNotify = 10,
        Hyperlinks = 11,
        HyperlinkInput = 12,
        SoundMusic = 13,
        GraphicsTransparency = 14,
        Unicode = 15,
        UnicodeNorm = 16,
        LineInputEcho = 17,
        LineTerminators = 18,
        LineTerminatorKey = 19,
        DateTime = 20,
        Sound2 = 21,
        /// Extended text styling.
        GarglkText = 0x1100,
    }
}

glk_enum! {
    /// Answers to a `Gestalt::CharOutput` query.
    pub enum CharOutput {
        CannotPrint = 0,
        ApproxPrint = 1,
        ExactPrint = 2,
    }
}

//=== Styles ==============================================================

/// Number of text styles.
pub const NUM_STYLES: u32 = 11;

glk_enum! {
    pub enum Style {
        Normal = 0,
        Emphasized = 1,
        Preformatted = 2,
        Header = 3,
        Subheader = 4,
        Alert = 5,
        Note = 6,
        BlockQuote = 7,
        Input = 8,
        User1 = 9,
        User2 = 10,
    }
}

/// Number of style hints.
pub const NUM_HINTS: u32 = 10;

glk_enum! {
    pub enum StyleHint {
        Indentation = 0,
        ParaIndentation = 1,
        Justification = 2,
        Size = 3,
        Weight = 4,
        Oblique = 5,
        Proportional = 6,
        TextColor = 7,
        BackColor = 8,
        ReverseColor = 9,
    }
}

glk_enum! {
    /// Values for `StyleHint::Justification`.
    pub enum Justification {
        LeftFlush = 0,
        LeftRight = 1,
        Centered = 2,
        RightFlush = 3,
    }
}

//=== Windows =============================================================

glk_enum! {
    pub enum WinType {
        /// Wildcard used by queries, never a real window.
        AllTypes = 0,
        Pair = 1,
        Blank = 2,
        TextBuffer = 3,
        TextGrid = 4,
        Graphics = 5,
    }
}

glk_enum! {
    /// Side of the split the new window takes.
    pub enum WinDirection {
        Left = 0x00,
        Right = 0x01,
        Above = 0x02,
        Below = 0x03,
    }
}

glk_enum! {
    /// How the split size is measured.
    pub enum WinDivision {
        Fixed = 0x10,
        Proportional = 0x20,
    }
}

/// Packed split method: direction, division and border flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinMethod {
    pub direction: WinDirection,
    pub division: WinDivision,
    pub border: bool,
}

impl WinMethod {
    pub const DIR_MASK: u32 = 0x0f;
    pub const DIVISION_MASK: u32 = 0xf0;
    pub const BORDER_MASK: u32 = 0x100;
    const NO_BORDER: u32 = 0x100;

    pub fn new(direction: WinDirection, division: WinDivision, border: bool) -> Self {
        Self { direction, division, border }
    }

    pub fn bits(self) -> u32 {
        let border = if self.border { 0 } else { Self::NO_BORDER };
        u32::from(self.direction) | u32::from(self.division) | border
    }

    /// Decodes a packed method. Unknown direction or division codes
    /// yield `None`.
    pub fn from_bits(bits: u32) -> Option<Self> {
        Some(Self {
            direction: WinDirection::from_u32(bits & Self::DIR_MASK)?,
            division: WinDivision::from_u32(bits & Self::DIVISION_MASK)?,
            border: bits & Self::BORDER_MASK == 0,
        })
    }
}

//=== Files & Streams =====================================================

glk_enum! {
    /// What a file reference will hold.
    pub enum FileType {
        Data = 0x00,
        SavedGame = 0x01,
        Transcript = 0x02,
        InputRecord = 0x03,
    }
}

/// Packed file usage: content type plus text/binary mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileUsage {
    pub kind: FileType,
    pub text: bool,
}

impl FileUsage {
    pub const TYPE_MASK: u32 = 0x0f;
    pub const TEXT_MODE: u32 = 0x100;
    pub const BINARY_MODE: u32 = 0x000;

    pub fn text(kind: FileType) -> Self {
        Self { kind, text: true }
    }

    pub fn binary(kind: FileType) -> Self {
        Self { kind, text: false }
    }

    pub fn bits(self) -> u32 {
        let mode = if self.text { Self::TEXT_MODE } else { Self::BINARY_MODE };
        u32::from(self.kind) | mode
    }

    pub fn from_bits(bits: u32) -> Option<Self> {
        Some(Self {
            kind: FileType::from_u32(bits & Self::TYPE_MASK)?,
            text: bits & Self::TEXT_MODE != 0,
        })
    }
}

glk_enum! {
    pub enum FileMode {
        Write = 0x01,
        Read = 0x02,
        ReadWrite = 0x03,
        WriteAppend = 0x05,
    }
}

impl FileMode {
    pub fn can_read(self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }

    pub fn can_write(self) -> bool {
        !matches!(self, Self::Read)
    }
}

glk_enum! {
    pub enum SeekMode {
        Start = 0,
        Current = 1,
        End = 2,
    }
}

/// Character counts reported when a stream closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamResult {
    pub read_count: Glui32,
    pub write_count: Glui32,
}

//=== Dispatch & Images ===================================================

glk_enum! {
    /// Classes of opaque objects tracked by the dispatch layer.
    pub enum DispatchClass {
        Window = 0,
        Stream = 1,
        Fileref = 2,
        Schannel = 3,
    }
}

glk_enum! {
    pub enum ImageAlign {
        InlineUp = 1,
        InlineDown = 2,
        InlineCenter = 3,
        MarginLeft = 4,
        MarginRight = 5,
    }
}

//=== Typography ==========================================================

glk_enum! {
    /// C1 control codes reused for ligatures and smart punctuation.
    pub enum Enc {
        LigFi = 128,
        LigFl = 129,
        LeftSingleQuote = 130,
        RightSingleQuote = 131,
        LeftDoubleQuote = 132,
        RightDoubleQuote = 133,
        EnDash = 134,
        EmDash = 135,
        /// Layout marker with no glyph.
        FlowBreak = 136,
    }
}

glk_enum! {
    /// Unicode counterparts of the [`Enc`] glyphs.
    pub enum UniChar {
        LigFi = 0xfb01,
        LigFl = 0xfb02,
        LeftSingleQuote = 0x2018,
        RightSingleQuote = 0x2019,
        LeftDoubleQuote = 0x201c,
        RightDoubleQuote = 0x201d,
        EnDash = 0x2013,
        EmDash = 0x2014,
    }
}

impl UniChar {
    pub fn as_char(self) -> char {
        char::from_u32(self as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl Enc {
    /// Unicode glyph for this code. `FlowBreak` has none.
    pub fn to_unicode(self) -> Option<UniChar> {
        Some(match self {
            Self::LigFi => UniChar::LigFi,
            Self::LigFl => UniChar::LigFl,
            Self::LeftSingleQuote => UniChar::LeftSingleQuote,
            Self::RightSingleQuote => UniChar::RightSingleQuote,
            Self::LeftDoubleQuote => UniChar::LeftDoubleQuote,
            Self::RightDoubleQuote => UniChar::RightDoubleQuote,
            Self::EnDash => UniChar::EnDash,
            Self::EmDash => UniChar::EmDash,
            Self::FlowBreak => return None,
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Glk Vocabulary
//=========================================================================
//
// Constants and plain records shared by every Glk-facing module. Event
// records live with the dispatcher in `core::events`.
//
//=========================================================================

pub mod datetime;
pub mod types;

pub use datetime::{GlkDate, GlkTimeval};
pub use types::{
    CharOutput, DispatchClass, Enc, FileMode, FileType, FileUsage, Gestalt, Glsi32, Glui32,
    ImageAlign, Justification, SeekMode, StreamResult, Style, StyleHint, UniChar, WinDirection,
    WinDivision, WinMethod, WinType, NUM_HINTS, NUM_STYLES,
};

//=========================================================================
// Glk Event Records
//
// The typed events handed to interpreter opcodes.
//
// An event is a small value: what happened, which window it concerns,
// and two numeric payloads whose meaning depends on the kind.
//
//   Kind          window        val1            val2
//   ──────────    ──────────    ─────────────   ───────────
//   Timer         -             0               0
//   CharInput     focused       keycode         0
//   LineInput     focused       line length     terminator
//   MouseInput    under ptr     x               y
//   Arrange       -             0               0
//   Redraw        -             0               0
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== WindowId ============================================================

/// Opaque handle to a window owned by the window layer.
///
/// Events carry handles, never references. A handle may outlive its
/// window; resolving it is the window layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "win#{}", self.0)
    }
}

//=== EventType ===========================================================

/// Glk event type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum EventType {
    /// Empty event code. Never returned by retrieval APIs.
    None = 0,
    Timer = 1,
    CharInput = 2,
    LineInput = 3,
    MouseInput = 4,
    Arrange = 5,
    Redraw = 6,
    SoundNotify = 7,
    Hyperlink = 8,
    VolumeNotify = 9,

    /// Session shutdown (runtime-specific code).
    Quit = 99,
}

impl EventType {
    /// Decodes a numeric Glk event type.
    pub fn from_u32(code: u32) -> Option<Self> {
        Some(match code {
            0 => Self::None,
            1 => Self::Timer,
            2 => Self::CharInput,
            3 => Self::LineInput,
            4 => Self::MouseInput,
            5 => Self::Arrange,
            6 => Self::Redraw,
            7 => Self::SoundNotify,
            8 => Self::Hyperlink,
            9 => Self::VolumeNotify,
            99 => Self::Quit,
            _ => return None,
        })
    }
}

impl From<EventType> for u32 {
    fn from(kind: EventType) -> Self {
        kind as u32
    }
}

//=== Event ===============================================================

/// A single dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    pub kind: EventType,
    pub window: Option<WindowId>,
    pub val1: u32,
    pub val2: u32,
}

impl Event {
    pub fn new(kind: EventType, window: Option<WindowId>, val1: u32, val2: u32) -> Self {
        Self { kind, window, val1, val2 }
    }

    /// An event with no window and zero payloads.
    pub fn bare(kind: EventType) -> Self {
        Self::new(kind, None, 0, 0)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

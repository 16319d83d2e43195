//=========================================================================
// Host Input Layer
//
// The seam between the host platform and the event dispatcher.
//
// Responsibilities:
// - Define the raw input vocabulary (`InputEvent`)
// - Define the `HostInput` source the dispatcher polls each cycle
// - Provide a scripted source for deterministic sessions and tests
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;

//=== Standard Library Imports ============================================

use std::collections::VecDeque;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers, MouseButton, ScrollDirection};

//=== HostInput Trait =====================================================

/// Source of raw host input, polled by the dispatcher.
///
/// Implementations never block. An unavailable source simply reports
/// `None`; the dispatcher treats that as "no input this cycle".
pub trait HostInput {
    /// Returns the next pending raw event, if any.
    fn poll_event(&mut self) -> Option<InputEvent>;
}

//=== ScriptedInput =======================================================

/// Host input fed from a pre-recorded script.
///
/// Each call to [`HostInput::poll_event`] yields the next scripted
/// event. Events can be grouped into frames with [`ScriptedInput::gap`]:
/// a gap makes the source report nothing for that many polls, which lets
/// a session replay input spread over time.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: VecDeque<Option<InputEvent>>,
}

impl ScriptedInput {
    /// Creates an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event to the script.
    pub fn push(&mut self, event: InputEvent) -> &mut Self {
        self.script.push_back(Some(event));
        self
    }

    /// Appends `polls` empty polls to the script.
    pub fn gap(&mut self, polls: usize) -> &mut Self {
        self.script.extend(std::iter::repeat(None).take(polls));
        self
    }

    /// Number of scripted entries (events and gaps) not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl HostInput for ScriptedInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.script.pop_front().flatten()
    }
}

impl<I: HostInput + ?Sized> HostInput for Box<I> {
    fn poll_event(&mut self) -> Option<InputEvent> {
        (**self).poll_event()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

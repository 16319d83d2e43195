//=========================================================================
// Input Buffer
//
// Collects converted host input between two frame boundaries, split
// into two categories: discrete and continuous.
//
// Responsibilities:
// - Keep discrete inputs (keys, buttons, wheel notches) in arrival order
// - Coalesce continuous inputs (pointer position, size, repaint) so only
//   the latest of each kind is sent
// - Hand both over in one piece via `drain()`
//
// Notes:
// Discrete inputs are never deduplicated: typing "ll" is two presses.
//=========================================================================

//=== Standard Library Imports ============================================
use std::collections::HashSet;

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================
//
// Transient event store for one frame of input.
//
// - `discrete`: ordered one-shot inputs
// - `continuous`: last-known value per continuous kind; `InputEvent`
//   equality ignores continuous payloads, so `replace` keeps the newest
//
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 64;
        const CONTINUOUS_BASE: usize = 4;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    //--- Event Handling ---------------------------------------------------
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        self.discrete.push(event);
    }

    /// Routes an event to the matching category.
    pub(crate) fn push(&mut self, event: InputEvent) {
        if event.is_continuous() {
            self.push_continuous(event);
        } else {
            self.push_discrete(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's (discrete, continuous) events and clears the
    // buffer. `None` when nothing was collected.
    //
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }
        let capacity = self.discrete.capacity();
        let discrete = std::mem::replace(&mut self.discrete, Vec::with_capacity(capacity));
        let continuous = self.continuous.drain().collect();
        Some((discrete, continuous))
    }

    //--- Requeue ----------------------------------------------------------
    //
    // Puts back a batch the session could not take yet. Its discrete
    // events go ahead of anything pushed since; a continuous kind that
    // was pushed again since keeps the newer value.
    //
    pub(crate) fn requeue(&mut self, discrete: Vec<InputEvent>, continuous: Vec<InputEvent>) {
        let newer = std::mem::replace(&mut self.discrete, discrete);
        self.discrete.extend(newer);

        for event in continuous {
            if !self.continuous.contains(&event) {
                self.continuous.insert(event);
            }
        }
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

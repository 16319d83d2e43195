//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-session interface types (messages and errors).
//
// These are the only values that cross the thread boundary between the
// winit event loop and the game session.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;
use winit::error::EventLoopError;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Messages sent from the platform to the session over the channel.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Input gathered during one host frame.
    ///
    /// - `discrete`: keys, buttons, wheel notches (order significant)
    /// - `continuous`: latest pointer position, size, repaint request
    ///
    /// Empty batches are never sent.
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window close requested by the user or the OS.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Fatal platform failures. If the event loop cannot run, the engine
/// cannot either.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] EventLoopError),

    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] EventLoopError),
}

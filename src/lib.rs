//=========================================================================
// Adventure Engine - Library Root
//
// Event dispatch and game-data adapters for classic adventure runtimes.
//
// Responsibilities:
// - Expose the session-side systems (`core`): events, Glk vocabulary,
//   inventory and room data
// - Expose the windowed runtime (`Engine`) for hosts that want winit to
//   own the window
// - Keep OS integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use adventure_engine::prelude::*;
//
// EngineBuilder::new()
//     .build()
//     .run(NoWindows, |session| session.wait_for_press())
//     .unwrap();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything the game session touches. It can be driven
// without a window by any `HostInput`.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the winit integration (window, event loop, input
// conversion) and is not part of the public API surface.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::{EventCollector, PlatformError};
pub use engine::{Engine, EngineBuilder, Session};

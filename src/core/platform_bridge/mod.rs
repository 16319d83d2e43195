//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the game session.
//
// The session only ever sees `HostInput`; the platform only ever sees a
// channel sender. Either side can be swapped without touching the other.
//
// Components:
// - `interface`: channel messages and error definitions
// - `event_collector`: session-side `HostInput` over the channel
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub use event_collector::EventCollector;
pub(crate) use interface::PlatformEvent;
pub use interface::PlatformError;

//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use adventure_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine runtime
pub use crate::engine::{Engine, EngineBuilder, Session};

// Event dispatch
pub use crate::core::events::{
    BasicWindow, Clock, DispatcherBuilder, Event, EventDispatcher, EventType, Keycode, ManualClock,
    NoWindows, PointerInterest, SystemClock, WindowId, WindowLayer,
};

// Host input
pub use crate::core::input::{HostInput, InputEvent, KeyCode, Modifiers, MouseButton, ScriptedInput};

// Game data
pub use crate::core::inventory::{Inventory, InventoryItem, ObjectId, SceneId};
pub use crate::core::room::{DirLoader, ResourceLoader, Room};

//=========================================================================
// Events
//=========================================================================
//
// Glk event model and the dispatcher that feeds it.
//
// Layout:
//   event      → Event, EventType, WindowId
//   keycode    → special keycode sentinels
//   queue      → FIFO event queue
//   clock      → time sources, frame counter, periodic timer
//   cursor     → pointer images
//   window     → window-layer seam used for input routing
//   keyboard   → host key → keycode table
//   dispatcher → EventDispatcher and its builder
//
//=========================================================================

pub mod clock;
pub mod cursor;
pub mod dispatcher;
pub mod event;
pub mod keycode;
pub mod queue;
pub mod window;

mod keyboard;

pub use clock::{Clock, ManualClock, SystemClock, GAME_FRAME_RATE, GAME_FRAME_TIME};
pub use cursor::{CursorError, CursorId, CursorImage, CursorPixel, CursorSet};
pub use dispatcher::{DispatchError, DispatcherBuilder, EventDispatcher, PointerPhase, PointerSample};
pub use event::{Event, EventType, WindowId};
pub use keycode::{Keycode, KEYCODE_MAXVAL};
pub use queue::EventQueue;
pub use window::{BasicWindow, InputRequest, LineStatus, NoWindows, PointerInterest, WindowLayer};

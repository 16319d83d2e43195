//=========================================================================
// Core Systems
//
// Everything that runs on the session side of the engine.
//
// Responsibilities:
// - `events`: Glk event model, event dispatcher, frame clock and timer
// - `input`: raw host input vocabulary and the `HostInput` seam
// - `glk`: Glk constants, bit-field types and date/time conversions
// - `inventory`: per-scene inventory bags and slot layout
// - `room`: `.RDF` room data files
//
// Notes:
// None of these modules touch the OS. The platform layer reaches them
// only through `platform_bridge`, which carries input across the thread
// boundary as `HostInput`.
//
//=========================================================================

pub mod events;
pub mod glk;
pub mod input;
pub mod inventory;
pub mod room;

pub(crate) mod platform_bridge;

//=========================================================================
// Adventure Engine Runtime
//
// Main entry point when the engine owns a real window.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run(windows, session)──>  [Runtime]
//         │                          │
//         ├─ with_frame_rate()       ├─ spawns the session thread
//         ├─ with_channel_capacity() │    (EventDispatcher over the channel)
//         ├─ with_title()            └─ runs the platform on this thread,
//         └─ with_window_size()         blocks until the window closes
// ```
//
// Embedders that bring their own host skip this module entirely and
// build an `EventDispatcher` over their own `HostInput`.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::events::{DispatcherBuilder, EventDispatcher, SystemClock, WindowLayer, GAME_FRAME_RATE};
use crate::core::platform_bridge::{EventCollector, PlatformError, PlatformEvent};
use crate::platform::{Platform, WindowConfig};

//=== Session =============================================================

/// The dispatcher handed to the session closure by [`Engine::run`].
pub type Session<W> = EventDispatcher<EventCollector, W, SystemClock>;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Frame rate**: 100 ticks per second
/// - **Channel capacity**: 128 batches
/// - **Title**: "Adventure"
/// - **Window size**: 640x400
///
/// # Examples
///
/// ```no_run
/// use adventure_engine::EngineBuilder;
/// use adventure_engine::core::events::{EventType, NoWindows};
///
/// EngineBuilder::new()
///     .with_title("Demo")
///     .with_window_size(320, 200)
///     .build()
///     .run(NoWindows, |session| {
///         session.wait_for_press();
///         while let Some(event) = session.get_event(true) {
///             if event.kind == EventType::Quit {
///                 break;
///             }
///         }
///     })
///     .expect("platform failed");
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    frame_rate: u32,
    channel_capacity: usize,
    title: String,
    window_size: (u32, u32),
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            frame_rate: GAME_FRAME_RATE,
            channel_capacity: 128,
            title: "Adventure".to_string(),
            window_size: (640, 400),
        }
    }

    /// Sets the session's frame rate in ticks per second.
    ///
    /// The frame rate drives redraw/arrange coalescing and the play-time
    /// counter. It is independent of the monitor refresh rate.
    ///
    /// Default: 100
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= hz <= 1000`.
    pub fn with_frame_rate(mut self, hz: u32) -> Self {
        assert!((1..=1000).contains(&hz), "Frame rate must be between 1 and 1000, got {}", hz);
        self.frame_rate = hz;
        self
    }

    /// Sets the channel capacity for platform → session communication.
    ///
    /// Each slot holds one frame's batch of input. When the session falls
    /// this far behind, further batches are dropped.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial inner size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be non-zero, got {}x{}", width, height);
        self.window_size = (width, height);
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine ({} Hz, channel: {}, window: {}x{})",
            self.frame_rate, self.channel_capacity, self.window_size.0, self.window_size.1
        );

        Engine {
            frame_rate: self.frame_rate,
            channel_capacity: self.channel_capacity,
            window: WindowConfig {
                title: self.title,
                width: self.window_size.0,
                height: self.window_size.1,
            },
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Adventure engine runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► Session Thread
///   │     └─► EventDispatcher<EventCollector, W, SystemClock>
///   │           └─► game / interpreter closure
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling
///
/// Communication: bounded crossbeam channel (PlatformEvent)
/// ```
#[derive(Debug)]
pub struct Engine {
    frame_rate: u32,
    channel_capacity: usize,
    window: WindowConfig,
}

impl Engine {
    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the bounded channel for platform → session communication
    /// 2. Spawns the session thread, which builds the dispatcher and hands
    ///    it to `session`
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: the session sees `Quit`, the platform exits,
    ///    and the session thread is joined
    ///
    /// A session that returns early leaves the window open until the user
    /// closes it. A session that panics is logged, not propagated.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run<W, F>(self, windows: W, session: F) -> Result<(), PlatformError>
    where
        W: WindowLayer + Send + 'static,
        F: FnOnce(&mut Session<W>) + Send + 'static,
    {
        info!("Starting engine runtime ({} Hz)", self.frame_rate);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        //--- 2. Spawn the session thread ----------------------------------
        let frame_rate = self.frame_rate;
        let session_handle = thread::spawn(move || {
            let collector = EventCollector::new(rx);
            let built = DispatcherBuilder::new()
                .with_frame_rate(frame_rate)
                .build(collector, windows, SystemClock::new());

            match built {
                Ok(mut dispatcher) => {
                    session(&mut dispatcher);
                    info!("Session finished");
                }
                Err(e) => error!("Session could not start: {}", e),
            }
        });
        info!("Session thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.window);
        let result = platform.run();

        match &result {
            Ok(()) => info!("Platform event loop exited"),
            Err(e) => error!("Platform error: {}", e),
        }

        //--- 4. Cleanup: wait for the session to see the disconnect -------
        if let Err(e) = session_handle.join() {
            error!("Session thread panicked: {:?}", e);
        }

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.frame_rate, 100);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.title, "Adventure");
        assert_eq!(builder.window_size, (640, 400));
    }

    #[test]
    fn builder_with_frame_rate() {
        let builder = EngineBuilder::new().with_frame_rate(60);
        assert_eq!(builder.frame_rate, 60);
    }

    #[test]
    #[should_panic(expected = "Frame rate must be between 1 and 1000")]
    fn builder_with_frame_rate_panics_on_zero() {
        EngineBuilder::new().with_frame_rate(0);
    }

    #[test]
    #[should_panic(expected = "Frame rate must be between 1 and 1000")]
    fn builder_with_frame_rate_panics_above_limit() {
        EngineBuilder::new().with_frame_rate(1001);
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = EngineBuilder::new().with_channel_capacity(256);
        assert_eq!(builder.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Window size must be non-zero")]
    fn builder_with_window_size_panics_on_zero() {
        EngineBuilder::new().with_window_size(0, 200);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_frame_rate(50)
            .with_channel_capacity(16)
            .with_title("Tug")
            .with_window_size(320, 200)
            .build();

        assert_eq!(engine.frame_rate, 50);
        assert_eq!(engine.channel_capacity, 16);
        assert_eq!(engine.window.title, "Tug");
        assert_eq!((engine.window.width, engine.window.height), (320, 200));
    }
}

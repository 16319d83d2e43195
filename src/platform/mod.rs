//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the game session via a channel.
//
// Architecture:
// ```text
//  Main Thread:                     Session Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop        │    │  EventCollector      │
//  │   ↓                      │    │   (HostInput)        │
//  │  InputProcessor          │    │   ↓                  │
//  │   ├─ Converts Winit      │    │  EventDispatcher     │
//  │   ├─ Tracks modifiers    │    │   ↓                  │
//  │   └─ Tracks pointer      │    │  Game / interpreter  │
//  │   ↓                      │    └──────────────────────┘
//  │  InputBuffer             │             ↑
//  │   ├─ discrete: Vec<>     │             │
//  │   └─ continuous: Set<>   │             │
//  │   ↓                      │             │
//  │  RedrawRequested (flush) │             │
//  │   ↓                      │             │
//  │  Channel ────────────────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
// ```
//
// Frame boundary: RedrawRequested. All buffered input is sent as one
// batch; empty batches are not sent. The session paces itself with its
// own frame clock, independent of the monitor refresh rate.
//
// Key Design Decisions:
// - **Sticky modifiers**: modifier state persists until winit reports a
//   change
// - **Never block**: batches go out with `try_send`. If the session falls
//   behind, input stays buffered and is retried next frame; if it ends
//   first, the platform logs and keeps running so the window can still
//   be closed
// - **Main thread**: winit requires it on macOS/iOS, so this runs on the
//   thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::input::InputEvent;
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== WindowConfig ========================================================

/// Initial window settings.
#[derive(Debug, Clone)]
pub(crate) struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

//=== Platform ============================================================

/// Window manager and input aggregator.
///
/// Not `Send`: it stays on the main thread and talks to the session only
/// through the channel sender.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Buffers input until the frame boundary.
    buffer: InputBuffer,

    /// Channel to the session thread.
    event_sender: Sender<PlatformEvent>,

    /// Converts Winit events to engine InputEvents.
    input_processor: InputProcessor,

    config: WindowConfig,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates the platform. The window is created lazily in `resumed()`.
    pub fn new(event_sender: Sender<PlatformEvent>, config: WindowConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
            config,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop.run_app(&mut self).map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends everything buffered this frame as one batch.
    ///
    /// Never blocks the event loop. A full channel (session busy) keeps
    /// the batch buffered for the next frame; only a disconnected channel
    /// (session ended) drops it.
    fn flush_input_buffer(&mut self) {
        if let Some((discrete, continuous)) = self.buffer.drain() {
            let discrete_count = discrete.len();
            let continuous_count = continuous.len();

            trace!(
                target: "platform::input",
                "Flushing {} discrete + {} continuous events",
                discrete_count,
                continuous_count
            );

            match self.event_sender.try_send(PlatformEvent::Inputs { discrete, continuous }) {
                Ok(()) => {}
                Err(TrySendError::Full(PlatformEvent::Inputs { discrete, continuous })) => {
                    debug!(
                        target: "platform::input",
                        "Session backlog full, holding {} events for the next frame",
                        discrete_count + continuous_count
                    );
                    self.buffer.requeue(discrete, continuous);
                }
                Err(TrySendError::Full(_)) => {}
                Err(TrySendError::Disconnected(_)) => warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    discrete_count + continuous_count
                ),
            }
        }
    }

    /// If the close message does not fit, dropping the sender when the
    /// loop exits still reaches the session as a disconnect.
    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.flush_input_buffer();
        if self.event_sender.try_send(PlatformEvent::WindowClosed).is_err() {
            debug!(target: "platform", "Close message not delivered");
        }
        event_loop.exit();
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first activation (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    size.width,
                    size.height,
                    window.scale_factor()
                );
                self.buffer.push(self.input_processor.process_resize(size));
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.close(event_loop);
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.close(event_loop);
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.process_mouse_move(position.x, position.y);
                self.buffer.push(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(key_event) {
                    Some(event) => self.buffer.push(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push(event);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(event) = self.input_processor.process_wheel(*delta) {
                    self.buffer.push(event);
                }
            }

            WindowEvent::Resized(size) => {
                self.buffer.push(self.input_processor.process_resize(*size));
            }

            WindowEvent::Occluded(false) => {
                self.buffer.push(InputEvent::RedrawRequested);
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary
                self.flush_input_buffer();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crossbeam_channel::{bounded, unbounded};

    fn config() -> WindowConfig {
        WindowConfig { title: "test".into(), width: 320, height: 200 }
    }

    #[test]
    fn platform_creation() {
        let (tx, _rx) = unbounded();
        let platform = Platform::new(tx, config());
        assert!(platform.window().is_none(), "Window should be created lazily");
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, config());

        platform.flush_input_buffer();

        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, config());

        platform.buffer.push(InputEvent::key(KeyCode::Enter, None));
        platform.buffer.push(InputEvent::MouseMoved { x: 1, y: 2 });

        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                assert_eq!(discrete, vec![InputEvent::key(KeyCode::Enter, None)]);
                assert_eq!(continuous.len(), 1);
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, config());
        platform.buffer.push(InputEvent::character('a'));

        drop(rx);

        // Logs, does not panic
        platform.flush_input_buffer();
        assert!(platform.buffer.is_empty());
    }

    #[test]
    fn presses_survive_a_full_channel() {
        let (tx, rx) = bounded(1);
        let mut platform = Platform::new(tx, config());

        platform.buffer.push(InputEvent::MouseMoved { x: 1, y: 1 });
        platform.flush_input_buffer();

        // Channel full: the presses wait in the buffer
        platform.buffer.push(InputEvent::character('a'));
        platform.buffer.push(InputEvent::MouseMoved { x: 2, y: 2 });
        platform.flush_input_buffer();
        platform.buffer.push(InputEvent::character('b'));
        platform.buffer.push(InputEvent::MouseMoved { x: 3, y: 3 });
        platform.flush_input_buffer();

        assert_eq!(rx.len(), 1);
        assert_eq!(platform.buffer.len(), 3);

        // Session catches up
        assert!(rx.try_recv().is_ok());
        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                assert_eq!(discrete, vec![InputEvent::character('a'), InputEvent::character('b')]);
                assert_eq!(continuous.len(), 1);
                assert!(matches!(continuous[0], InputEvent::MouseMoved { x: 3, y: 3 }));
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
        assert!(platform.buffer.is_empty());
    }

    #[test]
    fn multiple_flushes_clear_buffer() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, config());

        platform.buffer.push(InputEvent::character('a'));
        platform.flush_input_buffer();
        platform.flush_input_buffer();

        assert!(rx.try_recv().is_ok(), "First flush should send");
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<PlatformError>();
    }
}

//=========================================================================
// Event Dispatcher
//=========================================================================
//
// Turns host input and game requests into the one-at-a-time event
// stream interpreter opcodes consume.
//
// Architecture:
// ```text
//   HostInput ──poll──► translate() ──► polled queue ─┐
//                                                     ├─► get_event()
//   store() ──────────────────────────► logged queue ─┘   (logged first)
//
//   Clock ──► FrameClock ──tick──► Arrange / Redraw (coalesced)
//        └──► TimerState ──expiry──► Timer
// ```
//
// Poll cycle (get_event with polled = true):
//   1. Drain host input (bounded) and translate each raw event
//   2. Frame boundary check: count the frame, flush arrange/redraw flags
//   3. Timer check: at most one Timer event, then reschedule
//   4. Retrieve: logged queue first, then polled queue
//
// Nothing here reports errors to callers. Missing input, an idle timer
// and empty queues all come back as `None`.
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, info, trace, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::clock::{Clock, FrameClock, TimerState, GAME_FRAME_RATE};
use super::cursor::{CursorError, CursorId, CursorImage, CursorSet};
use super::event::{Event, EventType, WindowId};
use super::keyboard::{translate_key, wheel_keycode};
use super::queue::EventQueue;
use super::window::{InputRequest, LineStatus, PointerInterest, WindowLayer};
use crate::core::input::{HostInput, InputEvent, MouseButton};

//=== Constants ===========================================================

/// Upper bound on raw events translated per poll cycle.
const MAX_INPUT_PER_POLL: usize = 100;

//=== DispatchError =======================================================

/// Dispatcher construction errors. Fatal for the session.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("cursor resources failed to load: {0}")]
    Cursor(#[from] CursorError),
}

//=== Pointer Samples =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Pressed(MouseButton),
    Released(MouseButton),
    Moved,
}

/// Most recent raw pointer activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSample {
    pub phase: PointerPhase,
    pub x: u32,
    pub y: u32,
}

//=== DispatcherBuilder ===================================================

/// Builder for configuring an [`EventDispatcher`].
///
/// # Default Values
///
/// - **Frame rate**: 100 ticks per second (10 ms frames)
/// - **Cursors**: built-in arrow, I-beam and hand
///
/// # Examples
///
/// ```
/// use adventure_engine::core::events::{DispatcherBuilder, ManualClock, NoWindows};
/// use adventure_engine::core::input::ScriptedInput;
///
/// let dispatcher = DispatcherBuilder::new()
///     .with_frame_rate(60)
///     .build(ScriptedInput::new(), NoWindows, ManualClock::new())
///     .expect("built-in cursors load");
///
/// assert_eq!(dispatcher.total_play_ticks(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct DispatcherBuilder {
    frame_rate: u32,
    cursors: Option<CursorSet>,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self { frame_rate: GAME_FRAME_RATE, cursors: None }
    }

    /// Sets the frame rate in ticks per second.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= hz <= 1000`.
    pub fn with_frame_rate(mut self, hz: u32) -> Self {
        assert!((1..=1000).contains(&hz), "Frame rate must be between 1 and 1000, got {}", hz);
        self.frame_rate = hz;
        self
    }

    /// Replaces the built-in cursor images.
    pub fn with_cursors(mut self, cursors: CursorSet) -> Self {
        self.cursors = Some(cursors);
        self
    }

    /// Builds the dispatcher. Loads the cursor images if none were given.
    pub fn build<H, W, C>(self, host: H, windows: W, clock: C) -> Result<EventDispatcher<H, W, C>, DispatchError>
    where
        H: HostInput,
        W: WindowLayer,
        C: Clock,
    {
        let cursors = match self.cursors {
            Some(cursors) => cursors,
            None => CursorSet::builtin()?,
        };
        let now = clock.now_millis();

        info!(target: "events", "Event dispatcher ready ({} Hz)", self.frame_rate);

        Ok(EventDispatcher {
            host,
            windows,
            clock,
            polled: EventQueue::new(),
            logged: EventQueue::new(),
            frames: FrameClock::new(self.frame_rate, now),
            timer: TimerState::default(),
            redraw: false,
            arrange: false,
            cursor: CursorId::Arrow,
            cursors,
            quit: false,
            last_pointer: None,
        })
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== EventDispatcher =====================================================

/// Event source for one game session.
///
/// Owns both event queues, the frame and timer clocks and the cursor
/// state. Single-threaded: the owning session drives it from its frame
/// loop.
pub struct EventDispatcher<H, W, C> {
    host: H,
    windows: W,
    clock: C,

    //--- Queues ----------------------------------------------------------
    polled: EventQueue,
    logged: EventQueue,

    //--- Time ------------------------------------------------------------
    frames: FrameClock,
    timer: TimerState,

    //--- Presentation ----------------------------------------------------
    redraw: bool,
    arrange: bool,
    cursor: CursorId,
    cursors: CursorSet,

    //--- Session ---------------------------------------------------------
    quit: bool,
    last_pointer: Option<PointerSample>,
}

impl<H: HostInput, W: WindowLayer, C: Clock> EventDispatcher<H, W, C> {
    /// Builds a dispatcher with default settings.
    pub fn new(host: H, windows: W, clock: C) -> Result<Self, DispatchError> {
        DispatcherBuilder::new().build(host, windows, clock)
    }

    //=====================================================================
    // Retrieval
    //=====================================================================

    /// Returns the next pending event.
    ///
    /// With `polled = true` a full poll cycle runs first and both queues
    /// are consulted, logged events before polled ones. With
    /// `polled = false` only the logged queue is read and no host input,
    /// frame or timer state is touched.
    pub fn get_event(&mut self, polled: bool) -> Option<Event> {
        if !polled {
            return self.logged.retrieve();
        }

        self.poll_cycle();

        let event = self.logged.retrieve().or_else(|| self.polled.retrieve());
        if let Some(ev) = &event {
            trace!(target: "events", "Dispatching {:?}", ev);
        }
        event
    }

    /// Queues a game-generated event for later retrieval.
    pub fn store(&mut self, kind: EventType, window: Option<WindowId>, val1: u32, val2: u32) {
        if kind == EventType::None {
            debug!(target: "events", "Ignoring store of an empty event");
            return;
        }
        self.logged.push(Event::new(kind, window, val1, val2));
    }

    /// Blocks cooperatively until a key or mouse button is pressed.
    ///
    /// Every other raw input seen meanwhile is discarded. Frames keep
    /// advancing at the configured rate. A host quit also ends the wait
    /// and raises [`quit_requested`](Self::quit_requested). Once quit has
    /// been raised the wait returns at once, since the host reports quit
    /// only one time.
    pub fn wait_for_press(&mut self) {
        debug!(target: "events", "Waiting for key or button press");
        loop {
            if self.quit {
                debug!(target: "events", "Quit pending, not waiting");
                return;
            }

            while let Some(raw) = self.host.poll_event() {
                match raw {
                    InputEvent::Quit => {
                        self.raise_quit();
                        return;
                    }
                    ev if ev.is_press() => {
                        trace!(target: "events", "Press received: {:?}", ev);
                        return;
                    }
                    ev => trace!(target: "events", "Discarding {:?} while waiting", ev),
                }
            }

            self.clock.delay(self.frames.frame_time());
            self.check_for_next_frame();
        }
    }

    //=====================================================================
    // Timer
    //=====================================================================

    /// Sets the periodic timer interval. `0` turns the timer off.
    pub fn set_timer_interval(&mut self, millis: u32) {
        let now = self.clock.now_millis();
        self.timer.set_interval(u64::from(millis), now);
    }

    /// Returns `true` if the timer is running and its expiry has passed.
    pub fn is_timer_expired(&self) -> bool {
        self.timer.is_expired(self.clock.now_millis())
    }

    /// Instant of the next timer expiry, if the timer is running.
    pub fn next_timer_expiry(&self) -> Option<u64> {
        self.timer.next_expiry()
    }

    //=====================================================================
    // Frames
    //=====================================================================

    /// Total frames played.
    pub fn total_play_ticks(&self) -> u32 {
        self.frames.counter()
    }

    /// Restores the frame counter (e.g. from a saved game).
    pub fn set_total_play_ticks(&mut self, frames: u32) {
        self.frames.set_counter(frames);
    }

    //=====================================================================
    // Presentation
    //=====================================================================

    /// Flags the screen for redrawing. Coalesced to one `Redraw` event
    /// per frame.
    pub fn redraw(&mut self) {
        self.redraw = true;
    }

    /// Pending redraw flag, read by the rendering pass.
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Selects the active cursor. A change raises the redraw flag; the
    /// rendering pass picks up the new image from there.
    pub fn set_cursor(&mut self, id: CursorId) {
        if id != self.cursor {
            debug!(target: "events", "Cursor {:?} -> {:?}", self.cursor, id);
            self.cursor = id;
            self.redraw = true;
        }
    }

    pub fn cursor(&self) -> CursorId {
        self.cursor
    }

    pub fn cursor_image(&self) -> &CursorImage {
        self.cursors.get(self.cursor)
    }

    //=====================================================================
    // Accessors
    //=====================================================================

    /// `true` once the host reported that the session is ending.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn last_pointer(&self) -> Option<PointerSample> {
        self.last_pointer
    }

    pub fn windows(&self) -> &W {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut W {
        &mut self.windows
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Number of events waiting in (polled, logged) queues.
    pub fn pending(&self) -> (usize, usize) {
        (self.polled.len(), self.logged.len())
    }

    //=====================================================================
    // Poll Cycle
    //=====================================================================

    fn poll_cycle(&mut self) {
        let mut drained = 0;
        while drained < MAX_INPUT_PER_POLL {
            match self.host.poll_event() {
                Some(raw) => {
                    self.translate(raw);
                    drained += 1;
                }
                None => break,
            }
        }
        if drained >= MAX_INPUT_PER_POLL {
            warn!(target: "events", "Input backlog: translated {} events this poll", drained);
        }

        self.check_for_next_frame();

        let now = self.clock.now_millis();
        if self.timer.is_expired(now) {
            trace!(target: "events::timer", "Timer fired at {}", now);
            self.polled.push(Event::bare(EventType::Timer));
            self.timer.reschedule(now);
        }
    }

    fn check_for_next_frame(&mut self) {
        if !self.frames.check(self.clock.now_millis()) {
            return;
        }
        if std::mem::take(&mut self.arrange) {
            self.polled.push(Event::bare(EventType::Arrange));
        }
        if std::mem::take(&mut self.redraw) {
            self.polled.push(Event::bare(EventType::Redraw));
        }
    }

    //--- Translation ------------------------------------------------------

    fn translate(&mut self, raw: InputEvent) {
        match raw {
            InputEvent::KeyDown { key, text, modifiers } => {
                match translate_key(key, text, modifiers) {
                    Some(code) => self.deliver_key(code),
                    None => trace!(target: "events", "Unmapped key {:?} ({:?})", key, modifiers),
                }
            }
            InputEvent::KeyUp { .. } => {}
            InputEvent::MouseWheel(direction) => self.deliver_key(wheel_keycode(direction)),
            InputEvent::MouseButtonDown { button, x, y } => {
                self.deliver_pointer(PointerPhase::Pressed(button), x, y)
            }
            InputEvent::MouseButtonUp { button, x, y } => {
                self.deliver_pointer(PointerPhase::Released(button), x, y)
            }
            InputEvent::MouseMoved { x, y } => self.deliver_pointer(PointerPhase::Moved, x, y),
            InputEvent::Resized { width, height } => {
                debug!(target: "events", "Screen resized to {}x{}", width, height);
                self.arrange = true;
                self.redraw = true;
            }
            InputEvent::RedrawRequested => self.redraw = true,
            InputEvent::Quit => self.raise_quit(),
        }
    }

    fn deliver_key(&mut self, code: u32) {
        let Some(window) = self.windows.focused_window() else {
            trace!(target: "events", "No focused window for key {:#x}", code);
            return;
        };

        match self.windows.input_request(window) {
            Some(InputRequest::Char) => {
                self.polled.push(Event::new(EventType::CharInput, Some(window), code, 0));
                self.windows.char_delivered(window);
            }
            Some(InputRequest::Line) => {
                if let LineStatus::Complete { length, terminator } = self.windows.edit_line(window, code) {
                    self.polled.push(Event::new(EventType::LineInput, Some(window), length, terminator));
                }
            }
            None => trace!(target: "events", "{} has no input request, dropping key", window),
        }
    }

    fn deliver_pointer(&mut self, phase: PointerPhase, x: u32, y: u32) {
        self.last_pointer = Some(PointerSample { phase, x, y });

        let Some(window) = self.windows.window_at(x, y) else {
            return;
        };
        let wanted = match self.windows.pointer_interest(window) {
            PointerInterest::All => true,
            PointerInterest::Clicks => !matches!(phase, PointerPhase::Moved),
            PointerInterest::None => false,
        };
        if wanted {
            self.polled.push(Event::new(EventType::MouseInput, Some(window), x, y));
        }
    }

    fn raise_quit(&mut self) {
        if !self.quit {
            info!(target: "events", "Host requested quit");
            self.quit = true;
            self.polled.push(Event::bare(EventType::Quit));
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Frame & Timer Clock
//=========================================================================
//
// Time sources and the two time-driven pieces of dispatcher state.
//
// Architecture:
//   Clock (now_millis / delay)
//     ├─ FrameClock  → frame counter, one tick per frame boundary
//     └─ TimerState  → periodic timer expiry
//
// Frame boundary: now - prior_frame >= frame_time. The counter advances
// once per boundary check, however late the check is.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use log::debug;

//=== Constants ===========================================================

/// Default frame rate in ticks per second.
pub const GAME_FRAME_RATE: u32 = 100;

/// Default frame period in milliseconds.
pub const GAME_FRAME_TIME: u64 = 1000 / GAME_FRAME_RATE as u64;

//=== Clock Trait =========================================================

/// Monotonic millisecond time source.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin.
    fn now_millis(&self) -> u64;

    /// Yields the calling flow for `millis` milliseconds.
    fn delay(&self, millis: u64);
}

//=== SystemClock =========================================================

/// Wall-clock time measured from construction.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn delay(&self, millis: u64) {
        thread::sleep(Duration::from_millis(millis));
    }
}

//=== ManualClock =========================================================

/// Simulated time. Clones share the same instant.
///
/// `delay` advances time instead of sleeping, so cooperative loops run
/// at full speed against simulated frames.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward by `millis`.
    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }

    /// Jumps to an absolute instant.
    pub fn set(&self, millis: u64) {
        self.now.store(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }

    fn delay(&self, millis: u64) {
        self.advance(millis);
    }
}

//=== FrameClock ==========================================================

/// Fixed-rate frame counter.
#[derive(Debug, Clone)]
pub(crate) struct FrameClock {
    frame_time: u64,
    prior_frame: u64,
    counter: u32,
}

impl FrameClock {
    pub(crate) fn new(frame_rate: u32, now: u64) -> Self {
        Self {
            frame_time: 1000 / u64::from(frame_rate.max(1)),
            prior_frame: now,
            counter: 0,
        }
    }

    pub(crate) fn frame_time(&self) -> u64 {
        self.frame_time
    }

    /// Advances the counter if a frame boundary has been reached.
    /// Returns `true` on a tick.
    pub(crate) fn check(&mut self, now: u64) -> bool {
        if now.saturating_sub(self.prior_frame) >= self.frame_time {
            self.counter = self.counter.wrapping_add(1);
            self.prior_frame = now;
            true
        } else {
            false
        }
    }

    pub(crate) fn counter(&self) -> u32 {
        self.counter
    }

    pub(crate) fn set_counter(&mut self, frames: u32) {
        self.counter = frames;
    }
}

//=== TimerState ==========================================================

/// Periodic timer. An interval of 0 disables it.
#[derive(Debug, Clone, Default)]
pub(crate) struct TimerState {
    interval: u64,
    next_expiry: u64,
}

impl TimerState {
    pub(crate) fn set_interval(&mut self, millis: u64, now: u64) {
        self.interval = millis;
        self.next_expiry = now + millis;
        debug!(target: "events::timer", "Timer interval set to {}ms (next at {})", millis, self.next_expiry);
    }

    pub(crate) fn interval(&self) -> u64 {
        self.interval
    }

    pub(crate) fn next_expiry(&self) -> Option<u64> {
        (self.interval != 0).then_some(self.next_expiry)
    }

    pub(crate) fn is_expired(&self, now: u64) -> bool {
        self.interval != 0 && now >= self.next_expiry
    }

    /// Schedules the next period after a fire. Missed periods are
    /// skipped rather than replayed.
    pub(crate) fn reschedule(&mut self, now: u64) {
        let next = self.next_expiry + self.interval;
        self.next_expiry = if next > now { next } else { now + self.interval };
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // Clock Tests
    //=====================================================================

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let view = clock.clone();

        clock.advance(25);
        assert_eq!(view.now_millis(), 25);

        view.delay(10);
        assert_eq!(clock.now_millis(), 35);

        clock.set(5);
        assert_eq!(view.now_millis(), 5);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_millis();
        clock.delay(2);
        assert!(clock.now_millis() >= a + 2);
    }

    //=====================================================================
    // FrameClock Tests
    //=====================================================================

    #[test]
    fn default_frame_time_is_ten_millis() {
        assert_eq!(GAME_FRAME_TIME, 10);
        assert_eq!(FrameClock::new(GAME_FRAME_RATE, 0).frame_time(), 10);
    }

    #[test]
    fn frame_ticks_on_boundary_only() {
        let mut frames = FrameClock::new(100, 0);

        assert!(!frames.check(9));
        assert!(frames.check(10));
        assert!(!frames.check(15));
        assert!(frames.check(20));
        assert_eq!(frames.counter(), 2);
    }

    #[test]
    fn late_check_counts_one_frame() {
        let mut frames = FrameClock::new(100, 0);
        assert!(frames.check(95));
        assert_eq!(frames.counter(), 1);
        assert!(!frames.check(100));
    }

    #[test]
    fn counter_can_be_restored() {
        let mut frames = FrameClock::new(100, 0);
        frames.set_counter(4_000);
        frames.check(10);
        assert_eq!(frames.counter(), 4_001);
    }

    //=====================================================================
    // TimerState Tests
    //=====================================================================

    #[test]
    fn disabled_timer_never_expires() {
        let timer = TimerState::default();
        assert!(!timer.is_expired(u64::MAX));
        assert_eq!(timer.next_expiry(), None);
    }

    #[test]
    fn timer_expires_at_interval() {
        let mut timer = TimerState::default();
        timer.set_interval(100, 0);

        assert!(!timer.is_expired(99));
        assert!(timer.is_expired(100));
    }

    #[test]
    fn reschedule_is_periodic() {
        let mut timer = TimerState::default();
        timer.set_interval(100, 0);

        timer.reschedule(100);
        assert_eq!(timer.next_expiry(), Some(200));

        timer.reschedule(205);
        assert_eq!(timer.next_expiry(), Some(300));
    }

    #[test]
    fn reschedule_skips_missed_periods() {
        let mut timer = TimerState::default();
        timer.set_interval(100, 0);

        timer.reschedule(450);
        assert_eq!(timer.next_expiry(), Some(550));
        assert!(!timer.is_expired(450));
    }

    #[test]
    fn zero_interval_disables() {
        let mut timer = TimerState::default();
        timer.set_interval(50, 0);
        timer.set_interval(0, 10);
        assert!(!timer.is_expired(10_000));
        assert_eq!(timer.interval(), 0);
    }
}

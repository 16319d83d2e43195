//=========================================================================
// Event Collector
//=========================================================================
//
// Session-side end of the platform channel, exposed as `HostInput`.
//
// Architecture:
//   Receiver<PlatformEvent> → refill() → pending (VecDeque) → poll_event()
//
// Each refill drains a bounded number of channel messages so a flooding
// platform cannot starve the session. Within a batch, discrete events
// come before continuous ones.
//
// Shutdown: `WindowClosed` or a disconnected channel yields exactly one
// `InputEvent::Quit`, then the collector stays silent.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::VecDeque;

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::{HostInput, InputEvent};

//=== Constants ===========================================================

const MAX_MESSAGES_PER_REFILL: usize = 100;

//=== EventCollector ======================================================

/// Channel-fed host input. Created by [`Engine`](crate::Engine) for the
/// session thread.
pub struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    pending: VecDeque<InputEvent>,
    closed: bool,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            pending: VecDeque::with_capacity(64),
            closed: false,
        }
    }

    /// `true` once the platform has gone away.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn refill(&mut self) {
        let mut drained = 0;

        while drained < MAX_MESSAGES_PER_REFILL && !self.closed {
            match self.receiver.try_recv() {
                Ok(message) => {
                    self.handle_message(message);
                    drained += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!(target: "platform", "Platform channel disconnected");
                    self.close();
                }
            }
        }

        if drained >= MAX_MESSAGES_PER_REFILL {
            warn!(target: "platform", "Platform backlog: drained {} messages in one refill", drained);
        }
    }

    fn handle_message(&mut self, message: PlatformEvent) {
        match message {
            PlatformEvent::Inputs { discrete, continuous } => {
                debug!(
                    target: "platform::input",
                    "Received {} discrete + {} continuous events",
                    discrete.len(),
                    continuous.len()
                );
                self.pending.extend(discrete);
                self.pending.extend(continuous);
            }
            PlatformEvent::WindowClosed => {
                info!(target: "platform", "Window closed");
                self.close();
            }
        }
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.pending.push_back(InputEvent::Quit);
        }
    }
}

impl HostInput for EventCollector {
    fn poll_event(&mut self) -> Option<InputEvent> {
        if self.pending.is_empty() {
            self.refill();
        }
        self.pending.pop_front()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, ScrollDirection};
    use crossbeam_channel::unbounded;

    fn drain(collector: &mut EventCollector) -> Vec<InputEvent> {
        std::iter::from_fn(|| collector.poll_event()).collect()
    }

    #[test]
    fn empty_channel_yields_nothing() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        assert_eq!(collector.poll_event(), None);
        assert!(!collector.is_closed());
    }

    #[test]
    fn batches_arrive_discrete_first() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs {
            discrete: vec![InputEvent::character('n'), InputEvent::MouseWheel(ScrollDirection::Up)],
            continuous: vec![InputEvent::MouseMoved { x: 4, y: 2 }],
        })
        .unwrap();
        tx.send(PlatformEvent::Inputs {
            discrete: vec![InputEvent::key(KeyCode::Enter, None)],
            continuous: vec![],
        })
        .unwrap();

        assert_eq!(
            drain(&mut collector),
            vec![
                InputEvent::character('n'),
                InputEvent::MouseWheel(ScrollDirection::Up),
                InputEvent::MouseMoved { x: 4, y: 2 },
                InputEvent::key(KeyCode::Enter, None),
            ]
        );
    }

    #[test]
    fn window_closed_becomes_single_quit() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::WindowClosed).unwrap();
        tx.send(PlatformEvent::Inputs { discrete: vec![InputEvent::character('x')], continuous: vec![] })
            .unwrap();

        assert_eq!(collector.poll_event(), Some(InputEvent::Quit));
        assert_eq!(collector.poll_event(), None, "input after close is ignored");
        assert!(collector.is_closed());
    }

    #[test]
    fn disconnect_becomes_single_quit() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);
        drop(tx);

        assert_eq!(collector.poll_event(), Some(InputEvent::Quit));
        assert_eq!(collector.poll_event(), None);
        assert_eq!(collector.poll_event(), None);
    }

    #[test]
    fn pending_input_survives_disconnect() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs { discrete: vec![InputEvent::character('q')], continuous: vec![] })
            .unwrap();
        drop(tx);

        assert_eq!(drain(&mut collector), vec![InputEvent::character('q'), InputEvent::Quit]);
    }
}

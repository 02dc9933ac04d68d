use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Shared switch that keeps the poll thread off stdin while another
/// program (the user's editor) owns the terminal
#[derive(Debug, Clone, Default)]
pub struct PollGate {
    paused: Arc<AtomicBool>,
}

impl PollGate {
    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }
}

/// Polls the terminal on a background thread and forwards key presses,
/// resizes and a steady tick
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    gate: PollGate,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (sender, receiver) = mpsc::channel();
        let gate = PollGate::default();
        let poll_gate = gate.clone();
        let tick = Duration::from_millis(tick_rate_ms);

        thread::spawn(move || loop {
            if poll_gate.is_paused() {
                thread::sleep(tick);
                continue;
            }
            // poll() does not consume the event
            if let Ok(true) = event::poll(tick) {
                if poll_gate.is_paused() {
                    continue;
                }
                let forwarded = match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(Event::Key(key))
                    }
                    Ok(CrosstermEvent::Resize(_, _)) => Some(Event::Resize),
                    _ => None,
                };
                if let Some(ev) = forwarded {
                    if sender.send(ev).is_err() {
                        break;
                    }
                }
            }
            if sender.send(Event::Tick).is_err() {
                break;
            }
        });

        Self { receiver, gate }
    }

    pub fn recv(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }

    pub fn gate(&self) -> &PollGate {
        &self.gate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_clones_share_state() {
        let gate = PollGate::default();
        let poller_side = gate.clone();
        assert!(!poller_side.is_paused());

        gate.pause();
        assert!(poller_side.is_paused());

        gate.resume();
        assert!(!poller_side.is_paused());
    }
}

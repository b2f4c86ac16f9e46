//! Event handling for the TUI
//!
//! A background thread polls crossterm and forwards events over a channel.
//! The thread stops when polling fails or the receiver is dropped, which
//! the main loop sees as a disconnected channel.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::error::{TrackerError, TrackerResult};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Periodic tick
    Tick,
}

pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = thread::spawn(move || poll_loop(&sender, tick_rate));

        Self { receiver, handler }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> TrackerResult<Event> {
        self.receiver
            .recv()
            .map_err(|_| TrackerError::Tui("terminal event stream closed".into()))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

fn poll_loop(sender: &mpsc::Sender<Event>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        let ready = match event::poll(timeout) {
            Ok(ready) => ready,
            Err(e) => {
                warn!(error = %e, "failed to poll terminal events");
                return;
            }
        };

        if ready {
            let forwarded = match event::read() {
                Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                Ok(CrosstermEvent::Resize(width, height)) => Some(Event::Resize(width, height)),
                Ok(_) => None,
                Err(e) => {
                    warn!(error = %e, "failed to read terminal event");
                    return;
                }
            };
            if let Some(event) = forwarded {
                if sender.send(event).is_err() {
                    return;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if sender.send(Event::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}

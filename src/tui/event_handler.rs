use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum DemoEvent {
    Key(KeyEvent),
    Quit,
    Tick,
}

pub struct EventHandler {
    tx: mpsc::UnboundedSender<DemoEvent>,
}

impl EventHandler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DemoEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Spawn the input task. `tick_interval` doubles as the poll timeout so
    /// the player advances even when no keys arrive.
    pub async fn start(self, tick_interval: Duration) {
        tokio::spawn(async move {
            loop {
                if event::poll(tick_interval).unwrap_or(false) {
                    if let Ok(Event::Key(key)) = event::read() {
                        // Check for Ctrl+C to quit
                        if key.modifiers.contains(KeyModifiers::CONTROL)
                            && key.code == KeyCode::Char('c')
                        {
                            let _ = self.tx.send(DemoEvent::Quit);
                        } else {
                            let _ = self.tx.send(DemoEvent::Key(key));
                        }
                    }
                }
                // Send periodic tick events
                let _ = self.tx.send(DemoEvent::Tick);
            }
        });
    }
}

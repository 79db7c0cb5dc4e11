use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use tokio::time::{interval, Interval, MissedTickBehavior};

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Periodic redraw, drives the loading spinner.
    Tick,
}

/// Merges terminal input with a fixed-rate tick.
pub struct EventHandler {
    stream: EventStream,
    tick: Interval,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let mut tick = interval(tick_rate);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            stream: EventStream::new(),
            tick,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            tokio::select! {
                _ = self.tick.tick() => return Ok(Event::Tick),
                event = self.stream.next() => match event {
                    // Release and repeat events are reported on some platforms only.
                    Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        return Ok(Event::Key(key));
                    }
                    Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => return Err(e.into()),
                    None => return Err(anyhow!("terminal event stream closed")),
                },
            }
        }
    }
}

//! Lifecycle controller for the poll schedule.
//!
//! Owns the ticker task that fires `Engine::refresh()` on a fixed interval.
//! System sleep stops future ticks only; a fetch already in flight still
//! completes and updates the snapshot.  Wake starts a fresh schedule with
//! no catch-up for ticks missed while asleep.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::engine::Engine;

pub struct Scheduler {
    engine: Engine,
    interval: Duration,
    /// Present while a schedule is active.  `start`/`on_wake` are guarded
    /// on this, so repeated wake signals leave exactly one ticker.
    ticker: Option<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(engine: Engine, interval: Duration) -> Self {
        Self {
            engine,
            interval,
            ticker: None,
        }
    }

    /// Begin polling: one eager refresh now, then a tick every interval.
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            debug!("start: schedule already active");
            return;
        }
        self.engine.refresh();
        self.spawn_ticker();
        info!("poll schedule started ({:?} interval)", self.interval);
    }

    pub fn on_sleep(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            info!("poll schedule suspended for system sleep");
        }
    }

    pub fn on_wake(&mut self) {
        if self.ticker.is_some() {
            debug!("wake: schedule already active");
            return;
        }
        self.spawn_ticker();
        info!("poll schedule resumed after wake");
    }

    pub fn is_scheduled(&self) -> bool {
        self.ticker.is_some()
    }

    fn spawn_ticker(&mut self) {
        let engine = self.engine.clone();
        let interval = self.interval;
        self.ticker = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                engine.refresh();
            }
        }));
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

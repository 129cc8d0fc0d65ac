//! Poller/command engine.
//!
//! All fetches, periodic or user-issued, go through `dispatch()`: set the
//! busy flag, run the request as a spawned task, clear the flag when it
//! completes.  Success replaces the whole snapshot and pushes a fresh
//! `MenuView` to the render channel; failure changes nothing and is logged
//! at debug only.
//!
//! Gating is asymmetric: the periodic `refresh()` checks `busy` and drops
//! its tick when a fetch is in flight, while user actions dispatch
//! unconditionally and may overlap an active poll.  The snapshot is replaced as one value, so concurrent fetches are
//! last-writer-wins with no field tearing.  `serialize_fetches` in the
//! config pushes every fetch through one mutex instead.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use djbar_proto::player::{Command, MenuView, PlayerState};
use tokio::sync::{mpsc, Mutex, RwLock};
use tracing::debug;

use crate::transport::HttpTransport;

#[derive(Clone)]
pub struct Engine {
    inner: Arc<Shared>,
}

struct Shared {
    transport: HttpTransport,
    /// True while a fetch is in flight.  Only `refresh()` consults it.
    busy: AtomicBool,
    snapshot: RwLock<Option<PlayerState>>,
    render_tx: mpsc::Sender<MenuView>,
    serialize_fetches: bool,
    fetch_gate: Mutex<()>,
}

impl Engine {
    pub fn new(
        transport: HttpTransport,
        render_tx: mpsc::Sender<MenuView>,
        serialize_fetches: bool,
    ) -> Self {
        Self {
            inner: Arc::new(Shared {
                transport,
                busy: AtomicBool::new(false),
                snapshot: RwLock::new(None),
                render_tx,
                serialize_fetches,
                fetch_gate: Mutex::new(()),
            }),
        }
    }

    // ── periodic path ─────────────────────────────────────────────────────

    /// Timer-tick entry point.  A tick that lands while a fetch is in
    /// flight is dropped, not queued; the next tick polls again.
    pub fn refresh(&self) {
        if self.inner.busy.load(Ordering::SeqCst) {
            debug!("tick dropped: fetch in flight");
            return;
        }
        self.dispatch(Command::Info);
    }

    // ── user actions ──────────────────────────────────────────────────────

    /// Decides from the cached snapshot, which can be up to one poll
    /// interval stale: two quick presses send the same command twice.
    pub async fn play_or_pause(&self) {
        let playing = self
            .inner
            .snapshot
            .read()
            .await
            .as_ref()
            .map(PlayerState::is_playing)
            .unwrap_or(false);

        if playing {
            self.dispatch(Command::Pause);
        } else {
            self.dispatch(Command::Play);
        }
    }

    pub fn next(&self) {
        self.dispatch(Command::Next);
    }

    pub fn volume_up(&self) {
        self.dispatch(Command::VolumeUp);
    }

    pub fn volume_down(&self) {
        self.dispatch(Command::VolumeDown);
    }

    // ── shared dispatch ───────────────────────────────────────────────────

    /// Runs `command` against the endpoint.  `busy` is set before the task
    /// is spawned so a tick arriving mid-call observes it.
    pub fn dispatch(&self, command: Command) {
        let inner = Arc::clone(&self.inner);
        inner.busy.store(true, Ordering::SeqCst);

        tokio::spawn(async move {
            let _gate = if inner.serialize_fetches {
                Some(inner.fetch_gate.lock().await)
            } else {
                None
            };

            let result = inner.transport.fetch(command).await;
            inner.busy.store(false, Ordering::SeqCst);

            match result {
                Ok(state) => {
                    debug!("fetched {}: playing={}", command.path(), state.is_playing());
                    let view = MenuView::from_snapshot(Some(&state));
                    *inner.snapshot.write().await = Some(state);
                    if inner.render_tx.send(view).await.is_err() {
                        debug!("renderer gone, dropping update");
                    }
                }
                Err(e) => {
                    // Silent degrade: keep showing the last good snapshot
                    // until a later tick succeeds.
                    debug!("fetch {} failed: {}", command.path(), e);
                }
            }
        });
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub async fn snapshot(&self) -> Option<PlayerState> {
        self.inner.snapshot.read().await.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.inner.busy.load(Ordering::SeqCst)
    }
}

//! A live map that accepts board updates from any thread.
//!
//! The document may not be available when the first snapshot arrives (the
//! artwork is often fetched separately). Updates received before
//! [`MapView::load`] are held, latest wins, and painted as soon as the
//! document arrives. All passes run under one lock, so overlapping updates
//! never interleave their token placement.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::board::state::BoardConfig;
use crate::render::{MapRenderer, RenderReport};
use crate::svg::MapDocument;

/// What happened to an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Rendered(RenderReport),
    /// No document yet; the snapshot is kept for [`MapView::load`].
    Deferred,
}

struct ViewState<D> {
    document: Option<D>,
    pending: Option<BoardConfig>,
    passes: u64,
}

pub struct MapView<D> {
    renderer: MapRenderer,
    state: Mutex<ViewState<D>>,
    ready: Condvar,
}

impl<D: MapDocument> MapView<D> {
    /// Creates a view with no document loaded.
    pub fn new(renderer: MapRenderer) -> Self {
        MapView {
            renderer,
            state: Mutex::new(ViewState { document: None, pending: None, passes: 0 }),
            ready: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ViewState<D>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Installs the document and wakes waiters. Paints the held snapshot, if
    /// any, and returns its report.
    pub fn load(&self, mut document: D) -> Option<RenderReport> {
        let mut state = self.lock();
        let report = state.pending.take().map(|config| {
            state.passes += 1;
            self.renderer.render(&mut document, &config)
        });
        state.document = Some(document);
        drop(state);
        self.ready.notify_all();
        report
    }

    /// Paints a snapshot, or holds it until the document is loaded.
    pub fn update(&self, config: &BoardConfig) -> UpdateOutcome {
        let mut state = self.lock();
        let state = &mut *state;
        match state.document.as_mut() {
            Some(document) => {
                state.passes += 1;
                UpdateOutcome::Rendered(self.renderer.render(document, config))
            }
            None => {
                log::debug!("map not loaded yet, deferring update");
                state.pending = Some(config.clone());
                UpdateOutcome::Deferred
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.lock().document.is_some()
    }

    /// Blocks until a document is loaded or `timeout` passes. Returns
    /// whether the document is loaded.
    pub fn wait_ready(&self, timeout: Duration) -> bool {
        let state = self.lock();
        let (state, _) = self
            .ready
            .wait_timeout_while(state, timeout, |s| s.document.is_none())
            .unwrap_or_else(PoisonError::into_inner);
        state.document.is_some()
    }

    /// Number of passes painted so far.
    pub fn passes(&self) -> u64 {
        self.lock().passes
    }

    /// Runs `f` against the loaded document.
    pub fn with_document<R>(&self, f: impl FnOnce(&D) -> R) -> Option<R> {
        self.lock().document.as_ref().map(f)
    }
}

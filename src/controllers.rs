//! Controller for interacting with the curve editor from external code.
//!
//! The editor itself lives on the UI thread.  A [`CurveController`] is a cheap
//! cloneable handle that host code can keep anywhere: it queues point-count
//! requests for the UI to apply on its next frame and exposes the most
//! recently published snapshot of the curve.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::data::points::PointSnapshot;
use crate::editor::CurveEditor;
use crate::error::CurveError;

/// Controller to read the edited curve and request reinitialization.
#[derive(Clone, Default)]
pub struct CurveController {
    inner: Arc<Mutex<CurveCtrlInner>>,
}

#[derive(Default)]
struct CurveCtrlInner {
    latest: Vec<PointSnapshot>,
    /// Queued point counts, applied in order.
    pending: Vec<usize>,
    last_error: Option<CurveError>,
    listeners: Vec<Sender<Vec<PointSnapshot>>>,
}

impl CurveController {
    /// Create a fresh controller.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, CurveCtrlInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The last snapshot published by the editor (empty before the first frame).
    pub fn points(&self) -> Vec<PointSnapshot> {
        self.lock().latest.clone()
    }

    /// The last snapshot as a JSON array of `{index, x, y}` objects.
    pub fn points_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.lock().latest)
    }

    /// Request `count` evenly spaced flat points.
    pub fn request_initialize(&self, count: usize) {
        self.lock().pending.push(count);
    }

    /// Request a reset to the length of `points`; their values are discarded.
    pub fn request_update<T>(&self, points: &[T]) {
        self.lock().pending.push(points.len());
    }

    /// Error produced by the most recent request, if it was rejected.
    pub fn last_error(&self) -> Option<CurveError> {
        self.lock().last_error.clone()
    }

    /// Subscribe to snapshots published whenever the curve changed.
    pub fn subscribe(&self) -> Receiver<Vec<PointSnapshot>> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.lock().listeners.push(tx);
        rx
    }

    /// Apply queued requests to `editor`, then publish its current points.
    ///
    /// Called once per frame by the app; embedding hosts call it themselves.
    /// Listeners are only notified when the snapshot differs from the last one.
    pub fn sync(&self, editor: &mut CurveEditor) {
        let pending = std::mem::take(&mut self.lock().pending);
        let mut last_error = None;
        for count in pending {
            if let Err(e) = editor.initialize_points(count) {
                last_error = Some(e);
            }
        }

        let snapshot = editor.points();
        let mut inner = self.lock();
        if last_error.is_some() {
            inner.last_error = last_error;
        }
        if inner.latest != snapshot {
            inner.latest = snapshot;
            let latest = inner.latest.clone();
            inner.listeners.retain(|tx| tx.send(latest.clone()).is_ok());
        }
    }
}

//! Change notifications for the curve editor.
//!
//! Every mutation of [`CurveEditor`](crate::editor::CurveEditor) that affects
//! the visual output is reported as an [`EditorEvent`] to the attached
//! [`RedrawObserver`]s.  The egui host uses this to request a repaint; tests
//! use it to count redraws; host applications can subscribe to a filtered
//! stream through [`EventController`].

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};

// ─────────────────────────────────────────────────────────────────────────────
// ChangeKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing what changed.
///
/// A single event may carry several bits, e.g. finishing a rectangle selection
/// is both `SELECTION_CHANGED` and `GESTURE_ENDED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChangeKind(pub u32);

impl ChangeKind {
    /// A pointer gesture started (or a pointer-down was received while idle).
    pub const GESTURE_STARTED: Self = Self(1 << 0);
    /// A pointer gesture ended.
    pub const GESTURE_ENDED: Self = Self(1 << 1);
    /// A single point was dragged.
    pub const POINT_MOVED: Self = Self(1 << 2);
    /// The selected group was dragged.
    pub const GROUP_MOVED: Self = Self(1 << 3);
    /// The in-progress selection rectangle changed.
    pub const SELECTION_RECT: Self = Self(1 << 4);
    /// The selection set was rebuilt.
    pub const SELECTION_CHANGED: Self = Self(1 << 5);
    /// Max altitude or geoid undulation changed.
    pub const PARAMETERS_CHANGED: Self = Self(1 << 6);
    /// The point sequence was reinitialized.
    pub const POINTS_RESET: Self = Self(1 << 7);
    /// The canvas was resized.
    pub const RESIZED: Self = Self(1 << 8);

    /// Wildcard: matches every kind.
    pub const ALL: Self = Self(u32::MAX);

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for ChangeKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for ChangeKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == ChangeKind::ALL {
            return write!(f, "ALL");
        }
        let pairs: &[(ChangeKind, &str)] = &[
            (ChangeKind::GESTURE_STARTED, "GESTURE_STARTED"),
            (ChangeKind::GESTURE_ENDED, "GESTURE_ENDED"),
            (ChangeKind::POINT_MOVED, "POINT_MOVED"),
            (ChangeKind::GROUP_MOVED, "GROUP_MOVED"),
            (ChangeKind::SELECTION_RECT, "SELECTION_RECT"),
            (ChangeKind::SELECTION_CHANGED, "SELECTION_CHANGED"),
            (ChangeKind::PARAMETERS_CHANGED, "PARAMETERS_CHANGED"),
            (ChangeKind::POINTS_RESET, "POINTS_RESET"),
            (ChangeKind::RESIZED, "RESIZED"),
        ];
        let mut names = Vec::new();
        let mut known_bits = 0u32;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }
        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EditorEvent
// ─────────────────────────────────────────────────────────────────────────────

/// A single change notification.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorEvent {
    pub kinds: ChangeKind,
    /// Number of control points after the change.
    pub point_count: usize,
    /// Number of selected points after the change.
    pub selected_count: usize,
}

/// Something that must redraw after the editor state changed.
pub trait RedrawObserver {
    fn redraw_requested(&mut self, event: &EditorEvent);
}

/// Observer that asks egui to repaint the viewport.
#[derive(Clone)]
pub struct RepaintObserver(pub egui::Context);

impl RedrawObserver for RepaintObserver {
    fn redraw_requested(&mut self, _event: &EditorEvent) {
        self.0.request_repaint();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: ChangeKind,
    sender: Sender<EditorEvent>,
}

/// Fan-out of editor events to channel subscribers.
///
/// Cloning the controller shares the subscriber list, so one clone can be
/// attached to the editor as an observer while another is handed to host code.
#[derive(Clone, Default)]
pub struct EventController {
    inner: Arc<Mutex<Vec<Subscriber>>>,
}

impl EventController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive every event intersecting `filter`.
    pub fn subscribe(&self, filter: ChangeKind) -> Receiver<EditorEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Subscriber { filter, sender: tx });
        rx
    }

    pub fn subscribe_all(&self) -> Receiver<EditorEvent> {
        self.subscribe(ChangeKind::ALL)
    }

    /// Deliver `event` to matching subscribers, dropping closed channels.
    pub fn emit(&self, event: &EditorEvent) {
        let mut subscribers = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|sub| {
            if sub.filter.intersects(event.kinds) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl RedrawObserver for EventController {
    fn redraw_requested(&mut self, event: &EditorEvent) {
        self.emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kinds: ChangeKind) -> EditorEvent {
        EditorEvent {
            kinds,
            point_count: 3,
            selected_count: 0,
        }
    }

    #[test]
    fn union_and_intersection() {
        let both = ChangeKind::SELECTION_CHANGED | ChangeKind::GESTURE_ENDED;
        assert!(both.contains(ChangeKind::GESTURE_ENDED));
        assert!(both.intersects(ChangeKind::SELECTION_CHANGED));
        assert!(!ChangeKind::POINT_MOVED.intersects(both));
    }

    #[test]
    fn display_lists_names() {
        let both = ChangeKind::POINT_MOVED | ChangeKind::RESIZED;
        assert_eq!(both.to_string(), "POINT_MOVED|RESIZED");
        assert_eq!(ChangeKind(0).to_string(), "EMPTY");
        assert_eq!(ChangeKind::ALL.to_string(), "ALL");
    }

    #[test]
    fn subscribers_only_get_matching_events() {
        let ctrl = EventController::new();
        let rx_all = ctrl.subscribe_all();
        let rx_params = ctrl.subscribe(ChangeKind::PARAMETERS_CHANGED);

        ctrl.emit(&event(ChangeKind::POINT_MOVED));
        assert!(rx_all.try_recv().is_ok());
        assert!(rx_params.try_recv().is_err());

        ctrl.emit(&event(ChangeKind::PARAMETERS_CHANGED));
        assert!(rx_all.try_recv().is_ok());
        assert!(rx_params.try_recv().is_ok());
    }

    #[test]
    fn closed_subscribers_are_dropped() {
        let ctrl = EventController::new();
        let rx = ctrl.subscribe_all();
        drop(rx);
        ctrl.emit(&event(ChangeKind::POINTS_RESET));
        assert_eq!(ctrl.subscriber_count(), 0);
    }
}

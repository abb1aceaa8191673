//! The curve editor widget state and its interaction handlers.
//!
//! [`CurveEditor`] owns everything the widget needs: the control points, the
//! selection, the active pointer gesture, the display parameters and the
//! canvas transform.  Handlers mutate the state and then notify the attached
//! [`RedrawObserver`]s; they never draw themselves, so the same editor can be
//! driven by the egui canvas or headless from tests.

use crate::config::EditorConfig;
use crate::data::gesture::{GestureState, PointerInput};
use crate::data::params::{self, DisplayParameters};
use crate::data::points::{CurvePoints, PointSnapshot};
use crate::data::selection::{SelectionRect, SelectionSet};
use crate::data::transform::CanvasTransform;
use crate::error::CurveError;
use crate::events::{ChangeKind, EditorEvent, RedrawObserver};

/// Pointer distance (pixels) below which a point counts as hit.
pub const DEFAULT_HIT_RADIUS: f32 = 10.0;

pub struct CurveEditor {
    points: CurvePoints,
    selection: SelectionSet,
    gesture: GestureState,
    params: DisplayParameters,
    transform: CanvasTransform,
    hit_radius: f32,
    observers: Vec<Box<dyn RedrawObserver>>,
}

impl std::fmt::Debug for CurveEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurveEditor")
            .field("points", &self.points)
            .field("selection", &self.selection)
            .field("gesture", &self.gesture)
            .field("params", &self.params)
            .field("transform", &self.transform)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl CurveEditor {
    /// Create an editor with `point_count` flat points on a canvas described by
    /// `transform`.
    pub fn new(point_count: usize, transform: CanvasTransform) -> Result<Self, CurveError> {
        Ok(Self {
            points: CurvePoints::evenly_spaced(point_count)?,
            selection: SelectionSet::default(),
            gesture: GestureState::Idle,
            params: DisplayParameters::default(),
            transform,
            hit_radius: DEFAULT_HIT_RADIUS,
            observers: Vec::new(),
        })
    }

    /// Create an editor from the canvas and default sections of a config.
    ///
    /// Out-of-range values are replaced by their defaults first.
    pub fn from_config(cfg: &EditorConfig) -> Result<Self, CurveError> {
        let cfg = &cfg.clone().sanitized();
        let transform = CanvasTransform::new(
            cfg.canvas.initial_size[0],
            cfg.canvas.initial_size[1],
            cfg.canvas.margin,
        );
        let mut editor = Self::new(cfg.defaults.point_count, transform)?;
        editor.hit_radius = cfg.canvas.hit_radius;
        editor.params = DisplayParameters {
            max_altitude: cfg.defaults.max_altitude,
            geoid_undulation: cfg.defaults.geoid_undulation,
        };
        Ok(editor)
    }

    pub fn add_observer(&mut self, observer: Box<dyn RedrawObserver>) {
        self.observers.push(observer);
    }

    pub fn with_observer(mut self, observer: Box<dyn RedrawObserver>) -> Self {
        self.add_observer(observer);
        self
    }

    fn notify(&mut self, kinds: ChangeKind) {
        let event = EditorEvent {
            kinds,
            point_count: self.points.len(),
            selected_count: self.selection.len(),
        };
        for observer in &mut self.observers {
            observer.redraw_requested(&event);
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// Snapshot of all points as `{index, x, y}`.
    pub fn points(&self) -> Vec<PointSnapshot> {
        self.points.snapshot()
    }

    pub fn curve(&self) -> &CurvePoints {
        &self.points
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.to_vec()
    }

    pub fn selection_rect(&self) -> Option<&SelectionRect> {
        self.gesture.selection_rect()
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn params(&self) -> &DisplayParameters {
        &self.params
    }

    pub fn transform(&self) -> &CanvasTransform {
        &self.transform
    }

    pub fn hit_radius(&self) -> f32 {
        self.hit_radius
    }

    // ── Reinitialization ─────────────────────────────────────────────────────

    /// Replace the curve with `count` evenly spaced points at `y = 0`.
    ///
    /// Clears the selection and cancels any active gesture. Fewer than two
    /// points are rejected and leave the current curve untouched.
    pub fn initialize_points(&mut self, count: usize) -> Result<(), CurveError> {
        let points = CurvePoints::evenly_spaced(count).map_err(|e| {
            log::warn!("rejected curve reinitialization: {e}");
            e
        })?;
        self.points = points;
        self.selection.clear();
        self.gesture = GestureState::Idle;
        log::debug!("curve reinitialized with {count} points");
        self.notify(ChangeKind::POINTS_RESET | ChangeKind::SELECTION_CHANGED);
        Ok(())
    }

    /// Reset the curve to the length of `points`.
    ///
    /// Only the length of the input is used: x is re-spaced evenly and every
    /// y is reset to 0, whatever values the input carries.
    pub fn update_curve_points<T>(&mut self, points: &[T]) -> Result<(), CurveError> {
        self.initialize_points(points.len())
    }

    // ── Parameters ───────────────────────────────────────────────────────────

    /// Apply free text typed into the max-altitude field.
    /// Invalid text is ignored; returns whether the value was accepted.
    pub fn set_max_altitude_text(&mut self, text: &str) -> bool {
        match params::parse_max_altitude(text) {
            Ok(value) => {
                self.params.max_altitude = value;
                self.notify(ChangeKind::PARAMETERS_CHANGED);
                true
            }
            Err(e) => {
                log::debug!("ignoring max altitude input {text:?}: {e}");
                false
            }
        }
    }

    /// Apply free text typed into the geoid-undulation field.
    /// Invalid text is ignored; returns whether the value was accepted.
    pub fn set_geoid_undulation_text(&mut self, text: &str) -> bool {
        match params::parse_geoid_undulation(text) {
            Ok(value) => {
                self.params.geoid_undulation = value;
                self.notify(ChangeKind::PARAMETERS_CHANGED);
                true
            }
            Err(e) => {
                log::debug!("ignoring geoid undulation input {text:?}: {e}");
                false
            }
        }
    }

    // ── Canvas ───────────────────────────────────────────────────────────────

    /// Follow a change of the drawing surface size.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.transform.resize(width, height) {
            self.notify(ChangeKind::RESIZED);
        }
    }

    /// Index of the first point within the hit radius of a pixel position.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        self.points.iter().position(|p| {
            let [cx, cy] = self.transform.to_pixel(p.x, p.y);
            (x - cx).hypot(y - cy) < self.hit_radius
        })
    }

    // ── Pointer gestures ─────────────────────────────────────────────────────

    pub fn pointer_down(&mut self, input: PointerInput) {
        let hit = self.hit_test(input.x, input.y);
        self.gesture = match (hit, input.shift) {
            (Some(index), false) => GestureState::DraggingPoint { index },
            (None, false) => GestureState::RectSelecting {
                rect: SelectionRect::anchored_at(input.x, input.y),
            },
            (_, true) if !self.selection.is_empty() => GestureState::GroupDragging {
                reference_y: input.y,
            },
            (_, true) => GestureState::Idle,
        };
        log::debug!("pointer down at ({}, {}): {}", input.x, input.y, self.gesture.label());
        self.notify(ChangeKind::GESTURE_STARTED);
    }

    pub fn pointer_move(&mut self, input: PointerInput) {
        let mappable = self.transform.has_plot_area();
        match &mut self.gesture {
            GestureState::Idle => {}
            GestureState::DraggingPoint { .. } | GestureState::GroupDragging { .. }
                if !mappable => {}
            GestureState::DraggingPoint { index } => {
                let index = *index;
                let y = self.transform.to_normalized_y(input.y);
                self.points.set_y(index, y);
                self.notify(ChangeKind::POINT_MOVED);
            }
            GestureState::RectSelecting { rect } => {
                rect.extend_to(input.x, input.y);
                self.notify(ChangeKind::SELECTION_RECT);
            }
            GestureState::GroupDragging { reference_y } => {
                let delta = self.transform.to_normalized_y(input.y)
                    - self.transform.to_normalized_y(*reference_y);
                *reference_y = input.y;
                for index in self.selection.iter() {
                    self.points.shift_y(index, delta);
                }
                self.notify(ChangeKind::GROUP_MOVED);
            }
        }
    }

    pub fn pointer_up(&mut self, _input: PointerInput) {
        let finished = std::mem::take(&mut self.gesture);
        match finished {
            GestureState::RectSelecting { rect } => {
                self.selection
                    .select_in_rect(&rect, &self.points, &self.transform);
                log::debug!("rectangle selection picked {} points", self.selection.len());
                self.notify(
                    ChangeKind::SELECTION_CHANGED
                        | ChangeKind::SELECTION_RECT
                        | ChangeKind::GESTURE_ENDED,
                );
            }
            GestureState::Idle => {}
            GestureState::DraggingPoint { .. } | GestureState::GroupDragging { .. } => {
                self.notify(ChangeKind::GESTURE_ENDED);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<ChangeKind>>>);

    impl RedrawObserver for Recorder {
        fn redraw_requested(&mut self, event: &EditorEvent) {
            self.0.borrow_mut().push(event.kinds);
        }
    }

    // 5 points on a 300x200 canvas with 30px margin:
    // x pixels 30, 90, 150, 210, 270; y = 0 at pixel 170, y = 1 at pixel 30.
    fn editor() -> (CurveEditor, Rc<RefCell<Vec<ChangeKind>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let ed = CurveEditor::new(5, CanvasTransform::new(300.0, 200.0, 30.0))
            .unwrap()
            .with_observer(Box::new(Recorder(log.clone())));
        (ed, log)
    }

    #[test]
    fn hit_test_picks_first_point_in_radius() {
        let (ed, _) = editor();
        assert_eq!(ed.hit_test(32.0, 168.0), Some(0));
        assert_eq!(ed.hit_test(150.0, 179.0), Some(2));
        assert_eq!(ed.hit_test(150.0, 180.0), None);
        assert_eq!(ed.hit_test(60.0, 170.0), None);
    }

    #[test]
    fn dragging_point_clamps_to_unit_range() {
        let (mut ed, _) = editor();
        ed.pointer_down(PointerInput::new(90.0, 170.0));
        assert_eq!(ed.gesture(), &GestureState::DraggingPoint { index: 1 });
        ed.pointer_move(PointerInput::new(90.0, 100.0));
        assert_abs_diff_eq!(ed.points()[1].y, 0.5, epsilon = 1e-6);
        ed.pointer_move(PointerInput::new(90.0, -40.0));
        assert_eq!(ed.points()[1].y, 1.0);
        ed.pointer_move(PointerInput::new(90.0, 400.0));
        assert_eq!(ed.points()[1].y, 0.0);
        ed.pointer_up(PointerInput::new(90.0, 400.0));
        assert!(ed.gesture().is_idle());
    }

    #[test]
    fn shift_with_empty_selection_stays_idle() {
        let (mut ed, log) = editor();
        ed.pointer_down(PointerInput::new(90.0, 170.0).with_shift(true));
        assert!(ed.gesture().is_idle());
        ed.pointer_move(PointerInput::new(90.0, 50.0).with_shift(true));
        assert!(ed.points().iter().all(|p| p.y == 0.0));
        // pointer-down still requests one redraw
        assert_eq!(log.borrow().as_slice(), &[ChangeKind::GESTURE_STARTED]);
    }

    #[test]
    fn group_drag_moves_selected_points_only() {
        let (mut ed, _) = editor();
        ed.pointer_down(PointerInput::new(0.0, 0.0));
        ed.pointer_move(PointerInput::new(160.0, 200.0));
        ed.pointer_up(PointerInput::new(160.0, 200.0));
        assert_eq!(ed.selected_indices(), vec![0, 1, 2]);

        ed.pointer_down(PointerInput::new(250.0, 120.0).with_shift(true));
        assert_eq!(ed.gesture(), &GestureState::GroupDragging { reference_y: 120.0 });
        ed.pointer_move(PointerInput::new(250.0, 92.0).with_shift(true));
        ed.pointer_move(PointerInput::new(250.0, 64.0).with_shift(true));
        ed.pointer_up(PointerInput::new(250.0, 64.0));

        let ys: Vec<f64> = ed.points().iter().map(|p| p.y).collect();
        for y in &ys[..3] {
            assert_abs_diff_eq!(*y, 0.4, epsilon = 1e-6);
        }
        assert_eq!(&ys[3..], &[0.0, 0.0]);
    }

    #[test]
    fn group_drag_clamps_each_point() {
        let (mut ed, _) = editor();
        ed.pointer_down(PointerInput::new(0.0, 0.0));
        ed.pointer_move(PointerInput::new(300.0, 200.0));
        ed.pointer_up(PointerInput::new(300.0, 200.0));

        ed.pointer_down(PointerInput::new(10.0, 100.0).with_shift(true));
        ed.pointer_move(PointerInput::new(10.0, -500.0).with_shift(true));
        assert!(ed.points().iter().all(|p| p.y == 1.0));
        ed.pointer_move(PointerInput::new(10.0, 900.0).with_shift(true));
        assert!(ed.points().iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn shift_on_point_with_selection_group_drags() {
        let (mut ed, _) = editor();
        ed.pointer_down(PointerInput::new(200.0, 150.0));
        ed.pointer_move(PointerInput::new(280.0, 190.0));
        ed.pointer_up(PointerInput::new(280.0, 190.0));
        assert_eq!(ed.selected_indices(), vec![3, 4]);

        ed.pointer_down(PointerInput::new(30.0, 170.0).with_shift(true));
        assert!(matches!(ed.gesture(), GestureState::GroupDragging { .. }));
    }

    #[test]
    fn new_rectangle_drops_previous_selection() {
        let (mut ed, _) = editor();
        ed.pointer_down(PointerInput::new(0.0, 0.0));
        ed.pointer_move(PointerInput::new(300.0, 200.0));
        ed.pointer_up(PointerInput::new(300.0, 200.0));
        assert_eq!(ed.selection().len(), 5);

        ed.pointer_down(PointerInput::new(5.0, 5.0));
        ed.pointer_up(PointerInput::new(5.0, 5.0));
        assert!(ed.selection().is_empty());
    }

    #[test]
    fn parameter_text_updates_and_notifies() {
        let (mut ed, log) = editor();
        assert!(!ed.set_max_altitude_text("-5"));
        assert_eq!(ed.params().max_altitude, 100.0);
        assert!(log.borrow().is_empty());

        assert!(ed.set_max_altitude_text("42.5"));
        assert_eq!(ed.params().max_altitude, 42.5);
        assert!(ed.set_geoid_undulation_text("-17.25"));
        assert_eq!(ed.params().geoid_undulation, -17.25);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn reinitialization_resets_points_and_selection() {
        let (mut ed, _) = editor();
        ed.pointer_down(PointerInput::new(0.0, 0.0));
        ed.pointer_move(PointerInput::new(300.0, 200.0));
        ed.pointer_up(PointerInput::new(300.0, 200.0));

        ed.update_curve_points(&[0.3, 0.9, 0.1]).unwrap();
        let pts = ed.points();
        assert_eq!(pts.len(), 3);
        assert!(pts.iter().all(|p| p.y == 0.0));
        assert!(ed.selection().is_empty());

        assert_eq!(
            ed.initialize_points(1),
            Err(CurveError::TooFewPoints { requested: 1 })
        );
        assert_eq!(ed.points().len(), 3);
    }

    #[test]
    fn resize_notifies_only_on_change() {
        let (mut ed, log) = editor();
        ed.resize(300.0, 200.0);
        assert!(log.borrow().is_empty());
        ed.resize(600.0, 400.0);
        assert_eq!(log.borrow().as_slice(), &[ChangeKind::RESIZED]);
        assert_eq!(ed.transform().width, 600.0);
    }
}

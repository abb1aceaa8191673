//! Rectangle selection of control points.

use std::collections::BTreeSet;

use super::points::CurvePoints;
use super::transform::CanvasTransform;

/// Set of selected point indices, kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: BTreeSet<usize>,
}

impl SelectionSet {
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Replace the selection with every point whose pixel position lies inside
    /// `rect` (bounds inclusive).
    pub fn select_in_rect(
        &mut self,
        rect: &SelectionRect,
        points: &CurvePoints,
        transform: &CanvasTransform,
    ) {
        let (min, max) = rect.bounds();
        self.indices = points
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                let [cx, cy] = transform.to_pixel(p.x, p.y);
                cx >= min[0] && cx <= max[0] && cy >= min[1] && cy <= max[1]
            })
            .map(|(i, _)| i)
            .collect();
    }
}

impl FromIterator<usize> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

/// In-progress selection rectangle in pixel space.
///
/// `x`/`y` is the anchor corner where the gesture started. Width and height
/// follow the pointer and may be negative until the rectangle is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SelectionRect {
    /// Zero-extent rectangle anchored at a pointer position.
    pub fn anchored_at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Stretch the rectangle so its free corner sits at the pointer.
    pub fn extend_to(&mut self, x: f32, y: f32) {
        self.width = x - self.x;
        self.height = y - self.y;
    }

    /// Absolute `(min, max)` corners.
    pub fn bounds(&self) -> ([f32; 2], [f32; 2]) {
        let x2 = self.x + self.width;
        let y2 = self.y + self.height;
        (
            [self.x.min(x2), self.y.min(y2)],
            [self.x.max(x2), self.y.max(y2)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (CurvePoints, CanvasTransform) {
        // x pixels: 30, 130, 230; y pixels all at 170 (y = 0)
        (
            CurvePoints::evenly_spaced(3).unwrap(),
            CanvasTransform::new(260.0, 200.0, 30.0),
        )
    }

    #[test]
    fn bounds_normalizes_negative_extent() {
        let mut r = SelectionRect::anchored_at(100.0, 50.0);
        r.extend_to(40.0, 10.0);
        assert_eq!(r.bounds(), ([40.0, 10.0], [100.0, 50.0]));
    }

    #[test]
    fn selects_points_inside_inclusive_bounds() {
        let (points, t) = setup();
        let mut sel = SelectionSet::default();
        let mut r = SelectionRect::anchored_at(30.0, 170.0);
        r.extend_to(130.0, 100.0);
        sel.select_in_rect(&r, &points, &t);
        assert_eq!(sel.to_vec(), vec![0, 1]);
    }

    #[test]
    fn new_rect_replaces_previous_selection() {
        let (points, t) = setup();
        let mut sel: SelectionSet = [0, 1].into_iter().collect();
        let mut r = SelectionRect::anchored_at(200.0, 200.0);
        r.extend_to(260.0, 150.0);
        sel.select_in_rect(&r, &points, &t);
        assert_eq!(sel.to_vec(), vec![2]);
    }
}

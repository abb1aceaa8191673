use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// A single editable control point in normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
}

/// Read-only view of a control point handed out to host code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointSnapshot {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Clamp a normalized Y value into `[0, 1]`.
pub fn clamp_unit(y: f64) -> f64 {
    y.clamp(0.0, 1.0)
}

/// Ordered sequence of control points. The index of a point is its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePoints {
    points: Vec<ControlPoint>,
}

impl CurvePoints {
    /// Minimum number of points a curve can hold.
    pub const MIN_POINTS: usize = 2;

    /// Create `count` points evenly spaced across `[0, 1]`, all at `y = 0`.
    pub fn evenly_spaced(count: usize) -> Result<Self, CurveError> {
        if count < Self::MIN_POINTS {
            return Err(CurveError::TooFewPoints { requested: count });
        }
        let last = (count - 1) as f64;
        let points = (0..count)
            .map(|i| ControlPoint {
                x: i as f64 / last,
                y: 0.0,
            })
            .collect();
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ControlPoint> {
        self.points.iter()
    }

    /// Set the Y value of one point, clamped to `[0, 1]`.
    /// Returns `false` if the index is out of range or `y` is not finite.
    pub fn set_y(&mut self, index: usize, y: f64) -> bool {
        if !y.is_finite() {
            return false;
        }
        match self.points.get_mut(index) {
            Some(p) => {
                p.y = clamp_unit(y);
                true
            }
            None => false,
        }
    }

    /// Shift the Y value of one point by `delta`, clamped to `[0, 1]`.
    /// A non-finite `delta` is ignored.
    pub fn shift_y(&mut self, index: usize, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        if let Some(p) = self.points.get_mut(index) {
            p.y = clamp_unit(p.y + delta);
        }
    }

    pub fn snapshot(&self) -> Vec<PointSnapshot> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, p)| PointSnapshot {
                index,
                x: p.x,
                y: p.y,
            })
            .collect()
    }
}

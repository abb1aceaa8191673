//! Mapping between normalized curve coordinates and canvas pixels.
//!
//! The data space is the unit square `[0, 1] x [0, 1]`. A fixed margin is
//! reserved on every side of the canvas for axes and labels, and the Y axis is
//! inverted so that data `y = 0` sits on the bottom edge of the plot area.

/// Default margin around the plot area in pixels.
pub const DEFAULT_MARGIN: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self::new(800.0, 400.0, DEFAULT_MARGIN)
    }
}

impl CanvasTransform {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Width of the plot area between the left and right margins.
    pub fn plot_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Height of the plot area between the top and bottom margins.
    pub fn plot_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }

    /// Whether the plot area between the margins is non-empty. Without it the
    /// pixel to value mapping is undefined.
    pub fn has_plot_area(&self) -> bool {
        self.plot_width() > 0.0 && self.plot_height() > 0.0
    }

    pub fn to_pixel_x(&self, x: f64) -> f32 {
        self.margin + (x as f32) * self.plot_width()
    }

    pub fn to_pixel_y(&self, y: f64) -> f32 {
        self.height - self.margin - (y as f32) * self.plot_height()
    }

    /// Inverse of [`to_pixel_y`](Self::to_pixel_y). Not clamped: pixels above
    /// the top margin map to values greater than 1.
    pub fn to_normalized_y(&self, pixel_y: f32) -> f64 {
        f64::from(self.height - self.margin - pixel_y) / f64::from(self.plot_height())
    }

    /// Pixel position of a normalized point.
    pub fn to_pixel(&self, x: f64, y: f64) -> [f32; 2] {
        [self.to_pixel_x(x), self.to_pixel_y(y)]
    }

    /// Update the canvas size, returning `true` if it actually changed.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if (self.width - width).abs() > 0.5 || (self.height - height).abs() > 0.5 {
            self.width = width;
            self.height = height;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn corners_map_to_margin_boundary() {
        let t = CanvasTransform::new(200.0, 100.0, 30.0);
        assert_abs_diff_eq!(t.to_pixel_x(0.0), 30.0);
        assert_abs_diff_eq!(t.to_pixel_x(1.0), 170.0);
        assert_abs_diff_eq!(t.to_pixel_y(0.0), 70.0);
        assert_abs_diff_eq!(t.to_pixel_y(1.0), 30.0);
    }

    #[test]
    fn normalized_y_inverts_pixel_y() {
        let t = CanvasTransform::new(640.0, 480.0, 30.0);
        for i in 0..=20 {
            let y = i as f64 / 20.0;
            assert_abs_diff_eq!(t.to_normalized_y(t.to_pixel_y(y)), y, epsilon = 1e-6);
        }
    }

    #[test]
    fn pixels_outside_plot_area_leave_unit_range() {
        let t = CanvasTransform::new(640.0, 480.0, 30.0);
        assert!(t.to_normalized_y(0.0) > 1.0);
        assert!(t.to_normalized_y(480.0) < 0.0);
    }

    #[test]
    fn margins_can_swallow_the_plot_area() {
        assert!(CanvasTransform::new(640.0, 480.0, 30.0).has_plot_area());
        assert!(!CanvasTransform::new(300.0, 60.0, 30.0).has_plot_area());
        assert!(!CanvasTransform::new(40.0, 480.0, 30.0).has_plot_area());
    }

    #[test]
    fn resize_ignores_subpixel_jitter() {
        let mut t = CanvasTransform::new(640.0, 480.0, 30.0);
        assert!(!t.resize(640.2, 479.9));
        assert!(t.resize(800.0, 480.0));
        assert_eq!(t.width, 800.0);
    }
}

//! Full redraw of the curve editor onto an abstract drawing surface.
//!
//! [`render`] is a pure function of the editor state: it clears the surface
//! and repaints labels, grid, axes, curve, points and the selection rectangle
//! in that order.  The egui canvas implements [`Surface`] on top of an
//! `egui::Painter`; [`RecordingSurface`] keeps the draw calls in memory so
//! rendering can be checked without a window.

use egui::{Color32, Stroke};

use crate::color_scheme::CurvePalette;
use crate::config::EditorConfig;
use crate::editor::CurveEditor;

/// Minimal set of drawing primitives the renderer needs.
///
/// All coordinates are surface-local pixels with the origin in the top-left
/// corner.
pub trait Surface {
    fn clear(&mut self, background: Color32);
    /// Draw text whose baseline starts at `pos`.
    fn text(&mut self, pos: [f32; 2], text: &str, size: f32, color: Color32);
    fn line(&mut self, from: [f32; 2], to: [f32; 2], stroke: Stroke);
    fn polyline(&mut self, points: &[[f32; 2]], stroke: Stroke);
    fn circle(&mut self, center: [f32; 2], radius: f32, fill: Color32, stroke: Stroke);
    fn stroke_rect(&mut self, min: [f32; 2], max: [f32; 2], stroke: Stroke);
}

/// Everything about the look of the canvas that is not editor state.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
    pub palette: CurvePalette,
    pub point_radius: f32,
    pub font_size: f32,
    pub grid_step: f64,
    pub show_labels: bool,
    pub show_grid: bool,
    pub show_selection_rect: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl RenderStyle {
    pub fn from_config(cfg: &EditorConfig) -> Self {
        Self {
            palette: cfg.color_scheme.palette(),
            point_radius: cfg.canvas.point_radius,
            font_size: cfg.canvas.font_size,
            grid_step: cfg.canvas.grid_step,
            show_labels: cfg.features.labels,
            show_grid: cfg.features.grid,
            show_selection_rect: cfg.features.selection_rect,
        }
    }

    /// Number of grid intervals across one axis.
    fn grid_steps(&self) -> usize {
        if self.grid_step > 0.0 && self.grid_step <= 1.0 {
            (1.0 / self.grid_step).round() as usize
        } else {
            0
        }
    }
}

/// Redraw the whole editor onto `surface`.
pub fn render<S: Surface + ?Sized>(editor: &CurveEditor, style: &RenderStyle, surface: &mut S) {
    let t = editor.transform();
    let palette = &style.palette;
    let (left, right) = (t.margin, t.width - t.margin);
    let (top, bottom) = (t.margin, t.height - t.margin);

    surface.clear(palette.background);

    if style.show_labels {
        let params = editor.params();
        surface.text(
            [left, top - style.font_size],
            &params.max_altitude_label(),
            style.font_size,
            palette.text,
        );
        surface.text(
            [left, bottom + style.font_size * 2.0],
            &params.geoid_undulation_label(),
            style.font_size,
            palette.text,
        );
    }

    if style.show_grid {
        let steps = style.grid_steps();
        let grid = Stroke::new(1.0, palette.grid);
        for i in 0..=steps {
            let x = t.to_pixel_x(i as f64 * style.grid_step);
            surface.line([x, top], [x, bottom], grid);
        }
        for i in 0..=steps {
            let y = t.to_pixel_y(i as f64 * style.grid_step);
            surface.line([left, y], [right, y], grid);
        }
    }

    let axis = Stroke::new(2.0, palette.axis);
    surface.line([left, bottom], [right, bottom], axis);
    surface.line([left, top], [left, bottom], axis);

    let pixels: Vec<[f32; 2]> = editor
        .curve()
        .iter()
        .map(|p| t.to_pixel(p.x, p.y))
        .collect();
    surface.polyline(&pixels, Stroke::new(2.0, palette.curve));

    let selection = editor.selection();
    for (index, center) in pixels.iter().enumerate() {
        let (fill, stroke) = if selection.contains(index) {
            (palette.selected_fill, palette.selected_stroke)
        } else {
            (palette.point_fill, palette.point_stroke)
        };
        surface.circle(*center, style.point_radius, fill, Stroke::new(2.0, stroke));
    }

    if style.show_selection_rect {
        if let Some(rect) = editor.selection_rect() {
            let (min, max) = rect.bounds();
            surface.stroke_rect(min, max, Stroke::new(1.0, palette.selection_rect));
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Headless surface
// ─────────────────────────────────────────────────────────────────────────────

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Color32),
    Text {
        pos: [f32; 2],
        text: String,
        size: f32,
        color: Color32,
    },
    Line {
        from: [f32; 2],
        to: [f32; 2],
        stroke: Stroke,
    },
    Polyline {
        points: Vec<[f32; 2]>,
        stroke: Stroke,
    },
    Circle {
        center: [f32; 2],
        radius: f32,
        fill: Color32,
        stroke: Stroke,
    },
    StrokeRect {
        min: [f32; 2],
        max: [f32; 2],
        stroke: Stroke,
    },
}

/// Surface that records draw calls instead of painting them.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. }))
    }

    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, background: Color32) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear(background));
    }

    fn text(&mut self, pos: [f32; 2], text: &str, size: f32, color: Color32) {
        self.ops.push(DrawOp::Text {
            pos,
            text: text.to_string(),
            size,
            color,
        });
    }

    fn line(&mut self, from: [f32; 2], to: [f32; 2], stroke: Stroke) {
        self.ops.push(DrawOp::Line { from, to, stroke });
    }

    fn polyline(&mut self, points: &[[f32; 2]], stroke: Stroke) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn circle(&mut self, center: [f32; 2], radius: f32, fill: Color32, stroke: Stroke) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            fill,
            stroke,
        });
    }

    fn stroke_rect(&mut self, min: [f32; 2], max: [f32; 2], stroke: Stroke) {
        self.ops.push(DrawOp::StrokeRect { min, max, stroke });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::gesture::PointerInput;
    use crate::data::transform::CanvasTransform;

    fn editor() -> CurveEditor {
        CurveEditor::new(4, CanvasTransform::new(400.0, 300.0, 30.0)).unwrap()
    }

    #[test]
    fn draw_order_is_fixed() {
        let ed = editor();
        let mut surface = RecordingSurface::new();
        render(&ed, &RenderStyle::default(), &mut surface);

        assert_eq!(surface.ops[0], DrawOp::Clear(Color32::WHITE));
        assert!(matches!(surface.ops[1], DrawOp::Text { .. }));
        assert!(matches!(surface.ops[2], DrawOp::Text { .. }));
        // 11 vertical + 11 horizontal grid lines + 2 axes
        assert_eq!(surface.line_count(), 24);
        let polyline = surface
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Polyline { points, .. } => Some(points.len()),
                _ => None,
            })
            .unwrap();
        assert_eq!(polyline, 4);
        assert_eq!(surface.circles().count(), 4);
        assert!(matches!(surface.ops.last(), Some(DrawOp::Circle { .. })));
    }

    #[test]
    fn labels_show_parameters() {
        let mut ed = editor();
        ed.set_geoid_undulation_text("47.5");
        let mut surface = RecordingSurface::new();
        render(&ed, &RenderStyle::default(), &mut surface);
        let texts: Vec<&str> = surface.texts().collect();
        assert_eq!(
            texts,
            vec!["Max. Altitude (HAE): 100 m", "Geoidal Separation: 47.5 m"]
        );
    }

    #[test]
    fn selected_points_use_selected_colors() {
        let mut ed = editor();
        ed.pointer_down(PointerInput::new(0.0, 0.0));
        ed.pointer_move(PointerInput::new(100.0, 300.0));
        ed.pointer_up(PointerInput::new(100.0, 300.0));
        assert_eq!(ed.selected_indices(), vec![0]);

        let style = RenderStyle::default();
        let mut surface = RecordingSurface::new();
        render(&ed, &style, &mut surface);
        let fills: Vec<Color32> = surface
            .circles()
            .map(|op| match op {
                DrawOp::Circle { fill, .. } => *fill,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(fills[0], style.palette.selected_fill);
        assert!(fills[1..].iter().all(|f| *f == style.palette.point_fill));
    }

    #[test]
    fn active_rectangle_is_drawn_last_and_normalized() {
        let mut ed = editor();
        ed.pointer_down(PointerInput::new(200.0, 150.0));
        ed.pointer_move(PointerInput::new(120.0, 60.0));
        let mut surface = RecordingSurface::new();
        render(&ed, &RenderStyle::default(), &mut surface);
        assert_eq!(
            surface.ops.last(),
            Some(&DrawOp::StrokeRect {
                min: [120.0, 60.0],
                max: [200.0, 150.0],
                stroke: Stroke::new(1.0, Color32::from_rgba_unmultiplied(0, 0, 255, 128)),
            })
        );
    }

    #[test]
    fn disabled_features_are_skipped() {
        let ed = editor();
        let style = RenderStyle {
            show_labels: false,
            show_grid: false,
            ..RenderStyle::default()
        };
        let mut surface = RecordingSurface::new();
        render(&ed, &style, &mut surface);
        assert_eq!(surface.texts().count(), 0);
        assert_eq!(surface.line_count(), 2);
    }
}

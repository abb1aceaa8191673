//! The editor canvas: an egui painter region that forwards pointer input to a
//! [`CurveEditor`] and repaints it every frame.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, StrokeKind};

use crate::data::gesture::PointerInput;
use crate::editor::CurveEditor;
use crate::render::{render, RenderStyle, Surface};

/// [`Surface`] on top of an `egui::Painter`.
///
/// Coordinates handed to the surface are local to the top-left corner of
/// `rect`, the allocated canvas area.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn pos(&self, p: [f32; 2]) -> Pos2 {
        Pos2::new(self.rect.min.x + p[0], self.rect.min.y + p[1])
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, background: Color32) {
        self.painter.rect_filled(self.rect, 0.0, background);
    }

    fn text(&mut self, pos: [f32; 2], text: &str, size: f32, color: Color32) {
        self.painter.text(
            self.pos(pos),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(size),
            color,
        );
    }

    fn line(&mut self, from: [f32; 2], to: [f32; 2], stroke: Stroke) {
        self.painter.line_segment([self.pos(from), self.pos(to)], stroke);
    }

    fn polyline(&mut self, points: &[[f32; 2]], stroke: Stroke) {
        if points.len() < 2 {
            return;
        }
        let points: Vec<Pos2> = points.iter().map(|p| self.pos(*p)).collect();
        self.painter.add(Shape::line(points, stroke));
    }

    fn circle(&mut self, center: [f32; 2], radius: f32, fill: Color32, stroke: Stroke) {
        self.painter.circle(self.pos(center), radius, fill, stroke);
    }

    fn stroke_rect(&mut self, min: [f32; 2], max: [f32; 2], stroke: Stroke) {
        let rect = Rect::from_min_max(self.pos(min), self.pos(max));
        self.painter.rect_stroke(rect, 0.0, stroke, StrokeKind::Inside);
    }
}

/// Pointer bookkeeping for the canvas between frames.
///
/// A press inside the canvas captures the pointer until the primary button is
/// released, so drags keep working when the cursor leaves the canvas.
#[derive(Debug, Default)]
pub struct CurveCanvas {
    captured: bool,
    last_pos: Option<Pos2>,
}

impl CurveCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press started on the canvas and has not been released yet.
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Allocate the remaining space of `ui`, forward pointer input to `editor`
    /// and paint it.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        editor: &mut CurveEditor,
        style: &RenderStyle,
    ) -> egui::Response {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, Sense::drag());
        let rect = response.rect;
        editor.resize(rect.width(), rect.height());

        let (pressed, released, pos, shift) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
                i.modifiers.shift,
            )
        });
        let local =
            |p: Pos2| PointerInput::new(p.x - rect.min.x, p.y - rect.min.y).with_shift(shift);

        if let Some(p) = pos {
            if pressed && rect.contains(p) {
                self.captured = true;
                self.last_pos = Some(p);
                editor.pointer_down(local(p));
            } else if self.captured && self.last_pos != Some(p) {
                self.last_pos = Some(p);
                editor.pointer_move(local(p));
            }
        }
        if released && self.captured {
            self.captured = false;
            let p = pos.or(self.last_pos).unwrap_or(rect.min);
            self.last_pos = None;
            editor.pointer_up(local(p));
        }

        let mut surface = PainterSurface::new(&painter, rect);
        render(editor, style, &mut surface);
        response
    }
}

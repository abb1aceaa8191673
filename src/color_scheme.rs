//! Color scheme definitions for the curve editor.
//!
//! A [`ColorScheme`] decides both the egui visuals of the surrounding window
//! and the [`CurvePalette`] used to paint the canvas.

use eframe::egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};

/// Colors used by the canvas renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct CurvePalette {
    pub background: Color32,
    pub text: Color32,
    pub grid: Color32,
    pub axis: Color32,
    pub curve: Color32,
    pub point_fill: Color32,
    pub point_stroke: Color32,
    pub selected_fill: Color32,
    pub selected_stroke: Color32,
    pub selection_rect: Color32,
}

impl CurvePalette {
    /// Black on white, the classic look of the editor.
    pub fn light() -> Self {
        Self {
            background: Color32::WHITE,
            text: Color32::BLACK,
            grid: Color32::from_rgb(0xcc, 0xcc, 0xcc),
            axis: Color32::BLACK,
            curve: Color32::from_rgb(0x00, 0x7b, 0xff),
            point_fill: Color32::from_rgb(0xb0, 0xc4, 0xde),
            point_stroke: Color32::from_rgb(0x00, 0x00, 0xff),
            selected_fill: Color32::from_rgb(0xff, 0x8f, 0x97),
            selected_stroke: Color32::from_rgb(0xff, 0x00, 0x00),
            selection_rect: Color32::from_rgba_unmultiplied(0, 0, 255, 128),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(27, 27, 27),
            text: Color32::from_rgb(220, 220, 220),
            grid: Color32::from_rgb(60, 60, 60),
            axis: Color32::from_rgb(200, 200, 200),
            curve: Color32::from_rgb(0x4d, 0xa3, 0xff),
            point_fill: Color32::from_rgb(0x5a, 0x6e, 0x8c),
            point_stroke: Color32::from_rgb(0x8c, 0xb4, 0xff),
            selected_fill: Color32::from_rgb(0xff, 0x8f, 0x97),
            selected_stroke: Color32::from_rgb(0xff, 0x4d, 0x4d),
            selection_rect: Color32::from_rgba_unmultiplied(120, 160, 255, 160),
        }
    }
}

/// Visual theme for the editor, including user-defined custom palettes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// White canvas with the classic blue/red point colors.
    #[default]
    Light,
    /// Dark window and canvas.
    Dark,
    /// User-defined palette on top of light or dark window visuals.
    Custom(CustomColorScheme),
}

/// User-defined palette, stored as RGBA bytes so it can live in the config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomColorScheme {
    /// Use dark egui visuals for the window chrome.
    pub dark_visuals: bool,
    pub background: [u8; 4],
    pub text: [u8; 4],
    pub grid: [u8; 4],
    pub axis: [u8; 4],
    pub curve: [u8; 4],
    pub point_fill: [u8; 4],
    pub point_stroke: [u8; 4],
    pub selected_fill: [u8; 4],
    pub selected_stroke: [u8; 4],
    pub selection_rect: [u8; 4],
    /// Optional label for UI display.
    pub label: Option<String>,
}

fn rgba(c: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
}

impl CustomColorScheme {
    pub fn palette(&self) -> CurvePalette {
        CurvePalette {
            background: rgba(self.background),
            text: rgba(self.text),
            grid: rgba(self.grid),
            axis: rgba(self.axis),
            curve: rgba(self.curve),
            point_fill: rgba(self.point_fill),
            point_stroke: rgba(self.point_stroke),
            selected_fill: rgba(self.selected_fill),
            selected_stroke: rgba(self.selected_stroke),
            selection_rect: rgba(self.selection_rect),
        }
    }
}

impl ColorScheme {
    /// Built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Light, ColorScheme::Dark]
    }

    /// Human-readable label.
    pub fn label(&self) -> String {
        match self {
            ColorScheme::Light => "Light".to_string(),
            ColorScheme::Dark => "Dark".to_string(),
            ColorScheme::Custom(custom) => {
                custom.label.clone().unwrap_or_else(|| "Custom".to_string())
            }
        }
    }

    pub fn palette(&self) -> CurvePalette {
        match self {
            ColorScheme::Light => CurvePalette::light(),
            ColorScheme::Dark => CurvePalette::dark(),
            ColorScheme::Custom(custom) => custom.palette(),
        }
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            ColorScheme::Light => Visuals::light(),
            ColorScheme::Dark => Visuals::dark(),
            ColorScheme::Custom(custom) if custom.dark_visuals => Visuals::dark(),
            ColorScheme::Custom(_) => Visuals::light(),
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }
}

//! Standalone eframe wrapper around [`CurveEditor`].

use std::path::PathBuf;

use eframe::egui;
use egui_phosphor::regular::{
    ARROW_COUNTER_CLOCKWISE, CLIPBOARD_TEXT, FLOPPY_DISK, GLOBE_HEMISPHERE_WEST, MOUNTAINS,
};

use crate::color_scheme::ColorScheme;
use crate::config::EditorConfig;
use crate::controllers::CurveController;
use crate::editor::CurveEditor;
use crate::render::RenderStyle;

use super::canvas::CurveCanvas;

/// Standalone application hosting the editor canvas and its parameter inputs.
pub struct AltitudeEditorApp {
    editor: CurveEditor,
    config: EditorConfig,
    style: RenderStyle,
    canvas: CurveCanvas,
    controller: Option<CurveController>,
    /// Where "Save settings" writes the config. `None` hides the button.
    config_path: Option<PathBuf>,

    // Raw text of the parameter inputs, kept even when it does not parse.
    max_altitude_text: String,
    geoid_undulation_text: String,
    point_count: usize,

    color_scheme_applied: bool,
}

impl AltitudeEditorApp {
    pub fn new(editor: CurveEditor, config: EditorConfig) -> Self {
        let params = editor.params();
        Self {
            max_altitude_text: params.max_altitude.to_string(),
            geoid_undulation_text: params.geoid_undulation.to_string(),
            point_count: editor.curve().len(),
            style: RenderStyle::from_config(&config),
            canvas: CurveCanvas::new(),
            controller: None,
            config_path: None,
            color_scheme_applied: false,
            editor,
            config,
        }
    }

    pub fn with_controller(mut self, controller: CurveController) -> Self {
        self.controller = Some(controller);
        self
    }

    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn editor(&self) -> &CurveEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut CurveEditor {
        &mut self.editor
    }

    fn set_color_scheme(&mut self, ctx: &egui::Context, scheme: ColorScheme) {
        scheme.apply(ctx);
        self.style.palette = scheme.palette();
        self.config.color_scheme = scheme;
    }

    fn parameter_inputs(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("{MOUNTAINS} Max. Altitude (m)"));
        let r = ui.add(
            egui::TextEdit::singleline(&mut self.max_altitude_text)
                .id_salt("max-altitude")
                .desired_width(80.0),
        );
        if r.changed() {
            self.editor.set_max_altitude_text(&self.max_altitude_text);
        }

        ui.label(format!("{GLOBE_HEMISPHERE_WEST} Geoidal Separation (m)"));
        let r = ui.add(
            egui::TextEdit::singleline(&mut self.geoid_undulation_text)
                .id_salt("geoid-undulation")
                .desired_width(80.0),
        );
        if r.changed() {
            self.editor
                .set_geoid_undulation_text(&self.geoid_undulation_text);
        }
    }

    fn point_count_controls(&mut self, ui: &mut egui::Ui) {
        ui.label("Points");
        ui.add(egui::DragValue::new(&mut self.point_count).range(2..=1000));
        if ui
            .button(format!("{ARROW_COUNTER_CLOCKWISE} Reset curve"))
            .on_hover_text("Replace the curve with flat, evenly spaced points")
            .clicked()
        {
            if let Err(e) = self.editor.initialize_points(self.point_count) {
                log::warn!("failed to reset curve: {e}");
            }
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.parameter_inputs(ui);

            if self.config.features.point_count_controls {
                ui.separator();
                self.point_count_controls(ui);
            }

            ui.separator();
            let mut scheme = self.config.color_scheme.clone();
            egui::ComboBox::from_id_salt("color-scheme")
                .selected_text(scheme.label())
                .show_ui(ui, |ui| {
                    for s in ColorScheme::all() {
                        ui.selectable_value(&mut scheme, s.clone(), s.label());
                    }
                });
            if scheme != self.config.color_scheme {
                self.set_color_scheme(ctx, scheme);
            }

            if ui
                .button(CLIPBOARD_TEXT)
                .on_hover_text("Copy points as JSON")
                .clicked()
            {
                match serde_json::to_string(&self.editor.points()) {
                    Ok(json) => ctx.copy_text(json),
                    Err(e) => log::error!("failed to serialize points: {e}"),
                }
            }

            if let Some(path) = &self.config_path {
                if ui
                    .button(FLOPPY_DISK)
                    .on_hover_text(format!("Save settings to {}", path.display()))
                    .clicked()
                {
                    self.store_settings();
                }
            }
        });
    }

    /// Write the current parameters and point count back into the config file.
    fn store_settings(&mut self) {
        let Some(path) = &self.config_path else {
            return;
        };
        let params = self.editor.params();
        self.config.defaults.max_altitude = params.max_altitude;
        self.config.defaults.geoid_undulation = params.geoid_undulation;
        self.config.defaults.point_count = self.editor.curve().len();
        if let Err(e) = self.config.save_to_file(path) {
            log::error!("failed to save settings to {}: {e}", path.display());
        }
    }

    fn status_line(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(self.editor.gesture().label());
            ui.separator();
            ui.label(format!(
                "{} points, {} selected",
                self.editor.curve().len(),
                self.editor.selection().len()
            ));
            ui.separator();
            ui.weak("Drag a point to move it, drag empty space to select, Shift+drag to move the selection");
        });
    }
}

impl eframe::App for AltitudeEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.color_scheme_applied {
            self.config.color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }

        if let Some(ctrl) = &self.controller {
            let before = self.editor.curve().len();
            ctrl.sync(&mut self.editor);
            if self.editor.curve().len() != before {
                self.point_count = self.editor.curve().len();
            }
        }

        egui::TopBottomPanel::top("altitude-editor-inputs").show(ctx, |ui| {
            self.top_bar(ctx, ui);
        });

        egui::TopBottomPanel::bottom("altitude-editor-status").show(ctx, |ui| {
            self.status_line(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.push_id("altitude-editor", |ui| {
                    self.canvas.show(ui, &mut self.editor, &self.style);
                });
            });
    }
}

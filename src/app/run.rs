//! Top-level entry point for running the altitude editor as a native window.

use std::path::PathBuf;

use eframe::egui;

use crate::config::EditorConfig;
use crate::controllers::CurveController;
use crate::editor::CurveEditor;
use crate::events::{EventController, RepaintObserver};

use super::editor_app::AltitudeEditorApp;

/// Optional host-side wiring for [`run_altitude_editor_with_options`].
#[derive(Clone, Default)]
pub struct RunOptions {
    /// Lets host code read the curve and queue reinitializations.
    pub curve_controller: Option<CurveController>,
    /// Receives every change event of the editor.
    pub event_controller: Option<EventController>,
    /// Enables the "save settings" button, writing to this path.
    pub config_path: Option<PathBuf>,
}

/// Launch the editor in a native window. Blocks until the window is closed.
pub fn run_altitude_editor(cfg: EditorConfig) -> eframe::Result<()> {
    run_altitude_editor_with_options(cfg, RunOptions::default())
}

/// Launch the editor with controllers attached.
///
/// 1. Builds the [`CurveEditor`] from `cfg`; an invalid initial point count
///    fails before any window is opened.
/// 2. Opens a native window sized and titled from `cfg`, with the
///    `icon.svg` window icon when it can be rendered.
/// 3. Attaches a repaint observer plus the optional event controller and
///    enters the eframe event loop.
pub fn run_altitude_editor_with_options(
    cfg: EditorConfig,
    options: RunOptions,
) -> eframe::Result<()> {
    let cfg = cfg.sanitized();
    let mut editor =
        CurveEditor::from_config(&cfg).map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;
    if let Some(events) = options.event_controller {
        editor.add_observer(Box::new(events));
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(cfg.title.clone())
        .with_inner_size(egui::vec2(
            cfg.canvas.initial_size[0],
            cfg.canvas.initial_size[1] + 80.0,
        ));
    if let Some(icon) = load_app_icon_svg() {
        viewport = viewport.with_icon(icon);
    }
    let opts = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    log::info!(
        "starting editor with {} points ({} scheme)",
        editor.curve().len(),
        cfg.color_scheme.label()
    );

    let title = cfg.title.clone();
    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            editor.add_observer(Box::new(RepaintObserver(cc.egui_ctx.clone())));
            let mut app = AltitudeEditorApp::new(editor, cfg);
            if let Some(ctrl) = options.curve_controller {
                app = app.with_controller(ctrl);
            }
            if let Some(path) = options.config_path {
                app = app.with_config_path(path);
            }
            Ok(Box::new(app))
        }),
    )
}

/// Rasterize the crate's `icon.svg` into an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let tree = usvg::Tree::from_data(&data, &usvg::Options::default()).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}

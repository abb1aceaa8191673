//! Native eframe application hosting the curve editor.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`canvas`]      | egui painter surface and pointer forwarding for the editor canvas |
//! | [`editor_app`]  | Standalone [`AltitudeEditorApp`] with the parameter inputs |
//! | [`run`]         | Top-level [`run_altitude_editor()`] entry point and icon loading |

mod canvas;
mod editor_app;
mod run;

pub use canvas::{CurveCanvas, PainterSurface};
pub use editor_app::AltitudeEditorApp;
pub use run::{run_altitude_editor, run_altitude_editor_with_options, RunOptions};

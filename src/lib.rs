//! Altitude editor crate root: re-exports and module wiring.
//!
//! An interactive canvas for editing a normalized altitude profile: a row of
//! evenly spaced control points whose heights are dragged with the pointer,
//! either one at a time or as a rectangle-selected group.
//!
//! - `editor`: the widget state and its pointer/parameter handlers
//! - `data`: coordinate mapping, points, selection, parameters, gestures
//! - `render`: painting the editor onto an abstract surface
//! - `events`: redraw observers and channel-based change events
//! - `controllers`: access to the curve from outside the UI thread
//! - `config`: TOML configuration
//! - `app`: the eframe window hosting everything

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod controllers;
pub mod data;
pub mod editor;
pub mod error;
pub mod events;
pub mod render;

// Public re-exports for a compact external API
pub use app::{
    run_altitude_editor, run_altitude_editor_with_options, AltitudeEditorApp, CurveCanvas,
    RunOptions,
};
pub use color_scheme::{ColorScheme, CurvePalette, CustomColorScheme};
pub use config::EditorConfig;
pub use controllers::CurveController;
pub use data::gesture::{GestureState, PointerInput};
pub use data::points::{ControlPoint, PointSnapshot};
pub use data::transform::CanvasTransform;
pub use editor::CurveEditor;
pub use error::{ConfigError, CurveError, ParamError};
pub use events::{ChangeKind, EditorEvent, EventController, RedrawObserver};
pub use render::{render, RecordingSurface, RenderStyle, Surface};

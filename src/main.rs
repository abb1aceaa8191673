use std::path::PathBuf;

use altitude_editor::{run_altitude_editor_with_options, EditorConfig, RunOptions};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("altitude-editor v{}", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(EditorConfig::config_path);
    let cfg = EditorConfig::load_from_file(&config_path);

    let options = RunOptions {
        config_path: Some(config_path),
        ..RunOptions::default()
    };
    if let Err(e) = run_altitude_editor_with_options(cfg, options) {
        log::error!("editor failed: {e}");
        std::process::exit(1);
    }
}

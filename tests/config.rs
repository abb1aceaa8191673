use std::path::PathBuf;

use altitude_editor::config::CONFIG_FILE_NAME;
use altitude_editor::{ColorScheme, ConfigError, CurveEditor, EditorConfig};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("altitude-editor-{}-{name}", std::process::id()))
}

#[test]
fn save_then_load_restores_the_config() {
    let path = scratch_path("roundtrip.toml");
    let mut cfg = EditorConfig::default();
    cfg.title = "Survey".into();
    cfg.color_scheme = ColorScheme::Dark;
    cfg.defaults.point_count = 7;
    cfg.features.grid = false;

    cfg.save_to_file(&path).unwrap();
    let loaded = EditorConfig::load_from_file(&path);
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, cfg);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = scratch_path("does-not-exist.toml");
    assert!(matches!(
        EditorConfig::try_load(&path),
        Err(ConfigError::Io(_))
    ));
    assert_eq!(EditorConfig::load_from_file(&path), EditorConfig::default());
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let path = scratch_path("broken.toml");
    std::fs::write(&path, "[defaults\npoint_count = ").unwrap();
    let loaded = EditorConfig::load_from_file(&path);
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, EditorConfig::default());
}

#[test]
fn editor_is_built_from_config() {
    let cfg = EditorConfig::from_toml_str(
        r#"
        [canvas]
        margin = 20.0
        hit_radius = 4.0
        initial_size = [200.0, 100.0]

        [defaults]
        point_count = 3
        max_altitude = 250.0
        geoid_undulation = -12.5
        "#,
    )
    .unwrap();
    let ed = CurveEditor::from_config(&cfg).unwrap();
    assert_eq!(ed.points().len(), 3);
    assert_eq!(ed.params().max_altitude, 250.0);
    assert_eq!(ed.params().geoid_undulation, -12.5);
    assert_eq!(ed.transform().margin, 20.0);
    assert_eq!(ed.hit_radius(), 4.0);
    // middle point sits at (100, 80); 5 px away is outside the 4 px radius
    assert_eq!(ed.hit_test(103.0, 80.0), Some(1));
    assert_eq!(ed.hit_test(105.0, 80.0), None);
}

#[test]
fn single_point_config_is_rejected() {
    let mut cfg = EditorConfig::default();
    cfg.defaults.point_count = 1;
    assert!(CurveEditor::from_config(&cfg).is_err());
}

#[test]
fn default_path_uses_the_config_file_name() {
    assert!(EditorConfig::config_path().ends_with(CONFIG_FILE_NAME));
}

#[test]
fn invalid_max_altitude_falls_back_to_default() {
    for text in ["-5.0", "0.0", "nan", "inf"] {
        let cfg =
            EditorConfig::from_toml_str(&format!("[defaults]\nmax_altitude = {text}\n")).unwrap();
        let ed = CurveEditor::from_config(&cfg).unwrap();
        assert_eq!(ed.params().max_altitude, 100.0, "max_altitude = {text}");
    }
}

#[test]
fn programmatic_config_is_checked_too() {
    let mut cfg = EditorConfig::default();
    cfg.defaults.max_altitude = -5.0;
    cfg.defaults.geoid_undulation = f64::NAN;
    cfg.canvas.hit_radius = 0.0;
    cfg.canvas.margin = f32::INFINITY;
    let ed = CurveEditor::from_config(&cfg).unwrap();
    assert_eq!(ed.params().max_altitude, 100.0);
    assert_eq!(ed.params().geoid_undulation, 0.0);
    assert_eq!(ed.hit_radius(), 10.0);
    assert_eq!(ed.transform().margin, 30.0);
}

#[test]
fn out_of_range_file_values_are_replaced_on_load() {
    let path = scratch_path("out-of-range.toml");
    std::fs::write(&path, "[canvas]\ngrid_step = 2.5\nfont_size = -1.0\n").unwrap();
    let loaded = EditorConfig::load_from_file(&path);
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, EditorConfig::default());
}

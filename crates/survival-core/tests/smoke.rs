// File: crates/survival-core/tests/smoke.rs
// Purpose: End-to-end smoke test: JSON file on disk -> controller -> SVG file.

use survival_core::{ChartController, DataError, JsonFileSource, RenderOptions};

const DATA: &str = r#"[
    {"variable":"sex","sex":"M","time":0,"survival":1.0},
    {"variable":"sex","sex":"M","time":120,"survival":0.82},
    {"variable":"sex","sex":"F","time":0,"survival":1.0},
    {"variable":"sex","sex":"F","time":200,"survival":0.9},
    {"variable":"age_group","age_group":"<65","time":0,"survival":1.0},
    {"variable":"age_group","age_group":"<65","time":90,"survival":0.95},
    {"variable":"age_group","age_group":">=65","time":0,"survival":1.0},
    {"variable":"age_group","age_group":">=65","time":60,"survival":0.7}
]"#;

#[test]
fn load_render_and_write_svg() {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = std::path::PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("smoke_survival.json");
    std::fs::write(&input, DATA).unwrap();

    let mut controller = ChartController::new(RenderOptions::default());
    controller.load(&JsonFileSource::new(&input)).expect("load should succeed");
    assert_eq!(controller.renderer().keys(), vec!["M", "F"]);

    controller.on_change("age_group").expect("data is loaded");
    assert_eq!(controller.renderer().keys(), vec!["<65", ">=65"]);

    let out = dir.join("smoke.svg");
    controller.renderer().render_to_svg(&out).expect("write svg");
    let svg = std::fs::read_to_string(&out).expect("output exists");
    assert!(svg.starts_with("<svg"), "should be an svg document");
    assert!(svg.contains("data-key=\"&lt;65\""), "keys are escaped");
}

#[test]
fn missing_file_is_reported_and_chart_stays_blank() {
    let mut controller = ChartController::default();
    let err = controller
        .load(&JsonFileSource::new("target/test_out/definitely_missing.json"))
        .unwrap_err();
    assert!(matches!(err, DataError::Io { .. }));
    assert!(controller.renderer().paths().is_empty());
    assert!(controller.renderer().variable().is_none());
}

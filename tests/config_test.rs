// Settings file loading

use bubbletty::config::Settings;
use bubbletty::error::ConfigError;
use std::fs;
use std::path::Path;
use std::time::Duration;

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("bubbletty.toml");
    fs::write(
        &path,
        r#"
            values = [9, 8, 7]
            log_filter = "debug"

            [speed]
            min = 200
            max = 800
            step = 200
            initial = 700

            [timing]
            settle_ms = 50
        "#,
    )
    .expect("Failed to write config");

    let settings = Settings::load(Some(&path)).expect("Failed to load config");
    settings.validate().expect("Config should be valid");

    assert_eq!(settings.values, vec![9, 8, 7]);
    assert_eq!(settings.log_filter, "debug");
    assert_eq!(settings.settle_delay(), Duration::from_millis(50));

    // 700 snaps to the nearest 200 step above the minimum
    let speed = settings.speed_control();
    assert_eq!(speed.value(), 800);
    assert_eq!(speed.step_delay(), Duration::from_millis(200));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Settings::load(Some(Path::new("/nonexistent/bubbletty.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/bubbletty.toml"));
}

#[test]
fn test_no_file_uses_defaults() {
    let settings = Settings::load(None).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_driver_from_settings_sorts() {
    let mut settings = Settings::default();
    settings.values = vec![4, 3];
    settings.timing.settle_ms = 0;
    settings.speed.initial = 1000;
    let driver = settings.driver();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    let mut trace = bubbletty::driver::TraceObserver::new(Vec::new());
    let sorted = runtime.block_on(driver.run(settings.values.clone(), &mut trace));
    assert_eq!(sorted, Some(vec![3, 4]));
}

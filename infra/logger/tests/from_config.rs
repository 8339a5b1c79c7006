use hdesign_domain::config::LoggingConfig;
use hdesign_logger::init_from_config;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn config_with_directory_writes_json_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let config = LoggingConfig {
        name: "design-from-config".to_owned(),
        level: "debug".to_owned(),
        directory: Some(log_dir.clone()),
        json: true,
        console: false,
        ..LoggingConfig::default()
    };

    let logger = init_from_config(&config)?;
    assert!(logger.guard().is_some(), "file logging should keep a worker guard");

    tracing::info!(resources = 3, "design evaluated");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    let first_line = contents.lines().next().expect("at least one line");
    assert!(first_line.starts_with('{'), "json lines expected, got: {first_line}");
    assert!(contents.contains("design evaluated"));
    Ok(())
}

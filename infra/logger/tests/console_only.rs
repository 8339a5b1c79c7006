use hdesign_domain::config::LoggingConfig;
use hdesign_logger::{LoggerError, init_from_config};

#[test]
fn default_config_logs_to_console_only() {
    let config = LoggingConfig { name: "design-console-only".to_owned(), ..LoggingConfig::default() };
    let logger = init_from_config(&config).expect("logger should initialize");

    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
}

#[test]
fn config_without_any_output_is_rejected() {
    let config = LoggingConfig { console: false, directory: None, ..LoggingConfig::default() };
    let err = init_from_config(&config).expect_err("no output layers must fail");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("No logging layers enabled"));
}

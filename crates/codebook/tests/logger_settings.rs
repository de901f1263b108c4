use codebook::domain::config::Settings;
use codebook::logger::{LevelFilter, LoggerError};
use codebook::{ConfigFlags, effective_level, logger_builder};

fn settings_with_level(level: &str) -> Settings {
    let mut settings = Settings::default();
    settings.logging.level = level.to_owned();
    settings.runtime.flags = ConfigFlags::empty();
    settings
}

#[test]
fn unknown_level_is_rejected() {
    let settings = settings_with_level("chatty");

    let err = logger_builder(&settings).expect_err("level must be known");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    assert!(effective_level(&settings).is_err());
}

#[test]
fn configured_level_is_kept_without_debug_switches() {
    assert_eq!(effective_level(&settings_with_level("info")).unwrap(), LevelFilter::INFO);
    assert_eq!(effective_level(&settings_with_level("warn")).unwrap(), LevelFilter::WARN);
}

#[test]
fn enable_debug_flag_raises_info_to_debug() {
    let mut settings = settings_with_level("info");
    settings.runtime.flags = ConfigFlags::LOG_REQUESTS | ConfigFlags::ENABLE_DEBUG;
    assert_eq!(effective_level(&settings).unwrap(), LevelFilter::DEBUG);
}

#[test]
fn debug_switch_raises_error_to_debug() {
    let mut settings = settings_with_level("error");
    settings.runtime.debug = true;
    assert_eq!(effective_level(&settings).unwrap(), LevelFilter::DEBUG);
}

#[test]
fn debug_switches_never_lower_trace() {
    let mut settings = settings_with_level("trace");
    settings.runtime.debug = true;
    settings.runtime.flags = ConfigFlags::ENABLE_DEBUG;
    assert_eq!(effective_level(&settings).unwrap(), LevelFilter::TRACE);
}

#[test]
fn builder_accepts_filter_directives() {
    let mut settings = settings_with_level("info");
    settings.logging.filter = Some("codebook=trace".to_owned());
    assert!(logger_builder(&settings).is_ok());
}

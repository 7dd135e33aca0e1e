#[cfg(feature = "std")]
mod logging_tests {
    use broadside::{init_logging, parse_level};
    use log::LevelFilter;

    #[test]
    fn test_level_names() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" INFO ")), LevelFilter::Info);
        assert_eq!(parse_level(Some("off")), LevelFilter::Off);
    }

    #[test]
    fn test_verbosity_digits() {
        assert_eq!(parse_level(Some("0")), LevelFilter::Off);
        assert_eq!(parse_level(Some("1")), LevelFilter::Error);
        assert_eq!(parse_level(Some("3")), LevelFilter::Info);
        assert_eq!(parse_level(Some("9")), LevelFilter::Trace);
    }

    #[test]
    fn test_unset_or_garbage_defaults_to_warn() {
        assert_eq!(parse_level(None), LevelFilter::Warn);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("")), LevelFilter::Warn);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging();
        init_logging();
        log::warn!("logger installed");
    }
}

use log::LevelFilter;

pub fn level_filter(log_level: &str) -> LevelFilter {
    match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}

/// Route `log` records to stderr at the given level.
pub fn setup_logging(log_level: &str) {
    let _ = env_logger::Builder::new()
        .filter_level(level_filter(log_level))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("error"), LevelFilter::Error);
        assert_eq!(level_filter("INFO"), LevelFilter::Info);
        assert_eq!(level_filter("debug"), LevelFilter::Debug);
        assert_eq!(level_filter("warn"), LevelFilter::Warn);
        assert_eq!(level_filter("verbose"), LevelFilter::Warn);
    }
}

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use spdlog::sink::{RotatingFileSink, RotationPolicy, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger};

use crate::config::{Config, LogLevel};

fn severity(level: LogLevel) -> Level {
    match level {
        LogLevel::Critical => Level::Critical,
        LogLevel::Error => Level::Error,
        LogLevel::Warn => Level::Warn,
        LogLevel::Info => Level::Info,
        LogLevel::Debug => Level::Debug,
        LogLevel::Trace => Level::Trace,
    }
}

fn console_sink(stream: StdStream, filter: LevelFilter) -> spdlog::Result<Arc<StdStreamSink>> {
    Ok(Arc::new(StdStreamSink::builder()
        .std_stream(stream)
        .level_filter(filter)
        .build()?))
}

fn daily_file_sink(location: &Path, max_files: usize) -> spdlog::Result<Arc<RotatingFileSink>> {
    Ok(Arc::new(RotatingFileSink::builder()
        .base_path(location)
        .rotation_policy(RotationPolicy::Daily { hour: 0, minute: 0 })
        .max_files(max_files)
        .rotate_on_open(false)
        .build()?))
}

/// Progress goes to stdout, warnings and errors to stderr. A `[log]`
/// location adds a daily rotating file.
pub fn configure_logger(config: &Config) -> spdlog::Result<()> {
    let mut builder = Logger::builder();
    builder
        .sink(console_sink(StdStream::Stdout, LevelFilter::MoreVerbose(Level::Warn))?)
        .sink(console_sink(StdStream::Stderr, LevelFilter::MoreSevereEqual(Level::Warn))?);

    if let Some(ref location) = config.log.location {
        builder.sink(daily_file_sink(location, config.log.max_files)?);
    }

    let logger = Arc::new(builder.build()?);
    logger.set_flush_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
    logger.set_flush_period(Some(Duration::from_secs(2)));
    logger.set_level_filter(LevelFilter::MoreSevereEqual(severity(config.log.level)));

    spdlog::set_default_logger(logger);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity() {
        assert_eq!(severity(LogLevel::Critical), Level::Critical);
        assert_eq!(severity(LogLevel::Warn), Level::Warn);
        assert_eq!(severity(LogLevel::default()), Level::Info);
        assert_eq!(severity(LogLevel::Trace), Level::Trace);
    }

    #[test]
    fn test_level_filter_from_config() {
        let filter = LevelFilter::MoreSevereEqual(severity(LogLevel::Info));
        assert!(filter.test(Level::Warn));
        assert!(filter.test(Level::Info));
        assert!(!filter.test(Level::Debug));
    }

    #[test]
    fn test_file_sink_in_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sink = daily_file_sink(&dir.path().join("blogdex.log"), 3);
        assert!(sink.is_ok());
    }
}

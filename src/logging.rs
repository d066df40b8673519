use flexi_logger::{Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming};

/// Maps a search debug level to a log spec: 0 warn, 1 info, 2 debug, 3+ trace.
pub fn level_spec(debug_level: u8) -> &'static str {
    match debug_level {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Starts a colored stderr logger. `RUST_LOG` wins over `debug_level`.
///
/// The returned handle must stay alive for the logger to keep flushing.
pub fn setup_logging(debug_level: u8) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level_spec(debug_level))?
        .format(flexi_logger::colored_default_format)
        .start()
}

/// Same as [`setup_logging`], writing rotated files into `directory` instead.
pub fn setup_file_logging(
    debug_level: u8,
    directory: &str,
) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level_spec(debug_level))?
        .log_to_file(FileSpec::default().directory(directory))
        .format(flexi_logger::opt_format)
        .rotate(
            Criterion::Size(10 * 1024 * 1024),
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()
}

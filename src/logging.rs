use flexi_logger::{
    style, DeferredNow, Duplicate, FileSpec, FlexiLoggerError, LogSpecification, Logger,
    LoggerHandle,
};
use log::LevelFilter;
use std::io::Write;
use std::path::Path;

/// Starts logging to stderr, and to `log_file` as well when given.
/// The returned handle has to stay alive for the file output to be flushed.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let log_specification = LogSpecification::builder().default(level).build();

    let logger = Logger::with(log_specification).format(format_log_entry);
    let logger = match log_file {
        Some(p) => {
            let (dir, stem, suffix) = file_parts(p);
            let spec = FileSpec::default()
                .directory(dir)
                .basename(stem)
                .suffix(suffix)
                .suppress_timestamp();
            logger
                .log_to_file(spec)
                .duplicate_to_stderr(Duplicate::All)
        }
        None => logger.log_to_stderr(),
    };
    logger.start()
}

/// Splits a log file path into directory, basename and suffix.
/// A path without extension gets the `log` suffix, so `foo` logs to `foo.log`.
fn file_parts(path: &Path) -> (&Path, &str, &str) {
    let dir = path
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("subtype-catalog");
    let suffix = path
        .extension()
        .and_then(|s| s.to_str())
        .filter(|ext| !ext.is_empty())
        .unwrap_or("log");
    (dir, stem, suffix)
}

/// Formats a log entry with color
fn format_log_entry(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> std::io::Result<()> {
    let level = record.level();
    let time_str = now.now().time().format("%H:%M:%S").to_string();

    write!(
        w,
        "[ {} ] {} {}",
        style(level).paint(level.to_string()),
        time_str,
        record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_parts_default_to_log_suffix() {
        assert_eq!(
            file_parts(Path::new("/tmp/catalog.txt")),
            (Path::new("/tmp"), "catalog", "txt")
        );
        assert_eq!(file_parts(Path::new("catalog")), (Path::new("."), "catalog", "log"));
        assert_eq!(
            file_parts(Path::new("logs/catalog.log")),
            (Path::new("logs"), "catalog", "log")
        );
    }
}

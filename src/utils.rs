use crate::error::Result;

use flexi_logger::{
    detailed_format, Age, Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
};

// Log to rotating files in logdir, echoing info and above to stdout. The
// returned handle must be kept alive for as long as logging is needed.
pub fn init_logging(logdir: &str, logspec: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_str(logspec)?
        .log_to_file(FileSpec::default().directory(logdir))
        .format(detailed_format)
        .duplicate_to_stdout(Duplicate::Info)
        .create_symlink("current.log")
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(7),
        )
        .start()?;

    Ok(handle)
}

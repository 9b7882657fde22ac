//! Appender trait for log output destinations

use super::{error::Result, log_level::LogMethod};

/// A destination for rendered log lines
///
/// `append` is called once per accepted write, with the channel the level maps
/// to and the finished line (no trailing newline).
pub trait Appender: Send + Sync {
    fn append(&self, method: LogMethod, line: &str) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}

//! Console appender implementation

use crate::core::{Appender, LogMethod, LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};

/// Boxed output stream the console appender writes to
pub type Stream = Box<dyn Write + Send>;

/// Writes each line to one of two streams
///
/// `trace`, `warn` and `error` lines go to the error stream, every other
/// channel to the output stream. Each line is flushed as soon as it is written.
pub struct ConsoleAppender {
    stdout: Mutex<Stream>,
    stderr: Mutex<Stream>,
}

impl ConsoleAppender {
    /// Appender over the process standard output and error
    pub fn new() -> Self {
        Self::with_boxed_streams(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Appender over caller-supplied streams
    ///
    /// # Example
    ///
    /// ```
    /// use rust_format_logger::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::with_streams(Vec::new(), std::io::sink());
    /// ```
    pub fn with_streams<O, E>(stdout: O, stderr: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self::with_boxed_streams(Box::new(stdout), Box::new(stderr))
    }

    pub fn with_boxed_streams(stdout: Stream, stderr: Stream) -> Self {
        Self {
            stdout: Mutex::new(stdout),
            stderr: Mutex::new(stderr),
        }
    }

    fn stream_for(&self, method: LogMethod) -> (&Mutex<Stream>, &'static str) {
        if method.is_error_stream() {
            (&self.stderr, "stderr")
        } else {
            (&self.stdout, "stdout")
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, method: LogMethod, line: &str) -> Result<()> {
        let (stream, stream_name) = self.stream_for(method);
        let mut stream = stream.lock();
        writeln!(stream, "{}", line)
            .and_then(|()| stream.flush())
            .map_err(|e| {
                LoggerError::io_operation(
                    format!("writing to {}", stream_name),
                    format!("failed to write {} line", method),
                    e,
                )
            })
    }

    fn flush(&self) -> Result<()> {
        self.stdout.lock().flush()?;
        self.stderr.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

impl fmt::Debug for ConsoleAppender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleAppender").finish_non_exhaustive()
    }
}

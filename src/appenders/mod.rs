//! Appender implementations

pub mod console;
pub mod structured;

pub use console::{ConsoleAppender, Stream};
pub use structured::{StructuredAppender, StructuredOptions};

pub use crate::core::Appender;

use crate::core::{LogMethod, Result};

/// The appender a logger writes through, chosen once at construction
#[derive(Debug)]
pub enum Backend {
    Console(ConsoleAppender),
    Structured(StructuredAppender),
}

impl Backend {
    pub fn is_structured(&self) -> bool {
        matches!(self, Backend::Structured(_))
    }

    fn appender(&self) -> &dyn Appender {
        match self {
            Backend::Console(console) => console,
            Backend::Structured(structured) => structured,
        }
    }
}

impl Appender for Backend {
    fn append(&self, method: LogMethod, line: &str) -> Result<()> {
        self.appender().append(method, line)
    }

    fn flush(&self) -> Result<()> {
        self.appender().flush()
    }

    fn name(&self) -> &str {
        self.appender().name()
    }
}

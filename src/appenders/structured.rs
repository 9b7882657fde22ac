//! Structured appender backed by `tracing`
//!
//! Every line becomes one `tracing` event at the level matching its channel,
//! with the channel name recorded in a `channel` field. Events go to the
//! dispatcher given in [`StructuredOptions`], or to the current default
//! dispatcher when none is given.

use crate::core::{Appender, LogMethod, Result};
use parking_lot::Mutex;
use std::sync::{Arc, Once, Weak};
use tracing::{dispatcher, Dispatch, Subscriber};

/// Options for the structured appender
///
/// Panic handling is not part of these options; it is controlled by the
/// logger's `handle_errors` setting.
#[derive(Debug, Clone, Default)]
pub struct StructuredOptions {
    pub dispatch: Option<Dispatch>,
}

impl StructuredOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Send events to `dispatch` instead of the default dispatcher
    #[must_use]
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    /// Send events to `subscriber` instead of the default dispatcher
    #[must_use]
    pub fn with_subscriber<S>(subscriber: S) -> Self
    where
        S: Subscriber + Send + Sync + 'static,
    {
        Self::new().with_dispatch(Dispatch::new(subscriber))
    }

    /// Human-readable `tracing_subscriber` output on stdout, all levels enabled
    #[must_use]
    pub fn fmt() -> Self {
        Self::with_subscriber(
            tracing_subscriber::fmt()
                .with_max_level(tracing::Level::TRACE)
                .finish(),
        )
    }
}

#[derive(Debug)]
struct Sink {
    dispatch: Option<Dispatch>,
}

impl Sink {
    fn emit(&self, method: LogMethod, line: &str) {
        match &self.dispatch {
            Some(dispatch) => dispatcher::with_default(dispatch, || event(method, line)),
            None => event(method, line),
        }
    }
}

fn event(method: LogMethod, line: &str) {
    let channel = method.as_str();
    match method {
        LogMethod::Trace => tracing::trace!(channel = channel, "{}", line),
        LogMethod::Debug => tracing::debug!(channel = channel, "{}", line),
        LogMethod::Info | LogMethod::Log => tracing::info!(channel = channel, "{}", line),
        LogMethod::Warn => tracing::warn!(channel = channel, "{}", line),
        LogMethod::Error => tracing::error!(channel = channel, "{}", line),
    }
}

/// Appender forwarding lines to a `tracing` subscriber
#[derive(Debug)]
pub struct StructuredAppender {
    sink: Arc<Sink>,
    handle_errors: bool,
}

impl StructuredAppender {
    /// Create the appender; with `handle_errors`, panics are reported through it
    pub fn new(options: StructuredOptions, handle_errors: bool) -> Self {
        let sink = Arc::new(Sink {
            dispatch: options.dispatch,
        });
        if handle_errors {
            panic_hook::register(&sink);
        }
        Self {
            sink,
            handle_errors,
        }
    }

    pub fn handles_errors(&self) -> bool {
        self.handle_errors
    }

    pub fn dispatch(&self) -> Option<&Dispatch> {
        self.sink.dispatch.as_ref()
    }
}

impl Appender for StructuredAppender {
    fn append(&self, method: LogMethod, line: &str) -> Result<()> {
        self.sink.emit(method, line);
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "structured"
    }
}

mod panic_hook {
    use super::*;

    static SINKS: Mutex<Vec<Weak<Sink>>> = parking_lot::const_mutex(Vec::new());
    static INSTALL: Once = Once::new();
    const REPORTER: &str = "panic-report";

    /// Report future panics to `sink` for as long as it is alive
    pub(super) fn register(sink: &Arc<Sink>) {
        {
            let mut sinks = SINKS.lock();
            sinks.retain(|sink| sink.strong_count() > 0);
            sinks.push(Arc::downgrade(sink));
        }

        INSTALL.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                // A subscriber panicking while reporting is not reported again.
                if std::thread::current().name() != Some(REPORTER) {
                    let line = format!("uncaught panic: {}", info).replace('\n', " ");
                    report(&line);
                }
                previous(info);
            }));
        });
    }

    /// Emit `line` to every live sink from a fresh thread
    ///
    /// The panicking thread may be inside a `tracing` dispatch, where its
    /// dispatcher state cannot be entered again. A failed report is dropped.
    fn report(line: &str) {
        let live: Vec<Arc<Sink>> = SINKS.lock().iter().filter_map(Weak::upgrade).collect();
        if live.is_empty() {
            return;
        }

        std::thread::scope(|scope| {
            let spawned = std::thread::Builder::new()
                .name(REPORTER.to_string())
                .spawn_scoped(scope, || {
                    for sink in &live {
                        sink.emit(LogMethod::Error, line);
                    }
                });
            if let Ok(handle) = spawned {
                let _ = handle.join();
            }
        });
    }
}

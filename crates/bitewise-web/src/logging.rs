#![forbid(unsafe_code)]

//! Tracing layer that writes formatted events to a console sink.
//!
//! In the browser the sink is `console.*`, picked per level so devtools
//! filtering works. Natively the layer is exercised with a capture sink.
//!
//! ```
//! use bitewise_core::config::LogLevel;
//! use bitewise_web::logging::{CaptureSink, ConsoleLayer};
//! use tracing_subscriber::prelude::*;
//!
//! let sink = CaptureSink::default();
//! let subscriber = tracing_subscriber::registry()
//!     .with(ConsoleLayer::new(sink.clone(), LogLevel::Debug));
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!(target: "bitewise_web", quotes = 3, "carousel bound");
//! });
//! assert_eq!(sink.lines()[0].1, "INFO bitewise carousel bound quotes=3");
//! ```

use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex};

use bitewise_core::config::LogLevel;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;

/// Destination for formatted log lines.
pub trait ConsoleSink: Send + Sync + 'static {
    fn emit(&self, level: Level, line: &str);
}

/// Map the configured verbosity onto a tracing level.
#[must_use]
pub fn max_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    fields: Vec<(&'static str, String)>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let rendered = format!("{value:?}");
        if field.name() == "message" {
            self.message = Some(rendered);
        } else {
            self.fields.push((field.name(), rendered));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }
}

/// Strip the crate suffix so `bitewise_core::upload` reads as `bitewise`.
fn short_target(target: &str) -> &str {
    target.split("::").next().map_or(target, |head| {
        head.split('_').next().unwrap_or(head)
    })
}

/// `LEVEL target message k=v ...`
fn format_event(event: &Event<'_>) -> String {
    let metadata = event.metadata();
    let mut visitor = EventVisitor::default();
    event.record(&mut visitor);

    let mut line = format!("{} {}", metadata.level(), short_target(metadata.target()));
    if let Some(message) = visitor.message {
        line.push(' ');
        line.push_str(&message);
    }
    for (key, value) in visitor.fields {
        let _ = write!(line, " {key}={value}");
    }
    line
}

/// `tracing_subscriber::Layer` writing one line per event to a [`ConsoleSink`].
pub struct ConsoleLayer<S> {
    sink: S,
    max_level: Level,
}

impl<S: ConsoleSink> ConsoleLayer<S> {
    pub fn new(sink: S, level: LogLevel) -> Self {
        Self {
            sink,
            max_level: max_level(level),
        }
    }
}

impl<S, Sub> Layer<Sub> for ConsoleLayer<S>
where
    S: ConsoleSink,
    Sub: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, Sub>) {
        let level = *event.metadata().level();
        // More verbose levels compare greater.
        if level > self.max_level {
            return;
        }
        self.sink.emit(level, &format_event(event));
    }
}

/// Sink that keeps every line in memory.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl CaptureSink {
    /// Lines captured so far.
    #[must_use]
    pub fn lines(&self) -> Vec<(Level, String)> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ConsoleSink for CaptureSink {
    fn emit(&self, level: Level, line: &str) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push((level, line.to_string()));
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use browser::BrowserConsole;

#[cfg(target_arch = "wasm32")]
mod browser {
    use tracing::Level;
    use wasm_bindgen::JsValue;
    use web_sys::console;

    use super::ConsoleSink;

    /// Routes lines to `console.error/warn/info/debug`.
    pub(crate) struct BrowserConsole;

    impl ConsoleSink for BrowserConsole {
        fn emit(&self, level: Level, line: &str) {
            let line = JsValue::from_str(line);
            match level {
                Level::ERROR => console::error_1(&line),
                Level::WARN => console::warn_1(&line),
                Level::INFO => console::info_1(&line),
                _ => console::debug_1(&line),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracing_subscriber::prelude::*;

    fn capture(level: LogLevel, f: impl FnOnce()) -> Vec<(Level, String)> {
        let sink = CaptureSink::default();
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(sink.clone(), level));
        tracing::subscriber::with_default(subscriber, f);
        sink.lines()
    }

    #[test]
    fn formats_message_and_fields() {
        let lines = capture(LogLevel::Debug, || {
            tracing::debug!(generation = 3, media_type = "image/png", "upload decode started");
        });
        assert_eq!(
            lines,
            vec![(
                Level::DEBUG,
                "DEBUG bitewise upload decode started generation=3 media_type=image/png"
                    .to_string()
            )]
        );
    }

    #[test]
    fn filters_by_level() {
        let lines = capture(LogLevel::Warn, || {
            tracing::info!("hidden");
            tracing::warn!("shown");
            tracing::error!("also shown");
        });
        let levels: Vec<Level> = lines.iter().map(|(level, _)| *level).collect();
        assert_eq!(levels, vec![Level::WARN, Level::ERROR]);
    }

    #[test]
    fn short_target_drops_module_path() {
        assert_eq!(short_target("bitewise_core::upload"), "bitewise");
        assert_eq!(short_target("bitewise_web"), "bitewise");
        assert_eq!(short_target("other"), "other");
    }

    #[test]
    fn level_mapping() {
        assert_eq!(max_level(LogLevel::Error), Level::ERROR);
        assert_eq!(max_level(LogLevel::Trace), Level::TRACE);
    }
}

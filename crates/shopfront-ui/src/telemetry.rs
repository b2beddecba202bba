//! Routes `tracing` events to the browser console.
//!
//! Every `StructuredLogger` entry is emitted as a `tracing` event; this module
//! installs the subscriber that writes those events out. Warnings and errors
//! go to `console.warn` / `console.error` so they stand out in dev tools.

use std::io::{self, Write};

use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::fmt::MakeWriter;

/// Console method used for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Log,
    Warn,
    Error,
}

impl ConsoleLevel {
    pub fn for_level(level: &Level) -> Self {
        if *level == Level::ERROR {
            ConsoleLevel::Error
        } else if *level == Level::WARN {
            ConsoleLevel::Warn
        } else {
            ConsoleLevel::Log
        }
    }

    fn write_line(self, line: &str) {
        match self {
            ConsoleLevel::Log => leptos::logging::log!("{}", line),
            ConsoleLevel::Warn => leptos::logging::warn!("{}", line),
            ConsoleLevel::Error => leptos::logging::error!("{}", line),
        }
    }
}

/// Buffers one formatted event and hands it to the console when dropped.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: ConsoleLevel,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: ConsoleLevel) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buffer.is_empty() {
            let text = String::from_utf8_lossy(&self.buffer);
            self.level.write_line(text.trim_end());
            self.buffer.clear();
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::for_level(meta.level()))
    }
}

/// Plain-text `fmt` subscriber writing to `writer`.
///
/// No timestamps: the browser console adds its own and `SystemTime` is not
/// available on `wasm32-unknown-unknown`.
pub fn subscriber<W>(writer: W, max_level: Level) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(max_level)
        .without_time()
        .with_target(false)
        .finish()
}

/// Install the console subscriber as the global default.
pub fn init_console_logging(
    max_level: Level,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(subscriber(ConsoleMakeWriter, max_level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use shopfront_data::{FetchClient, HttpPaymentMethods};
    use shopfront_observability::StructuredLogger;

    use crate::components::{load_badges, BadgeState};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = SharedBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_console_level_mapping() {
        assert_eq!(ConsoleLevel::for_level(&Level::ERROR), ConsoleLevel::Error);
        assert_eq!(ConsoleLevel::for_level(&Level::WARN), ConsoleLevel::Warn);
        assert_eq!(ConsoleLevel::for_level(&Level::INFO), ConsoleLevel::Log);
        assert_eq!(ConsoleLevel::for_level(&Level::TRACE), ConsoleLevel::Log);
    }

    #[test]
    fn test_logger_entries_reach_writer() {
        let buffer = SharedBuffer::default();
        tracing::subscriber::with_default(subscriber(buffer.clone(), Level::INFO), || {
            let logger = StructuredLogger::new("CartPage");
            logger.info("Cart cleared");
            tracing::debug!(target: "shopfront", "below max level");
        });

        let output = buffer.contents();
        assert!(output.contains("INFO"));
        assert!(output.contains("Cart cleared"));
        assert!(output.contains("CartPage"));
        assert!(!output.contains("below max level"));
    }

    #[tokio::test]
    async fn test_payment_failure_warning_is_written() {
        let buffer = SharedBuffer::default();
        let _guard = tracing::subscriber::set_default(subscriber(buffer.clone(), Level::INFO));
        let service = HttpPaymentMethods::new(
            FetchClient::new(),
            "http://127.0.0.1:9/api/payment-methods",
        );

        let state = load_badges(&service, &StructuredLogger::new("AddToCartButton")).await;

        assert_eq!(state, BadgeState::Failed);
        let output = buffer.contents();
        assert!(output.contains("WARN"));
        assert!(output.contains("Payment methods unavailable"));
    }

    #[test]
    fn test_console_writer_flushes_once() {
        let mut writer = ConsoleWriter::new(ConsoleLevel::Warn);
        writer.write_all(b"hello\n").unwrap();
        writer.flush().unwrap();
        assert!(writer.buffer.is_empty());
        writer.flush().unwrap();
    }
}

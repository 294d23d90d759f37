//! `tracing` output routed to the browser console.
//!
//! A `fmt` layer formats each event into a buffer; the buffer is flushed to
//! `console.error/warn/info/debug` (picked from the event level) when the
//! writer is dropped at the end of the event.

use std::io;

use gloo::console;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const FALLBACK_FILTER: &str = "info";

/// Install the global subscriber.
///
/// An unparsable `directives` string falls back to `info` with a console
/// warning instead of leaving logging off.
pub fn init(directives: &str) {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|err| {
        console::warn!(format!(
            "invalid log filter {directives:?} ({err}), using {FALLBACK_FILTER:?}"
        ));
        EnvFilter::new(FALLBACK_FILTER)
    });

    let layer = fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_writer(ConsoleMakeWriter);

    if tracing_subscriber::registry().with(filter).with(layer).try_init().is_err() {
        console::warn!("tracing subscriber already installed");
    }
}

/// Hands out one [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = console_line(&self.buffer) else {
            return;
        };
        match self.level {
            Level::ERROR => console::error!(line),
            Level::WARN => console::warn!(line),
            Level::INFO => console::info!(line),
            _ => console::debug!(line),
        }
    }
}

/// The printable line for a formatted event, without the trailing newline.
fn console_line(buffer: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(buffer);
    let line = text.trim_end();
    if line.is_empty() {
        None
    } else {
        Some(line.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_console_line_trims_newline() {
        assert_eq!(
            console_line(b" INFO style_canvas_core: Saved outfit\n").as_deref(),
            Some(" INFO style_canvas_core: Saved outfit")
        );
    }

    #[test]
    fn test_console_line_skips_blank() {
        assert_eq!(console_line(b"\n"), None);
        assert_eq!(console_line(b""), None);
    }

    #[test]
    fn test_writer_buffers_chunks() {
        let mut writer = ConsoleWriter::new(Level::DEBUG);
        writer.write_all(b"DEBUG ").unwrap();
        writer.write_all(b"placed").unwrap();
        assert_eq!(console_line(&writer.buffer).as_deref(), Some("DEBUG placed"));
        // Nothing to emit on drop outside the browser.
        writer.buffer.clear();
    }

    #[test]
    fn test_make_writer_defaults_to_info() {
        let writer = ConsoleMakeWriter.make_writer();
        assert_eq!(writer.level, Level::INFO);
        drop(writer);
    }
}

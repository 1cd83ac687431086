//! Console log sink for `tracing`.
//!
//! The `fmt` subscriber writes each event through a fresh writer and drops it
//! afterwards; [`LineWriter`] buffers the bytes and hands the finished line to
//! its sink on flush or drop. On wasm the sink is `console.log` (or
//! `console.error` for WARN and ERROR).

use std::io;

use tracing::Level;

/// Parse a configured level name, falling back to INFO.
#[must_use]
pub fn parse_level(name: &str) -> Level {
    name.trim().parse().unwrap_or(Level::INFO)
}

/// Whether events at `level` go to the error stream.
#[must_use]
pub fn is_error_level(level: &Level) -> bool {
    *level <= Level::WARN
}

/// Buffers one formatted event and emits it as a single line.
pub struct LineWriter<F: FnMut(&str)> {
    buf: Vec<u8>,
    sink: F,
}

impl<F: FnMut(&str)> LineWriter<F> {
    pub fn new(sink: F) -> Self {
        Self {
            buf: Vec::with_capacity(128),
            sink,
        }
    }
}

impl<F: FnMut(&str)> io::Write for LineWriter<F> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end_matches(['\r', '\n']);
        if !line.is_empty() {
            (self.sink)(line);
        }
        self.buf.clear();
        Ok(())
    }
}

impl<F: FnMut(&str)> Drop for LineWriter<F> {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use tracing::Metadata;
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    use super::{LineWriter, is_error_level, parse_level};

    fn emit_log(line: &str) {
        web_sys::console::log_1(&JsValue::from_str(line));
    }

    fn emit_error(line: &str) {
        web_sys::console::error_1(&JsValue::from_str(line));
    }

    /// `MakeWriter` that routes each event to the browser console.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = LineWriter<fn(&str)>;

        fn make_writer(&'a self) -> Self::Writer {
            LineWriter::new(emit_log as fn(&str))
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            if is_error_level(meta.level()) {
                LineWriter::new(emit_error as fn(&str))
            } else {
                LineWriter::new(emit_log as fn(&str))
            }
        }
    }

    /// Install the console subscriber once; later calls are no-ops.
    pub fn init(level: &str) {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(parse_level(level))
            .without_time()
            .with_ansi(false)
            .with_target(false)
            .with_writer(ConsoleMakeWriter)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

#[cfg(target_arch = "wasm32")]
pub use console::{ConsoleMakeWriter, init};

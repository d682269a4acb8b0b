// tracing -> browser console bridge.
use std::io::{self, Write};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Buffers one formatted event and hands its lines to `console.log` on drop.
#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn take_lines(&mut self) -> Vec<String> {
        if self.buf.is_empty() {
            return Vec::new();
        }
        let text = String::from_utf8_lossy(&self.buf);
        let lines = text.lines().map(str::to_string).collect();
        self.buf.clear();
        lines
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        for line in self.take_lines() {
            web_sys::console::log_1(&JsValue::from_str(&line));
        }
    }
}

#[derive(Clone, Copy, Default)]
struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::default()
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // No clock in wasm32-unknown-unknown; the console stamps lines itself.
    let subscriber = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return;
    }
    tracing::info!("tracing initialized");
}

//! Browser Console Logging
//!
//! A `tracing-subscriber` fmt layer whose writer forwards each formatted
//! event to the console method matching its level, so devtools filtering
//! keeps working.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Buffers one formatted event and emits it on drop
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self { level, buffer: Vec::new() }
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
        if let Some(line) = take_line(&mut self.buffer) {
            emit(self.level, &line);
        }
    }
}

/// Drain the buffer into a single line, `None` if nothing was written
fn take_line(buffer: &mut Vec<u8>) -> Option<String> {
    let text = String::from_utf8_lossy(buffer).trim_end().to_string();
    buffer.clear();
    (!text.is_empty()).then_some(text)
}

fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        Level::DEBUG => web_sys::console::log_1(&value),
        Level::TRACE => web_sys::console::debug_1(&value),
    }
}

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

/// Install the global subscriber. Safe to call more than once.
pub fn init(level: Level) {
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        web_sys::console::warn_1(&format!("tracing already initialised: {}", e).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_take_line_trims_and_clears() {
        let mut buffer = b" INFO signed in user=parent-1\n".to_vec();
        assert_eq!(take_line(&mut buffer).as_deref(), Some(" INFO signed in user=parent-1"));
        assert!(buffer.is_empty());
        assert_eq!(take_line(&mut buffer), None);
    }

    #[test]
    fn test_writer_accumulates_partial_writes() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        writer.write_all(b"WARN ").unwrap();
        writer.write_all(b"load failed\n").unwrap();
        writer.flush().unwrap();
        assert_eq!(take_line(&mut writer.buffer).as_deref(), Some("WARN load failed"));
        // emptied buffer means drop emits nothing
    }
}

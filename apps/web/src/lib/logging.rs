//! `tracing` setup for the browser. Formatted events are forwarded line by line
//! to the developer console. Nothing logged anywhere in the app may contain
//! token material.

use std::io::{self, Write};
use tracing::Level;

/// Parses `error|warn|info|debug|trace` or a numeric level `0..=4`.
pub fn parse_level(value: &str) -> Option<Level> {
    let value = value.trim();
    if let Ok(parsed) = value.parse::<u8>() {
        return match parsed {
            0 => Some(Level::ERROR),
            1 => Some(Level::WARN),
            2 => Some(Level::INFO),
            3 => Some(Level::DEBUG),
            4 => Some(Level::TRACE),
            _ => None,
        };
    }

    match value.to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Installs the global subscriber. Unknown levels fall back to `info`; a second
/// call is ignored.
pub fn init(level: &str) {
    let max_level = parse_level(level).unwrap_or(Level::INFO);

    let installed = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleLine::default)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(%max_level, "logging initialized");
    }
}

/// Buffers one formatted event and emits it when dropped.
#[derive(Default)]
struct ConsoleLine {
    buffer: Vec<u8>,
}

impl Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if !line.is_empty() {
            emit(line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::parse_level;
    use tracing::Level;

    #[test]
    fn parse_level_accepts_names_case_insensitively() {
        assert_eq!(parse_level("error"), Some(Level::ERROR));
        assert_eq!(parse_level(" WARN "), Some(Level::WARN));
        assert_eq!(parse_level("Debug"), Some(Level::DEBUG));
        assert_eq!(parse_level("trace"), Some(Level::TRACE));
    }

    #[test]
    fn parse_level_accepts_numbers() {
        assert_eq!(parse_level("0"), Some(Level::ERROR));
        assert_eq!(parse_level("2"), Some(Level::INFO));
        assert_eq!(parse_level("4"), Some(Level::TRACE));
        assert_eq!(parse_level("9"), None);
    }

    #[test]
    fn parse_level_rejects_garbage() {
        assert_eq!(parse_level(""), None);
        assert_eq!(parse_level("verbose"), None);
    }
}

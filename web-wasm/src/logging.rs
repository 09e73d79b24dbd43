//! ブラウザコンソールへのログ出力
//!
//! tracing-subscriber の fmt レイヤーを使い、1イベント分の出力を
//! レベルに応じた `console.*` に流す。

use std::io::{self, Write};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// 1イベント分のバッファ。drop 時にコンソールへ書き出す
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
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
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer).trim_end().to_string();
        if self.level == Level::ERROR {
            gloo::console::error!(line);
        } else if self.level == Level::WARN {
            gloo::console::warn!(line);
        } else if self.level > Level::INFO {
            // DEBUG / TRACE（tracing では詳細なほど大きい）
            gloo::console::debug!(line);
        } else {
            gloo::console::log!(line);
        }
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

/// サブスクライバを登録（2回目以降は無視）
///
/// `filter` は `SiteConfig::log_level`。解釈できなければ "info"。
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .try_init();
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_init_is_idempotent() {
        init("codestore=debug");
        init("not a valid filter [");
        tracing::info!("logging ready");
    }

    #[wasm_bindgen_test]
    fn wasm_writer_buffers_until_drop() {
        let mut writer = ConsoleMakeWriter.make_writer();
        writer.write_all(b"partial ").expect("write");
        writer.write_all(b"line\n").expect("write");
        assert_eq!(writer.buffer, b"partial line\n");
    }
}

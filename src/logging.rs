// src/logging.rs
//! `log` クレートのマクロ (info! とか) をブラウザのコンソールに出すためのロガー。
//!
//! wasm の start 関数で `init` を1回だけ呼ぶ。ネイティブのテストでは呼ばないので、ログは出ない。

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        match record.level() {
            Level::Error | Level::Warn => crate::error(&line),
            _ => crate::log(&line),
        }
    }

    fn flush(&self) {}
}

/// コンソールロガーを登録するよ。2回目以降は何もしない。
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

// src/error.rs
//! エラー型をまとめておくところ。
//!
//! ゲームのルール自体には「エラー」はない (無効なクリックはただ無視する) ので、
//! ここにあるのは設定の読み込みとブラウザまわりで起きるものだけだよ。

use thiserror::Error;
use wasm_bindgen::JsValue;

/// 設定 (GameConfig) の読み込み・チェックで起きるエラー。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse game config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("animal set is empty")]
    NoAnimals,
    #[error("animal id {0} appears more than once")]
    DuplicateAnimalId(u32),
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
    #[error("{field} of {value} ms is longer than a browser timer allows")]
    IntervalTooLong { field: &'static str, value: u32 },
}

/// ブラウザ側 (GameApp) で起きるエラー。
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
}

// #[wasm_bindgen] なメソッドは Result<_, JsValue> を返すので、そのまま `?` で変換できるようにする
impl From<AppError> for JsValue {
    fn from(error: AppError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

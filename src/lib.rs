// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// ゲームの中身 (ネイティブでもテストできる部分)
pub mod ecs;
pub mod components;
pub mod config;
pub mod logic;
pub mod systems;
pub mod protocol;
pub mod session;
pub mod error;
pub mod logging;

// ブラウザ側の配線 (DOM・タイマー・イベントリスナー)
pub mod app;

pub use app::game_app::GameApp;
pub use components::{Card, CardState, GameStatus, LanguageVariant};
pub use config::{AnimalEntry, GameConfig};
pub use ecs::Entity;
pub use error::{AppError, ConfigError};
pub use protocol::{CardData, GameStateData, SessionEvent};
pub use session::GameSession;
pub use systems::{IgnoreReason, PendingUnflip, SelectionOutcome};

// JavaScript の console.log / console.error を Rust から呼ぶための準備。
// logging.rs のロガーがここを通してコンソールに出力するよ。
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn error(s: &str);
}

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    logging::init(::log::LevelFilter::Info);
    log("Panic hook set!");
}

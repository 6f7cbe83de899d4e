// src/app/state_getter.rs
//! 今のゲーム状態を JSON にして JS に渡すよ。デバッグ表示用。

use std::sync::{Arc, Mutex};

use log::error;
use wasm_bindgen::JsValue;

use crate::app::state_handler::lock;
use crate::session::GameSession;

/// GameSession のスナップショットを JSON 文字列 (JsValue) にする。
pub(crate) fn get_state_json(session: &Arc<Mutex<GameSession>>) -> Result<JsValue, JsValue> {
    let snapshot = lock(session).snapshot();
    match serde_json::to_string(&snapshot) {
        Ok(json) => Ok(JsValue::from_str(&json)),
        Err(e) => {
            let message = format!("Failed to serialize game state: {}", e);
            error!("{}", message);
            Err(JsValue::from_str(&message))
        }
    }
}

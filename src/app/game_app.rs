// src/app/game_app.rs
//! JS から使う GameApp 本体！
//!
//! ```js
//! const app = new GameApp();      // 設定 JSON を渡してもいい
//! app.start();                    // 盤面を描いてクリックを受け付け始める
//! ```

use std::sync::{Arc, Mutex};

use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Event;

use crate::app::state_handler::{lock, AppHandle};
use crate::app::{browser_event_manager, init_handler, state_getter};

#[wasm_bindgen]
pub struct GameApp {
    handle: AppHandle,
    // JS 側に渡したリスナー。drop するとクリックが効かなくなるので持っておく
    event_closures: Arc<Mutex<Vec<Closure<dyn FnMut(Event)>>>>,
}

#[wasm_bindgen]
impl GameApp {
    /// `config_json` は GameConfig の JSON (省略可)。DOM 要素が足りなければエラー。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<GameApp, JsValue> {
        info!("GameApp: initializing...");
        let config = init_handler::load_config(config_json.as_deref())?;
        let elements = init_handler::find_dom_elements()?;
        let session = init_handler::initialize_session(config);
        info!("GameApp: initialized.");
        Ok(GameApp {
            handle: AppHandle::new(session, elements),
            event_closures: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// リスナーを付けて、最初の盤面を描く。何回呼んでもリスナーは1組だけ。
    pub fn start(&self) -> Result<(), JsValue> {
        {
            let mut closures = lock(&self.event_closures);
            if closures.is_empty() {
                *closures = browser_event_manager::attach_listeners(&self.handle)?;
            }
        }
        self.handle.flush_events()
    }

    /// 新しいゲームにする (リスタートボタンと同じ)。
    pub fn restart(&self) -> Result<(), JsValue> {
        self.handle.restart()
    }

    /// 場の `slot` 番目のカードをクリックしたのと同じ。
    pub fn select_card(&self, slot: usize) -> Result<(), JsValue> {
        self.handle.handle_card_click(slot)
    }

    pub fn get_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::get_state_json(&self.handle.session)
    }

    pub fn moves(&self) -> u32 {
        lock(&self.handle.session).moves()
    }

    pub fn elapsed_seconds(&self) -> u32 {
        lock(&self.handle.session).elapsed_seconds()
    }
}

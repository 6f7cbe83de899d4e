// src/app/init_handler.rs
//! GameApp の初期化まわり: 設定の読み込み、DOM 要素の取得、セッションの作成。

use std::sync::{Arc, Mutex};

use log::info;
use web_sys::{Document, Element};

use crate::config::GameConfig;
use crate::error::AppError;
use crate::session::GameSession;

// index.html 側の要素 ID
pub(crate) const BOARD_ID: &str = "game-board";
pub(crate) const MOVES_ID: &str = "moves";
pub(crate) const TIME_ID: &str = "time";
pub(crate) const RESTART_BUTTON_ID: &str = "restart-btn";
pub(crate) const WIN_MODAL_ID: &str = "win-modal";
pub(crate) const FINAL_TIME_ID: &str = "final-time";
pub(crate) const FINAL_MOVES_ID: &str = "final-moves";
pub(crate) const PLAY_AGAIN_BUTTON_ID: &str = "play-again-btn";

/// 描画やイベント登録で使う DOM 要素たち。
#[derive(Clone)]
pub(crate) struct DomElements {
    pub document: Document,
    pub board: Element,
    pub moves: Element,
    pub time: Element,
    pub restart_button: Element,
    pub win_modal: Element,
    pub final_time: Element,
    pub final_moves: Element,
    pub play_again_button: Element,
}

/// JS から渡された設定 JSON を読むよ。`None` ならデフォルト設定。
pub(crate) fn load_config(config_json: Option<&str>) -> Result<GameConfig, AppError> {
    match config_json {
        Some(json) => Ok(GameConfig::from_json(json)?),
        None => Ok(GameConfig::default()),
    }
}

/// 必要な DOM 要素を ID で全部探す。1つでも欠けてたらエラー。
pub(crate) fn find_dom_elements() -> Result<DomElements, AppError> {
    let window = web_sys::window().ok_or(AppError::NoWindow)?;
    let document = window.document().ok_or(AppError::NoDocument)?;
    let find = |id: &str| {
        document
            .get_element_by_id(id)
            .ok_or_else(|| AppError::MissingElement(id.to_string()))
    };

    Ok(DomElements {
        board: find(BOARD_ID)?,
        moves: find(MOVES_ID)?,
        time: find(TIME_ID)?,
        restart_button: find(RESTART_BUTTON_ID)?,
        win_modal: find(WIN_MODAL_ID)?,
        final_time: find(FINAL_TIME_ID)?,
        final_moves: find(FINAL_MOVES_ID)?,
        play_again_button: find(PLAY_AGAIN_BUTTON_ID)?,
        document: document.clone(),
    })
}

/// セッションを作って、コールバックから共有できるように Arc<Mutex<>> で包む。
pub(crate) fn initialize_session(config: GameConfig) -> Arc<Mutex<GameSession>> {
    let deck_size = config.deck_size();
    let session = GameSession::new(config);
    info!("App::Init: session ready with {} cards", deck_size);
    Arc::new(Mutex::new(session))
}

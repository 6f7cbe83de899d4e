// src/app/mod.rs
//! GameApp (ブラウザ側の配線) を役割ごとに分けて置くモジュールだよ！
//! ゲームのルールはここには一切なくて、GameSession を呼んで結果を画面に出すだけ。

pub mod game_app;
pub(crate) mod init_handler;
pub(crate) mod state_handler;
pub(crate) mod renderer;
pub(crate) mod browser_event_manager;
pub(crate) mod timer_handler;
pub(crate) mod state_getter;

// src/app/state_handler.rs
//! GameSession とブラウザの間をつなぐ「操作」の置き場所。
//!
//! クリック・リスタート・1秒タイマー・裏返し待ちの全部がここを通る。
//! どの操作も「セッションを触る → 溜まったイベントを flush して画面とタイマーに反映」の順番だよ。

use std::sync::{Arc, Mutex, MutexGuard};

use futures::future::{AbortHandle, Abortable};
use log::{debug, error, info};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::app::init_handler::DomElements;
use crate::app::renderer;
use crate::app::timer_handler::{sleep_ms, IntervalTimer};
use crate::config::GameConfig;
use crate::protocol::SessionEvent;
use crate::session::GameSession;
use crate::systems::{PendingUnflip, SelectionOutcome};

/// Mutex をロックする。前の誰かが panic してても中身はそのまま使う。
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// コールバックに配って回すハンドル。中身は全部 Arc なので clone は安い。
#[derive(Clone)]
pub(crate) struct AppHandle {
    pub session: Arc<Mutex<GameSession>>,
    pub elements: DomElements,
    pub config: GameConfig,
    timer: Arc<Mutex<IntervalTimer>>,
    pending_unflip: Arc<Mutex<Option<AbortHandle>>>,
}

impl AppHandle {
    pub fn new(session: Arc<Mutex<GameSession>>, elements: DomElements) -> Self {
        let config = lock(&session).config().clone();
        AppHandle {
            session,
            elements,
            config,
            timer: Arc::new(Mutex::new(IntervalTimer::new())),
            pending_unflip: Arc::new(Mutex::new(None)),
        }
    }

    /// 新しいゲームを始める。裏返し待ちがあればキャンセルする。
    pub fn restart(&self) -> Result<(), JsValue> {
        if let Some(handle) = lock(&self.pending_unflip).take() {
            handle.abort();
            debug!("StateHandler: pending unflip cancelled by restart");
        }
        lock(&self.session).init_game();
        info!("StateHandler: game restarted");
        self.flush_events()
    }

    /// 場の `slot` 番目のカードがクリックされた。
    pub fn handle_card_click(&self, slot: usize) -> Result<(), JsValue> {
        let outcome = lock(&self.session).select_card_at(slot);
        debug!("StateHandler: click on slot {} -> {:?}", slot, outcome);
        if let SelectionOutcome::Mismatched(pending) = outcome {
            self.schedule_unflip(pending);
        }
        self.flush_events()
    }

    /// setInterval から1秒ごとに呼ばれる。
    pub fn handle_tick(&self) -> Result<(), JsValue> {
        if lock(&self.session).tick() {
            self.flush_events()?;
        }
        Ok(())
    }

    /// ハズレの2枚を、少し待ってから裏に戻す予約をするよ。
    fn schedule_unflip(&self, pending: PendingUnflip) {
        let (abort_handle, abort_registration) = AbortHandle::new_pair();
        if let Some(previous) = lock(&self.pending_unflip).replace(abort_handle) {
            previous.abort();
        }

        let handle = self.clone();
        let delay_ms = self.config.unflip_delay_ms;
        let task = async move {
            if let Err(e) = sleep_ms(delay_ms).await {
                error!("StateHandler: unflip timer failed: {:?}", e);
            }
            lock(&handle.pending_unflip).take();
            if lock(&handle.session).resolve_unflip(pending) {
                if let Err(e) = handle.flush_events() {
                    error!("StateHandler: failed to render unflip: {:?}", e);
                }
            } else {
                debug!("StateHandler: stale unflip for generation {} skipped", pending.generation);
            }
        };
        spawn_local(async move {
            // abort されたら Err(Aborted) が返るだけなので、何もしない
            let _ = Abortable::new(task, abort_registration).await;
        });
    }

    /// セッションに溜まったイベントを全部取り出して、タイマーと画面に反映する。
    pub fn flush_events(&self) -> Result<(), JsValue> {
        // ロックは取り出すときだけ。描画中に tick が来ても詰まらないようにする
        let events = lock(&self.session).drain_events();
        for event in &events {
            match event {
                SessionEvent::TimerStarted => self.start_timer()?,
                SessionEvent::TimerStopped => lock(&self.timer).stop()?,
                _ => {}
            }
            renderer::apply_event(&self.elements, &self.config, event)?;
        }
        Ok(())
    }

    fn start_timer(&self) -> Result<(), JsValue> {
        let handle = self.clone();
        lock(&self.timer).start(self.config.tick_interval_ms, move || {
            if let Err(e) = handle.handle_tick() {
                error!("StateHandler: tick failed: {:?}", e);
            }
        })
    }
}

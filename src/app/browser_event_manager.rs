// src/app/browser_event_manager.rs
//! DOM にクリックのイベントリスナーを付けるところ。
//!
//! 盤面はカードごとじゃなくて `#game-board` に1つだけリスナーを付けて、
//! クリックされた要素から一番近い `.card` の data-index を読む (イベント委譲)。
//! だから配り直しでカードの DOM を作り直しても、付け直しはいらないよ。

use log::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::app::state_handler::AppHandle;

/// 盤面・リスタートボタン・もう一回ボタンにリスナーを付ける。
///
/// 返ってきたクロージャは JS 側から呼ばれ続けるので、GameApp が持っておくこと。
pub(crate) fn attach_listeners(handle: &AppHandle) -> Result<Vec<Closure<dyn FnMut(Event)>>, JsValue> {
    let mut closures = Vec::new();

    // --- 盤面のクリック ---
    {
        let click_handle = handle.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Some(slot) = clicked_slot(&event) else {
                return;
            };
            if let Err(e) = click_handle.handle_card_click(slot) {
                error!("EventManager: card click failed: {:?}", e);
            }
        }) as Box<dyn FnMut(Event)>);
        handle
            .elements
            .board
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closures.push(closure);
    }

    // --- リスタート系のボタン (どっちも同じ動き) ---
    for button in [&handle.elements.restart_button, &handle.elements.play_again_button] {
        let handle = handle.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            if let Err(e) = handle.restart() {
                error!("EventManager: restart failed: {:?}", e);
            }
        }) as Box<dyn FnMut(Event)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closures.push(closure);
    }

    debug!("EventManager: attached {} listeners", closures.len());
    Ok(closures)
}

/// クリックされたカードの data-index。カード以外 (盤面のすき間とか) なら `None`。
fn clicked_slot(event: &Event) -> Option<usize> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let card = target.closest(".card").ok()??;
    card.get_attribute("data-index")?.parse().ok()
}

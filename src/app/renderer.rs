// src/app/renderer.rs
//! SessionEvent を DOM に反映する描画担当だよ！🎨
//!
//! カード1枚の DOM はこんな形:
//! ```text
//! div.card[data-index][data-pair-id][data-variant]
//!   └ div.card-inner
//!       ├ div.card-face.card-back   (🐾)
//!       └ div.card-face.card-front
//!           ├ div.emoji
//!           ├ div.text
//!           └ div.lang-tag
//! ```
//! 表/裏の見た目は CSS 側で `flipped` / `matched` クラスを見て切り替える。

use log::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::app::init_handler::DomElements;
use crate::components::card::{CardState, LanguageVariant};
use crate::config::GameConfig;
use crate::protocol::{CardData, SessionEvent};

pub(crate) const FLIPPED_CLASS: &str = "flipped";
pub(crate) const MATCHED_CLASS: &str = "matched";
pub(crate) const HIDDEN_CLASS: &str = "hidden";

/// イベント1つぶんを画面に反映する。
pub(crate) fn apply_event(
    elements: &DomElements,
    config: &GameConfig,
    event: &SessionEvent,
) -> Result<(), JsValue> {
    match event {
        SessionEvent::GameReset { .. } => {
            elements.win_modal.class_list().add_1(HIDDEN_CLASS)?;
        }
        SessionEvent::DeckDealt { cards } => {
            render_board(elements, config, cards)?;
        }
        SessionEvent::CardStateChanged { slot, state, .. } => {
            match find_card_element(&elements.board, *slot)? {
                Some(element) => apply_card_state(&element, *state)?,
                None => warn!("Renderer: no card element for slot {}", slot),
            }
        }
        SessionEvent::MovesChanged { moves } => {
            elements.moves.set_text_content(Some(&moves.to_string()));
        }
        SessionEvent::TimeChanged { elapsed_seconds } => {
            elements.time.set_text_content(Some(&elapsed_seconds.to_string()));
        }
        // タイマーは state_handler が面倒を見るので、画面は何もしない
        SessionEvent::TimerStarted | SessionEvent::TimerStopped => {}
        SessionEvent::GameWon { elapsed_seconds, moves } => {
            elements.final_time.set_text_content(Some(&elapsed_seconds.to_string()));
            elements.final_moves.set_text_content(Some(&moves.to_string()));
            elements.win_modal.class_list().remove_1(HIDDEN_CLASS)?;
        }
    }
    Ok(())
}

/// 盤面を空にして、カードを場の順番で並べ直す。
pub(crate) fn render_board(
    elements: &DomElements,
    config: &GameConfig,
    cards: &[CardData],
) -> Result<(), JsValue> {
    elements.board.set_inner_html("");
    for card in cards {
        let element = create_card_element(&elements.document, config, card)?;
        elements.board.append_child(&element)?;
    }
    debug!("Renderer: rendered {} cards", cards.len());
    Ok(())
}

fn create_card_element(
    document: &Document,
    config: &GameConfig,
    card: &CardData,
) -> Result<Element, JsValue> {
    let root = create_div(document, "card")?;
    root.set_attribute("data-index", &card.slot.to_string())?;
    root.set_attribute("data-pair-id", &card.pair_id.to_string())?;
    root.set_attribute("data-variant", card.variant.as_str())?;

    let inner = create_div(document, "card-inner")?;

    let back = create_div(document, "card-face card-back")?;
    back.set_text_content(Some(&config.card_back_glyph));

    let front = create_div(document, "card-face card-front")?;
    let emoji = create_div(document, "emoji")?;
    emoji.set_text_content(Some(&card.icon));
    let text = create_div(document, "text")?;
    text.set_text_content(Some(&card.display_text));
    let tag = create_div(document, "lang-tag")?;
    tag.set_text_content(Some(language_label(config, card.variant)));
    front.append_child(&emoji)?;
    front.append_child(&text)?;
    front.append_child(&tag)?;

    inner.append_child(&back)?;
    inner.append_child(&front)?;
    root.append_child(&inner)?;

    apply_card_state(&root, card.state)?;
    Ok(root)
}

fn create_div(document: &Document, class_name: &str) -> Result<Element, JsValue> {
    let element = document.create_element("div")?;
    element.set_class_name(class_name);
    Ok(element)
}

/// カードの状態を CSS クラスに写す。
pub(crate) fn apply_card_state(element: &Element, state: CardState) -> Result<(), JsValue> {
    let classes = element.class_list();
    match state {
        CardState::Hidden => classes.remove_2(FLIPPED_CLASS, MATCHED_CLASS)?,
        CardState::Flipped => classes.add_1(FLIPPED_CLASS)?,
        CardState::Matched => classes.add_2(FLIPPED_CLASS, MATCHED_CLASS)?,
    }
    Ok(())
}

fn find_card_element(board: &Element, slot: usize) -> Result<Option<Element>, JsValue> {
    board.query_selector(&format!("[data-index=\"{}\"]", slot))
}

pub(crate) fn language_label(config: &GameConfig, variant: LanguageVariant) -> &str {
    match variant {
        LanguageVariant::English => crate::config::timing::ENGLISH_LABEL,
        LanguageVariant::Local => &config.local_language_label,
    }
}

// src/protocol.rs

// このファイルは、Rust (WASM) 側から JS 側へ渡すデータの形を定義するよ！💌
// どれも serde で JSON にして渡す。JS 側はこれを見て画面を更新するだけ。
use serde::{Serialize, Deserialize};

use crate::components::card::{CardState, LanguageVariant};
use crate::components::game_state::GameStatus;
use crate::ecs::entity::Entity;

/// カード1枚ぶんの表示用データ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub entity: Entity,
    /// 場の何番目か (DOM の data-index)
    pub slot: usize,
    pub pair_id: u32,
    pub variant: LanguageVariant,
    pub display_text: String,
    pub icon: String,
    pub state: CardState,
}

/// ゲーム全体のスナップショット。デバッグ表示や JS 側の初期描画に使うよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameStateData {
    pub status: GameStatus,
    pub moves: u32,
    pub elapsed_seconds: u32,
    pub matched_count: usize,
    pub input_locked: bool,
    pub timer_running: bool,
    pub generation: u64,
    /// 場の並び順
    pub cards: Vec<CardData>,
}

/// GameSession で起きた出来事。描画する側はこれを順番に反映していけばOK！
///
/// JSON では `{"type": "MovesChanged", "moves": 3}` みたいな形になる。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// `init_game` でリセットされた (勝利モーダルは閉じる)
    GameReset { generation: u64 },
    /// 新しいデッキが配られた
    DeckDealt { cards: Vec<CardData> },
    /// カード1枚の状態が変わった
    CardStateChanged { entity: Entity, slot: usize, state: CardState },
    MovesChanged { moves: u32 },
    TimeChanged { elapsed_seconds: u32 },
    /// 1秒ごとのタイマーを動かし始めてね
    TimerStarted,
    /// タイマーを止めてね
    TimerStopped,
    /// 全ペアそろった！🏆
    GameWon { elapsed_seconds: u32, moves: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_tagged_by_type() {
        let json = serde_json::to_value(SessionEvent::MovesChanged { moves: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "MovesChanged", "moves": 3 }));

        let json = serde_json::to_value(SessionEvent::TimerStarted).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "TimerStarted" }));
    }

    #[test]
    fn card_state_change_carries_slot_and_state() {
        let event = SessionEvent::CardStateChanged { entity: Entity(4), slot: 2, state: CardState::Matched };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "CardStateChanged", "entity": 4, "slot": 2, "state": "Matched" })
        );
        let back: SessionEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}

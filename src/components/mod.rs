// src/components/mod.rs

// World に載せるデータ部品 (コンポーネント) たち！
pub mod card;       // カード1枚ぶんの情報 🃏
pub mod deck_slot;  // 場の何番目に置かれてるか
pub mod selection;  // めくった1枚目・2枚目
pub mod game_state; // 手数・経過時間・ロックなどセッション全体の状態

pub use card::{Card, CardState, LanguageVariant};
pub use deck_slot::DeckSlot;
pub use game_state::{GameState, GameStatus, SESSION_ENTITY};
pub use selection::Selection;

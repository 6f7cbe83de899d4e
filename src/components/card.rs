// src/components/card.rs

// serde: カード情報を JSON にして JS 側へ渡すよ！
use serde::{Serialize, Deserialize};
use crate::ecs::component::Component;

/// カードがどっちの言語で書かれているか。
///
/// ペアは必ず English と Local の1枚ずつ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageVariant {
    English,
    /// ローカル言語 (デフォルトは中国語)
    Local,
}

impl LanguageVariant {
    /// DOM の `data-variant` 属性に書く短い名前。
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageVariant::English => "en",
            LanguageVariant::Local => "local",
        }
    }
}

/// カードの状態だよ！
///
/// Hidden → Flipped → Matched、もしくはハズレたら Flipped → Hidden に戻る。
/// 見た目 (CSS クラス) とは別物で、描画は renderer がこれを見て決める。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CardState {
    /// 裏向き
    #[default]
    Hidden,
    /// 表向き (判定待ち or 1枚目)
    Flipped,
    /// ペア成立！もう動かない
    Matched,
}

/// カードそのものを表すコンポーネントだよ！🃏
///
/// - `pair_id`: 元になった動物の ID。同じ `pair_id` のカードはちょうど2枚。
/// - `variant`: English か Local か
/// - `display_text`: カードに書かれる名前 ("Cat" とか "猫" とか)
/// - `icon`: 絵文字。ペアの2枚で同じ
/// - `state`: 今の状態
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub pair_id: u32,
    pub variant: LanguageVariant,
    pub display_text: String,
    pub icon: String,
    pub state: CardState,
}

impl Card {
    /// 裏向きのカードを作るよ。
    pub fn new(pair_id: u32, variant: LanguageVariant, display_text: impl Into<String>, icon: impl Into<String>) -> Self {
        Card {
            pair_id,
            variant,
            display_text: display_text.into(),
            icon: icon.into(),
            state: CardState::Hidden,
        }
    }

    /// まだクリックでめくれる状態か (= 裏向きか)。
    pub fn is_selectable(&self) -> bool {
        self.state == CardState::Hidden
    }
}

impl Component for Card {}

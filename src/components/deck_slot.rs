// src/components/deck_slot.rs

use serde::{Serialize, Deserialize};
use crate::ecs::component::Component;

/// カードが場の何番目に置かれているか (シャッフル後の並び順)。
///
/// 盤面の DOM もこの順番で並べて、`data-index` にこの値を入れるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckSlot {
    pub index: usize,
}

impl Component for DeckSlot {}

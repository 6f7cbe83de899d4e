// src/ecs/entity.rs

// Entity を JS 側に送る (CardData の中身とか) ので serde を使うよ！
use serde::{Serialize, Deserialize};
use std::fmt;

/// Entity（エンティティ）は、ゲームに登場する「モノ」を表すただの ID だよ！
///
/// このゲームだと、場に並ぶカード1枚1枚と、セッション本体 (Entity(0)) がエンティティになる。
/// ID だけだと意味はなくて、`Card` や `GameState` みたいなコンポーネントと組み合わせて初めて
/// 「ID 3 は Cat の英語カードで、今は裏向き」みたいな意味になるんだ ✨
///
/// ID は World の中で増え続けるだけで再利用しないよ。
/// だから前のゲームのカードの ID が、新しいデッキのカードと被ることはない！
#[derive(
    PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize,
)]
pub struct Entity(pub usize);

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

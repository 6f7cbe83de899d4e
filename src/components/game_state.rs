// src/components/game_state.rs

use serde::{Serialize, Deserialize};
use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// GameState と Selection を持つセッション本体のエンティティ。
/// GameSession が World を作って最初に create_entity するので、必ず 0 番になる。
pub const SESSION_ENTITY: Entity = Entity(0);

/// ゲーム全体の進み具合だよ！🏁
///
/// NotStarted → (最初の1枚をめくる) → InProgress → (全部そろう) → Won。
/// `init_game` でいつでも NotStarted に戻る。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// まだ1枚もめくってない
    #[default]
    NotStarted,
    /// プレイ中 (タイマー動いてる)
    InProgress,
    /// 全ペア成立！🏆 次の `init_game` まで終わりの状態
    Won,
}

/// セッション全体の状態を持つコンポーネント。
///
/// セッションのエンティティ (Entity(0)) に1つだけ付ける、いわゆるシングルトン。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    /// ハズレのペアを戻している間は true。この間のクリックは捨てる。
    pub input_locked: bool,
    /// 2枚めくり終わった回数
    pub moves: u32,
    /// Matched になったカードの枚数
    pub matched_count: usize,
    pub elapsed_seconds: u32,
    pub timer_running: bool,
    /// `init_game` のたびに増える世代番号。
    /// 前のゲームで予約された「裏返し」が新しいゲームに効かないようにするために使う。
    pub generation: u64,
}

impl Component for GameState {}

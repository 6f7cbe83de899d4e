// src/systems/selection_system.rs

use log::{debug, info};

use crate::components::{Card, CardState, GameState, GameStatus, Selection, SESSION_ENTITY};
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::systems::match_system::{MatchResult, MatchSystem, PendingUnflip};
use crate::systems::win_condition_system::WinConditionSystem;

/// クリックが無視された理由。どれもエラーじゃなくて、ただの「何もしない」だよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// ハズレのペアを戻してる途中
    InputLocked,
    /// もう表向き (Flipped / Matched)
    AlreadyRevealed,
    /// 今のデッキのカードじゃない (前のゲームのカードとか)
    NotACard,
    /// セッションの GameState が見つからない
    NoSession,
}

/// カードを1枚選んだ結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// 何も変わってない
    Ignored(IgnoreReason),
    /// 1枚目をめくった。`started_timer` はこのクリックでゲームが始まったとき true
    FirstPick { card: Entity, started_timer: bool },
    /// 2枚目でペア成立！ `won` は最後のペアだったとき true 🏆
    Matched { first: Entity, second: Entity, won: bool },
    /// 2枚目がハズレ。待ち時間のあとで `PendingUnflip` を解決してね
    Mismatched(PendingUnflip),
}

/// カードのクリックを処理するシステムだよ！👆
///
/// チェックは順番通り:
/// 1. 入力ロック中なら無視
/// 2. もう表向きのカードなら無視
/// 3. ゲーム最初の1枚ならタイマー開始
/// 4. カードを表にする
/// 5. 1枚目ならここで終わり
/// 6. 2枚目ならロックして手数 +1、ペア判定へ
#[derive(Debug, Default)]
pub struct SelectionSystem {
    match_system: MatchSystem,
    win_condition: WinConditionSystem,
}

impl SelectionSystem {
    pub fn new() -> Self {
        SelectionSystem::default()
    }

    pub fn execute(&mut self, world: &mut World, entity: Entity) -> SelectionOutcome {
        let (input_locked, status) = match world.get_component::<GameState>(SESSION_ENTITY) {
            Some(state) => (state.input_locked, state.status),
            None => return SelectionOutcome::Ignored(IgnoreReason::NoSession),
        };
        if input_locked {
            debug!("SelectionSystem: {} ignored, input is locked", entity);
            return SelectionOutcome::Ignored(IgnoreReason::InputLocked);
        }
        match world.get_component::<Card>(entity) {
            None => return SelectionOutcome::Ignored(IgnoreReason::NotACard),
            Some(card) if !card.is_selectable() => {
                return SelectionOutcome::Ignored(IgnoreReason::AlreadyRevealed);
            }
            Some(_) => {}
        }

        let started_timer = status == GameStatus::NotStarted;
        if started_timer {
            if let Some(state) = world.get_component_mut::<GameState>(SESSION_ENTITY) {
                state.status = GameStatus::InProgress;
                state.timer_running = true;
                state.elapsed_seconds = 0;
            }
            info!("Game started");
        }

        if let Some(card) = world.get_component_mut::<Card>(entity) {
            card.state = CardState::Flipped;
        }

        let first = match world.get_component_mut::<Selection>(SESSION_ENTITY) {
            Some(selection) => match selection.first {
                None => {
                    selection.first = Some(entity);
                    return SelectionOutcome::FirstPick { card: entity, started_timer };
                }
                Some(first) => {
                    selection.second = Some(entity);
                    first
                }
            },
            None => return SelectionOutcome::Ignored(IgnoreReason::NoSession),
        };

        if let Some(state) = world.get_component_mut::<GameState>(SESSION_ENTITY) {
            state.input_locked = true;
            state.moves += 1;
        }

        match self.match_system.evaluate(world, first, entity) {
            MatchResult::Matched => {
                self.win_condition.run(world);
                let won = world
                    .get_component::<GameState>(SESSION_ENTITY)
                    .is_some_and(|state| state.status == GameStatus::Won);
                SelectionOutcome::Matched { first, second: entity, won }
            }
            MatchResult::Mismatched(pending) => SelectionOutcome::Mismatched(pending),
        }
    }
}

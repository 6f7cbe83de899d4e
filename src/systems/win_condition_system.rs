// src/systems/win_condition_system.rs

use log::info;

use crate::components::{Card, GameState, GameStatus, SESSION_ENTITY};
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::logic::rules::is_deck_cleared;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// プレイ中に matched_count がデッキの枚数に届いたら、
/// GameState を Won にしてタイマーを止める。
/// Won になったあとはもう一度呼ばれても何もしない (タイマー停止は1回だけ)。
#[derive(Debug, Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        WinConditionSystem
    }
}

impl System for WinConditionSystem {
    fn run(&mut self, world: &mut World) {
        let deck_len = world.get_all_entities_with_component::<Card>().len();
        if let Some(state) = world.get_component_mut::<GameState>(SESSION_ENTITY) {
            if state.status != GameStatus::InProgress {
                return;
            }
            if is_deck_cleared(state.matched_count, deck_len) {
                state.status = GameStatus::Won;
                state.timer_running = false;
                state.input_locked = false;
                info!(
                    "Game won in {} moves and {} seconds",
                    state.moves, state.elapsed_seconds
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CardState, LanguageVariant};

    fn world_with_cards(matched: usize, total_pairs: u32) -> World {
        let mut world = World::new();
        let session = world.create_entity();
        world.add_component(
            session,
            GameState {
                status: GameStatus::InProgress,
                timer_running: true,
                matched_count: matched,
                ..GameState::default()
            },
        );
        for pair_id in 1..=total_pairs {
            for variant in [LanguageVariant::English, LanguageVariant::Local] {
                let entity = world.create_entity();
                let mut card = Card::new(pair_id, variant, "x", "🐾");
                card.state = CardState::Matched;
                world.add_component(entity, card);
            }
        }
        world
    }

    #[test]
    fn not_won_until_every_card_is_matched() {
        let mut world = world_with_cards(14, 8);
        WinConditionSystem::new().run(&mut world);
        let state = world.get_component::<GameState>(SESSION_ENTITY).unwrap();
        assert_eq!(state.status, GameStatus::InProgress);
        assert!(state.timer_running);
    }

    #[test]
    fn all_matched_wins_and_stops_timer() {
        let mut world = world_with_cards(16, 8);
        WinConditionSystem::new().run(&mut world);
        let state = world.get_component::<GameState>(SESSION_ENTITY).unwrap();
        assert_eq!(state.status, GameStatus::Won);
        assert!(!state.timer_running);
    }

    #[test]
    fn not_started_game_is_never_won() {
        let mut world = world_with_cards(16, 8);
        if let Some(state) = world.get_component_mut::<GameState>(SESSION_ENTITY) {
            state.status = GameStatus::NotStarted;
        }
        WinConditionSystem::new().run(&mut world);
        assert_eq!(
            world.get_component::<GameState>(SESSION_ENTITY).unwrap().status,
            GameStatus::NotStarted
        );
    }
}

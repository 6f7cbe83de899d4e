// src/systems/match_system.rs

use log::debug;
use serde::{Serialize, Deserialize};

use crate::components::{Card, CardState, GameState, Selection, SESSION_ENTITY};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::logic::rules::is_match;

/// ハズレだった2枚を「あとで裏返す」ための予約票だよ。
///
/// 待ち時間 (700ms) が終わったら `MatchSystem::resolve_unflip` に渡す。
/// `generation` が今のセッションと違ったら (途中でリスタートされたら) 何もしない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingUnflip {
    pub generation: u64,
    pub first: Entity,
    pub second: Entity,
}

/// 2枚の判定結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Matched,
    Mismatched(PendingUnflip),
}

/// めくった2枚がペアか判定して、結果を World に反映するシステム。
#[derive(Debug, Default)]
pub struct MatchSystem;

impl MatchSystem {
    pub fn new() -> Self {
        MatchSystem
    }

    /// 2枚を判定するよ！
    ///
    /// - 当たり: 2枚とも Matched、matched_count += 2、選択クリア、すぐにロック解除
    /// - ハズレ: カードは Flipped のまま、ロックもそのまま。`PendingUnflip` を返す
    pub fn evaluate(&self, world: &mut World, first: Entity, second: Entity) -> MatchResult {
        let is_pair = match (world.get_component::<Card>(first), world.get_component::<Card>(second)) {
            (Some(a), Some(b)) => is_match(a, b),
            _ => false,
        };

        if !is_pair {
            let generation = world
                .get_component::<GameState>(SESSION_ENTITY)
                .map(|state| state.generation)
                .unwrap_or_default();
            debug!("MatchSystem: {} and {} do not match", first, second);
            return MatchResult::Mismatched(PendingUnflip { generation, first, second });
        }

        for entity in [first, second] {
            if let Some(card) = world.get_component_mut::<Card>(entity) {
                card.state = CardState::Matched;
            }
        }
        if let Some(selection) = world.get_component_mut::<Selection>(SESSION_ENTITY) {
            selection.clear();
        }
        if let Some(state) = world.get_component_mut::<GameState>(SESSION_ENTITY) {
            state.matched_count += 2;
            state.input_locked = false;
        }
        debug!("MatchSystem: {} and {} matched", first, second);
        MatchResult::Matched
    }

    /// 予約していた裏返しを実行するよ。
    ///
    /// 世代が違う、もしくは今の選択がこの予約の2枚じゃなければ何もしないで `false`。
    /// (リスタート後に遅れて届いたコールバックや、同じ予約の二重実行はここで弾かれる)
    pub fn resolve_unflip(&self, world: &mut World, pending: PendingUnflip) -> bool {
        let current = match world.get_component::<GameState>(SESSION_ENTITY) {
            Some(state) => state.generation,
            None => return false,
        };
        if current != pending.generation {
            debug!("MatchSystem: stale unflip (generation {} != {})", pending.generation, current);
            return false;
        }
        let expected = Selection { first: Some(pending.first), second: Some(pending.second) };
        if world.get_component::<Selection>(SESSION_ENTITY) != Some(&expected) {
            debug!("MatchSystem: unflip for {} / {} is no longer pending", pending.first, pending.second);
            return false;
        }

        for entity in [pending.first, pending.second] {
            if let Some(card) = world.get_component_mut::<Card>(entity) {
                if card.state == CardState::Flipped {
                    card.state = CardState::Hidden;
                }
            }
        }
        if let Some(selection) = world.get_component_mut::<Selection>(SESSION_ENTITY) {
            selection.clear();
        }
        if let Some(state) = world.get_component_mut::<GameState>(SESSION_ENTITY) {
            state.input_locked = false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::LanguageVariant;

    // セッション + 任意のカードを並べた World を作るヘルパー
    fn setup(cards: &[Card]) -> (World, Vec<Entity>) {
        let mut world = World::new();
        let session = world.create_entity();
        world.add_component(session, GameState { input_locked: true, generation: 3, ..GameState::default() });
        world.add_component(session, Selection::default());
        let entities = cards
            .iter()
            .map(|card| {
                let entity = world.create_entity();
                let mut card = card.clone();
                card.state = CardState::Flipped;
                world.add_component(entity, card);
                entity
            })
            .collect::<Vec<_>>();
        if let Some(selection) = world.get_component_mut::<Selection>(SESSION_ENTITY) {
            selection.first = entities.first().copied();
            selection.second = entities.get(1).copied();
        }
        (world, entities)
    }

    fn state(world: &World) -> &GameState {
        world.get_component::<GameState>(SESSION_ENTITY).unwrap()
    }

    #[test]
    fn matching_pair_is_resolved_immediately() {
        let (mut world, e) = setup(&[
            Card::new(1, LanguageVariant::English, "Cat", "🐱"),
            Card::new(1, LanguageVariant::Local, "猫", "🐱"),
        ]);
        let result = MatchSystem::new().evaluate(&mut world, e[0], e[1]);

        assert_eq!(result, MatchResult::Matched);
        assert_eq!(world.get_component::<Card>(e[0]).unwrap().state, CardState::Matched);
        assert_eq!(world.get_component::<Card>(e[1]).unwrap().state, CardState::Matched);
        assert_eq!(state(&world).matched_count, 2);
        assert!(!state(&world).input_locked);
        assert!(world.get_component::<Selection>(SESSION_ENTITY).unwrap().is_empty());
    }

    #[test]
    fn mismatch_keeps_cards_flipped_and_input_locked() {
        let (mut world, e) = setup(&[
            Card::new(1, LanguageVariant::English, "Cat", "🐱"),
            Card::new(2, LanguageVariant::English, "Dog", "🐶"),
        ]);
        let result = MatchSystem::new().evaluate(&mut world, e[0], e[1]);

        assert_eq!(
            result,
            MatchResult::Mismatched(PendingUnflip { generation: 3, first: e[0], second: e[1] })
        );
        assert_eq!(world.get_component::<Card>(e[0]).unwrap().state, CardState::Flipped);
        assert!(state(&world).input_locked);
        assert_eq!(state(&world).matched_count, 0);
    }

    #[test]
    fn resolve_unflip_hides_cards_and_unlocks() {
        let (mut world, e) = setup(&[
            Card::new(1, LanguageVariant::English, "Cat", "🐱"),
            Card::new(1, LanguageVariant::English, "Cat", "🐱"),
        ]);
        let system = MatchSystem::new();
        let MatchResult::Mismatched(pending) = system.evaluate(&mut world, e[0], e[1]) else {
            panic!("same-language cards must not match");
        };

        assert!(system.resolve_unflip(&mut world, pending));
        assert_eq!(world.get_component::<Card>(e[0]).unwrap().state, CardState::Hidden);
        assert_eq!(world.get_component::<Card>(e[1]).unwrap().state, CardState::Hidden);
        assert!(!state(&world).input_locked);

        // 同じ予約を二回使っても何も起きない
        assert!(!system.resolve_unflip(&mut world, pending));
    }

    #[test]
    fn stale_generation_is_ignored() {
        let (mut world, e) = setup(&[
            Card::new(1, LanguageVariant::English, "Cat", "🐱"),
            Card::new(2, LanguageVariant::Local, "狗", "🐶"),
        ]);
        let stale = PendingUnflip { generation: 2, first: e[0], second: e[1] };
        assert!(!MatchSystem::new().resolve_unflip(&mut world, stale));
        assert_eq!(world.get_component::<Card>(e[0]).unwrap().state, CardState::Flipped);
        assert!(state(&world).input_locked);
    }
}

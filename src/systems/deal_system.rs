// src/systems/deal_system.rs

use log::{debug, warn};
use rand::Rng;

use crate::components::{Card, DeckSlot, GameState, Selection, SESSION_ENTITY};
use crate::config::AnimalEntry;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::logic::deck::{create_pair_deck, is_well_formed, shuffle_deck};

/// デッキを作って場に並べるシステムだよ！🃏
///
/// 前のゲームのカードは全部消して、新しくシャッフルしたデッキで置き換える。
pub struct DealSystem {
    animals: Vec<AnimalEntry>,
}

impl DealSystem {
    pub fn new(animals: Vec<AnimalEntry>) -> Self {
        DealSystem { animals }
    }

    /// 1回のデッキで何枚になるか。
    pub fn deck_size(&self) -> usize {
        self.animals.len() * 2
    }

    /// カードを配るよ。
    ///
    /// # 処理の流れ
    /// 1. 既存のカードエンティティを全部削除 🧹
    /// 2. ペアのデッキを作ってシャッフル
    /// 3. 1枚ずつエンティティを作って `Card` と `DeckSlot` を付ける
    /// 4. 選択中のカードをクリアして、matched_count を 0 に戻す
    ///
    /// # 戻り値
    /// 場の並び順 (DeckSlot 順) のカードエンティティ。
    pub fn execute<R: Rng + ?Sized>(&self, world: &mut World, rng: &mut R) -> Vec<Entity> {
        // ループしながら消すと借用で怒られるので、先に ID を集めてから消す
        let old_cards = world.get_all_entities_with_component::<Card>();
        if !old_cards.is_empty() {
            debug!("DealSystem: removing {} cards from the previous deck", old_cards.len());
        }
        for entity in old_cards {
            world.destroy_entity(entity);
        }

        let mut deck = create_pair_deck(&self.animals);
        shuffle_deck(&mut deck, rng);
        if !is_well_formed(&deck) {
            warn!("DealSystem: deck of {} cards does not form clean pairs", deck.len());
        }

        let entities: Vec<Entity> = deck
            .into_iter()
            .enumerate()
            .map(|(index, card)| {
                let entity = world.create_entity();
                world.add_component(entity, card);
                world.add_component(entity, DeckSlot { index });
                entity
            })
            .collect();

        if let Some(selection) = world.get_component_mut::<Selection>(SESSION_ENTITY) {
            selection.clear();
        }
        if let Some(state) = world.get_component_mut::<GameState>(SESSION_ENTITY) {
            state.matched_count = 0;
        }

        if entities.len() != self.deck_size() {
            warn!("DealSystem: dealt {} cards, expected {}", entities.len(), self.deck_size());
        }
        debug!("DealSystem: dealt {} cards ({} entities alive)", entities.len(), world.entity_count());
        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CardState;
    use crate::config::default_animals;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn world_with_session() -> World {
        let mut world = World::new();
        let session = world.create_entity();
        assert_eq!(session, SESSION_ENTITY);
        world.add_component(session, GameState::default());
        world.add_component(session, Selection::default());
        world
    }

    #[test]
    fn deals_sixteen_hidden_cards_in_slot_order() {
        let mut world = world_with_session();
        let system = DealSystem::new(default_animals());
        let entities = system.execute(&mut world, &mut StdRng::seed_from_u64(1));

        assert_eq!(entities.len(), 16);
        assert_eq!(system.deck_size(), 16);
        for (index, &entity) in entities.iter().enumerate() {
            assert_eq!(world.get_component::<DeckSlot>(entity), Some(&DeckSlot { index }));
            assert_eq!(world.get_component::<Card>(entity).map(|c| c.state), Some(CardState::Hidden));
        }
    }

    #[test]
    fn redeal_replaces_previous_cards_and_resets_bookkeeping() {
        let mut world = world_with_session();
        let system = DealSystem::new(default_animals());
        let mut rng = StdRng::seed_from_u64(5);
        let first_deal = system.execute(&mut world, &mut rng);

        // 途中まで遊んだことにする
        if let Some(state) = world.get_component_mut::<GameState>(SESSION_ENTITY) {
            state.matched_count = 4;
        }
        if let Some(selection) = world.get_component_mut::<Selection>(SESSION_ENTITY) {
            selection.first = Some(first_deal[0]);
        }

        let second_deal = system.execute(&mut world, &mut rng);
        assert_eq!(world.get_all_entities_with_component::<Card>().len(), 16);
        assert!(first_deal.iter().all(|&e| !world.is_entity_alive(e)), "古いカードは消えてるはず");
        assert!(second_deal.iter().all(|&e| world.is_entity_alive(e)));
        assert_eq!(world.get_component::<GameState>(SESSION_ENTITY).map(|s| s.matched_count), Some(0));
        assert_eq!(world.get_component::<Selection>(SESSION_ENTITY), Some(&Selection::default()));
        // セッション本体は消えない
        assert!(world.is_entity_alive(SESSION_ENTITY));
    }
}

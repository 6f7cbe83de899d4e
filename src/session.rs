// src/session.rs

use std::collections::VecDeque;

use itertools::Itertools;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::{Card, CardState, DeckSlot, GameState, GameStatus, LanguageVariant, Selection, SESSION_ENTITY};
use crate::config::GameConfig;
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::protocol::{CardData, GameStateData, SessionEvent};
use crate::systems::{DealSystem, IgnoreReason, MatchSystem, PendingUnflip, SelectionOutcome, SelectionSystem, TimerSystem};

/// 1回ぶんの神経衰弱ゲームを丸ごと持っている構造体だよ！🐾
///
/// グローバル変数は使わずに、World (カード + セッション状態) もシステムも全部ここに入ってる。
/// だからテストではいくつでも独立したセッションを作れるよ。
///
/// 外から呼ぶのは基本この4つ:
/// - `init_game`: リセット (最初の1回は `new` の中で呼ばれる)
/// - `select_card`: カードがクリックされた
/// - `tick`: 1秒たった
/// - `resolve_unflip`: ハズレの待ち時間が終わった
///
/// 画面に反映すべきことは `SessionEvent` としてキューに溜まるので、`drain_events` で取り出してね。
pub struct GameSession {
    world: World,
    config: GameConfig,
    rng: StdRng,
    deal_system: DealSystem,
    selection_system: SelectionSystem,
    match_system: MatchSystem,
    timer_system: TimerSystem,
    events: VecDeque<SessionEvent>,
}

impl GameSession {
    /// OS (ブラウザなら crypto.getRandomValues) の乱数でシャッフルするセッションを作るよ。
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// シード固定のセッション。同じシードなら毎回同じ並びになる (テスト用)。
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let mut world = World::new();
        world.register_component::<Card>();
        world.register_component::<DeckSlot>();
        world.register_component::<GameState>();
        world.register_component::<Selection>();

        // 最初に作るエンティティがセッション本体 (= SESSION_ENTITY)
        let session = world.create_entity();
        world.add_component(session, GameState::default());
        world.add_component(session, Selection::default());

        let mut game = GameSession {
            world,
            deal_system: DealSystem::new(config.animals.clone()),
            config,
            rng,
            selection_system: SelectionSystem::new(),
            match_system: MatchSystem::new(),
            timer_system: TimerSystem,
            events: VecDeque::new(),
        };
        game.init_game();
        game
    }

    /// ゲームを最初からやり直すよ。どの状態から呼んでもOK。
    ///
    /// タイマー停止、手数・時間・そろった枚数を 0 に、ロック解除、世代を +1 して、
    /// 新しくシャッフルしたデッキを配る。
    pub fn init_game(&mut self) {
        let mut was_running = false;
        let mut generation = 0;
        if let Some(state) = self.world.get_component_mut::<GameState>(SESSION_ENTITY) {
            was_running = state.timer_running;
            generation = state.generation + 1;
            *state = GameState { generation, ..GameState::default() };
        }
        self.deal_system.execute(&mut self.world, &mut self.rng);
        info!("New game dealt (generation {}, {} cards)", generation, self.deck_len());

        if was_running {
            self.events.push_back(SessionEvent::TimerStopped);
        }
        let cards = self.cards();
        self.events.push_back(SessionEvent::GameReset { generation });
        self.events.push_back(SessionEvent::DeckDealt { cards });
        self.events.push_back(SessionEvent::MovesChanged { moves: 0 });
        self.events.push_back(SessionEvent::TimeChanged { elapsed_seconds: 0 });
    }

    /// カードがクリックされたときに呼ぶよ。
    ///
    /// ロック中・表向きのカード・知らないエンティティは `Ignored` で、状態は何も変わらない。
    /// `Mismatched` が返ってきたら、待ち時間のあとで `resolve_unflip` を呼んでね。
    pub fn select_card(&mut self, entity: Entity) -> SelectionOutcome {
        let outcome = self.selection_system.execute(&mut self.world, entity);
        match outcome {
            SelectionOutcome::Ignored(reason) => {
                debug!("GameSession: click on {} ignored ({:?})", entity, reason);
            }
            SelectionOutcome::FirstPick { card, started_timer } => {
                if started_timer {
                    self.events.push_back(SessionEvent::TimerStarted);
                    self.events.push_back(SessionEvent::TimeChanged { elapsed_seconds: 0 });
                }
                self.push_card_event(card, CardState::Flipped);
            }
            SelectionOutcome::Matched { first, second, won } => {
                let moves = self.moves();
                self.push_card_event(second, CardState::Flipped);
                self.events.push_back(SessionEvent::MovesChanged { moves });
                self.push_card_event(first, CardState::Matched);
                self.push_card_event(second, CardState::Matched);
                if won {
                    let elapsed_seconds = self.elapsed_seconds();
                    self.events.push_back(SessionEvent::TimerStopped);
                    self.events.push_back(SessionEvent::GameWon { elapsed_seconds, moves });
                }
            }
            SelectionOutcome::Mismatched(pending) => {
                let moves = self.moves();
                self.push_card_event(pending.second, CardState::Flipped);
                self.events.push_back(SessionEvent::MovesChanged { moves });
            }
        }
        outcome
    }

    /// 場の `slot` 番目のカードをクリックしたことにする (DOM の data-index から呼ぶ用)。
    pub fn select_card_at(&mut self, slot: usize) -> SelectionOutcome {
        match self.entity_at(slot) {
            Some(entity) => self.select_card(entity),
            None => SelectionOutcome::Ignored(IgnoreReason::NotACard),
        }
    }

    /// ハズレの2枚を裏に戻すよ。
    ///
    /// 予約したあとに `init_game` されていたら (世代が違ったら) 何もしないで `false`。
    pub fn resolve_unflip(&mut self, pending: PendingUnflip) -> bool {
        let resolved = self.match_system.resolve_unflip(&mut self.world, pending);
        if resolved {
            self.push_card_event(pending.first, CardState::Hidden);
            self.push_card_event(pending.second, CardState::Hidden);
        }
        resolved
    }

    /// タイマーを1秒進める。タイマーが止まってたら何もしないで `false`。
    pub fn tick(&mut self) -> bool {
        let before = self.elapsed_seconds();
        self.timer_system.run(&mut self.world);
        let after = self.elapsed_seconds();
        if after == before {
            return false;
        }
        self.events.push_back(SessionEvent::TimeChanged { elapsed_seconds: after });
        true
    }

    /// 溜まったイベントを全部取り出す。
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain(..).collect()
    }

    fn push_card_event(&mut self, entity: Entity, state: CardState) {
        if let Some(slot) = self.world.get_component::<DeckSlot>(entity).map(|s| s.index) {
            self.events.push_back(SessionEvent::CardStateChanged { entity, slot, state });
        }
    }

    fn state(&self) -> Option<&GameState> {
        self.world.get_component::<GameState>(SESSION_ENTITY)
    }

    // --- 状態の問い合わせ ---

    pub fn status(&self) -> GameStatus {
        self.state().map(|s| s.status).unwrap_or_default()
    }

    pub fn moves(&self) -> u32 {
        self.state().map_or(0, |s| s.moves)
    }

    pub fn matched_count(&self) -> usize {
        self.state().map_or(0, |s| s.matched_count)
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.state().map_or(0, |s| s.elapsed_seconds)
    }

    pub fn is_input_locked(&self) -> bool {
        self.state().is_some_and(|s| s.input_locked)
    }

    pub fn is_timer_running(&self) -> bool {
        self.state().is_some_and(|s| s.timer_running)
    }

    pub fn generation(&self) -> u64 {
        self.state().map_or(0, |s| s.generation)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// 今のデッキの枚数。
    pub fn deck_len(&self) -> usize {
        self.world.get_all_entities_with_component::<Card>().len()
    }

    pub fn card(&self, entity: Entity) -> Option<&Card> {
        self.world.get_component::<Card>(entity)
    }

    /// 場の `slot` 番目のカード。
    pub fn entity_at(&self, slot: usize) -> Option<Entity> {
        self.world.find_entity::<DeckSlot, _>(|s| s.index == slot)
    }

    /// 動物 ID と言語からカードを探す。
    pub fn find_card(&self, pair_id: u32, variant: LanguageVariant) -> Option<Entity> {
        self.world.find_entity::<Card, _>(|c| c.pair_id == pair_id && c.variant == variant)
    }

    /// 場の並び順の全カード。
    pub fn cards(&self) -> Vec<CardData> {
        self.world
            .get_all_entities_with_component::<Card>()
            .into_iter()
            .filter_map(|entity| {
                let card = self.world.get_component::<Card>(entity)?;
                let slot = self.world.get_component::<DeckSlot>(entity)?.index;
                Some(CardData {
                    entity,
                    slot,
                    pair_id: card.pair_id,
                    variant: card.variant,
                    display_text: card.display_text.clone(),
                    icon: card.icon.clone(),
                    state: card.state,
                })
            })
            .sorted_by_key(|data| data.slot)
            .collect()
    }

    /// 今の状態をまるごとスナップショットにする。
    pub fn snapshot(&self) -> GameStateData {
        let state = self.state().cloned().unwrap_or_default();
        GameStateData {
            status: state.status,
            moves: state.moves,
            elapsed_seconds: state.elapsed_seconds,
            matched_count: state.matched_count,
            input_locked: state.input_locked,
            timer_running: state.timer_running,
            generation: state.generation,
            cards: self.cards(),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

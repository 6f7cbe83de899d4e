// src/systems/timer_system.rs

use crate::components::{GameState, SESSION_ENTITY};
use crate::ecs::system::System;
use crate::ecs::world::World;

/// 1回呼ばれるごとに経過時間を1秒進めるシステム ⏱️
///
/// タイマーが止まってる (始まってない・勝った・リセットされた) ときは何もしない。
/// 呼び出す間隔 (1秒ごと) は外側の setInterval が決める。
#[derive(Debug, Default)]
pub struct TimerSystem;

impl System for TimerSystem {
    fn run(&mut self, world: &mut World) {
        if let Some(state) = world.get_component_mut::<GameState>(SESSION_ENTITY) {
            if state.timer_running {
                state.elapsed_seconds += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with(state: GameState) -> World {
        let mut world = World::new();
        let session = world.create_entity();
        world.add_component(session, state);
        world
    }

    #[test]
    fn ticks_only_while_running() {
        let mut world = world_with(GameState::default());
        let mut timer = TimerSystem;
        timer.run(&mut world);
        assert_eq!(world.get_component::<GameState>(SESSION_ENTITY).unwrap().elapsed_seconds, 0);

        if let Some(state) = world.get_component_mut::<GameState>(SESSION_ENTITY) {
            state.timer_running = true;
        }
        timer.run(&mut world);
        timer.run(&mut world);
        assert_eq!(world.get_component::<GameState>(SESSION_ENTITY).unwrap().elapsed_seconds, 2);
    }
}

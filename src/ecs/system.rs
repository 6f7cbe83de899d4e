// src/ecs/system.rs

use crate::ecs::world::World;

/// System（システム）トレイトだよ！
///
/// システムは World の中のコンポーネントを読んだり書き換えたりして、
/// ゲームのルールを進める役割を持つんだ。
/// 引数なしで「毎回同じことをする」処理 (タイマーの1秒進める、勝利判定する…) は
/// このトレイトを実装して `run` で呼び出すよ。
///
/// カード選択みたいに「どのカードか」の入力が必要な処理は、
/// 各システムの `execute` メソッドで直接受け取る形にしてる。
pub trait System {
    /// このシステムを1回実行するよ！
    fn run(&mut self, world: &mut World);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::component::Component;

    // --- テスト用のダミーコンポーネント ---
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Counter(u32);
    impl Component for Counter {}

    // 全ての Counter を 1 ずつ増やすだけのシステム
    struct IncrementSystem;

    impl System for IncrementSystem {
        fn run(&mut self, world: &mut World) {
            for entity in world.get_all_entities_with_component::<Counter>() {
                if let Some(counter) = world.get_component_mut::<Counter>(entity) {
                    counter.0 += 1;
                }
            }
        }
    }

    #[test]
    fn system_runs_and_modifies_world() {
        let mut world = World::new();
        world.register_component::<Counter>();

        let a = world.create_entity();
        let b = world.create_entity();
        world.add_component(a, Counter(0));
        world.add_component(b, Counter(10));

        let mut system = IncrementSystem;
        system.run(&mut world);
        system.run(&mut world);

        assert_eq!(world.get_component::<Counter>(a), Some(&Counter(2)));
        assert_eq!(world.get_component::<Counter>(b), Some(&Counter(12)));
    }
}

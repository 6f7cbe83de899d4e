// src/ecs/world.rs

// Any / TypeId: 型ごとのコンポーネントストレージを、型を隠して一つの HashMap にまとめるために使う。
use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use log::{debug, trace};

use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// コンポーネントストレージと、その型専用のお掃除関数をセットにしたもの！🧹
///
/// `storage` の中身は `HashMap<Entity, T>` だけど、`Box<dyn Any>` で型を消してある。
/// `remover` は登録時に型 `T` を知っている関数ポインタなので、
/// `destroy_entity` は型を知らなくても全部の倉庫からコンポーネントを消せるんだ。
struct ComponentStoreEntry {
    storage: Box<dyn Any>,
    remover: fn(&mut Box<dyn Any>, Entity),
}

impl ComponentStoreEntry {
    fn new<T: Component>() -> Self {
        let remover: fn(&mut Box<dyn Any>, Entity) = |storage_any, entity| {
            if let Some(storage) = storage_any.downcast_mut::<HashMap<Entity, T>>() {
                storage.remove(&entity);
            }
        };
        Self {
            storage: Box::new(HashMap::<Entity, T>::new()),
            remover,
        }
    }
}

/// ゲーム世界の全エンティティとコンポーネントを管理する、自作 ECS のコアだよ！🌍
pub struct World {
    /// 生きているエンティティの集合。
    entities: HashSet<Entity>,
    /// 次に払い出すエンティティ ID。減ることはない。
    next_entity_id: usize,
    /// コンポーネントの型 (TypeId) ごとのストレージ。
    component_stores: HashMap<TypeId, ComponentStoreEntry>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// 空っぽの World を作るよ。
    pub fn new() -> Self {
        World {
            entities: HashSet::new(),
            next_entity_id: 0,
            component_stores: HashMap::new(),
        }
    }

    /// 新しいエンティティを作って返すよ。ID は 0 からの連番！
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(entity);
        trace!("World: created {}", entity);
        entity
    }

    /// エンティティが生きてるかどうか。
    pub fn is_entity_alive(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// 生きているエンティティの数。
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// エンティティを削除するよ。くっついてたコンポーネントも全種類まとめて消える！
    ///
    /// 存在しないエンティティを渡したら何もせず `false`。
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        if !self.entities.remove(&entity) {
            debug!("World: tried to destroy non-existent {}", entity);
            return false;
        }
        for entry in self.component_stores.values_mut() {
            (entry.remover)(&mut entry.storage, entity);
        }
        trace!("World: destroyed {}", entity);
        true
    }

    /// コンポーネントの型を登録するよ。
    ///
    /// 二重に登録しても既存のストレージはそのまま (中身は消えない)。
    pub fn register_component<T: Component>(&mut self) {
        let type_id = TypeId::of::<T>();
        if self.component_stores.contains_key(&type_id) {
            debug!("World: component {} already registered", std::any::type_name::<T>());
            return;
        }
        self.component_stores.insert(type_id, ComponentStoreEntry::new::<T>());
        trace!("World: registered component {}", std::any::type_name::<T>());
    }

    /// エンティティにコンポーネントを追加 (既にあれば上書き) するよ。
    ///
    /// 死んでるエンティティには追加しない。未登録の型ならここで登録しちゃう。
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        if !self.is_entity_alive(entity) {
            debug!("World: ignoring {} for dead {}", std::any::type_name::<T>(), entity);
            return;
        }
        if let Some(storage) = self
            .component_stores
            .entry(TypeId::of::<T>())
            .or_insert_with(ComponentStoreEntry::new::<T>)
            .storage
            .downcast_mut::<HashMap<Entity, T>>()
        {
            storage.insert(entity, component);
        }
    }

    /// コンポーネントへの読み取り専用参照。なければ `None`。
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.component_stores
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_ref::<HashMap<Entity, T>>())
            .and_then(|storage| storage.get(&entity))
    }

    /// コンポーネントへの書き込み可能な参照。死んでるエンティティなら `None`。
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.is_entity_alive(entity) {
            return None;
        }
        self.component_stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_mut::<HashMap<Entity, T>>())
            .and_then(|storage| storage.get_mut(&entity))
    }

    /// 型 `T` のコンポーネントを持つ、生きているエンティティの一覧。
    ///
    /// HashMap の順番はバラバラなので、ID 順にソートして返すよ。
    /// 同じ World からは毎回同じ順番で返ってくる！
    pub fn get_all_entities_with_component<T: Component>(&self) -> Vec<Entity> {
        self.component_stores
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_ref::<HashMap<Entity, T>>())
            .map(|storage| {
                storage
                    .keys()
                    .copied()
                    .filter(|e| self.is_entity_alive(*e))
                    .sorted()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 型 `T` のコンポーネントのうち、条件を満たす最初のもの (ID 順) のエンティティを探すよ。
    pub fn find_entity<T, F>(&self, mut predicate: F) -> Option<Entity>
    where
        T: Component,
        F: FnMut(&T) -> bool,
    {
        self.get_all_entities_with_component::<T>()
            .into_iter()
            .find(|&entity| self.get_component::<T>(entity).is_some_and(&mut predicate))
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod tests;

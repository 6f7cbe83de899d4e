// src/ecs/mod.rs
//! 自作の小さな ECS (Entity-Component-System)。
//! カードもセッション本体も、ぜんぶエンティティ + コンポーネントで表すよ！

pub mod component;
pub mod entity;
pub mod system;
pub mod world;

// `crate::ecs::X` で使えるように re-export
pub use component::Component;
pub use entity::Entity;
pub use system::System;
pub use world::World;

// src/systems/mod.rs
//! ゲームを進めるシステムたち！
//! どれも World (セッションのエンティティ + カードのエンティティ) を書き換えるだけで、
//! 描画やタイマーの実体 (setInterval とか) には一切触らないよ。

pub mod deal_system;
pub mod selection_system;
pub mod match_system;
pub mod timer_system;
pub mod win_condition_system;

pub use deal_system::DealSystem;
pub use match_system::{MatchResult, MatchSystem, PendingUnflip};
pub use selection_system::{IgnoreReason, SelectionOutcome, SelectionSystem};
pub use timer_system::TimerSystem;
pub use win_condition_system::WinConditionSystem;

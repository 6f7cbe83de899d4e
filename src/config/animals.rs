// src/config/animals.rs
//! 動物のデフォルト一覧だよ！🐾
//! 1匹につき英語カードとローカル言語 (中国語) カードの2枚が作られる。

use serde::{Serialize, Deserialize};

/// 動物1匹ぶんの元データ。ゲーム中は変わらない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalEntry {
    pub id: u32,
    pub english_name: String,
    pub local_name: String,
    pub icon: String,
}

impl AnimalEntry {
    pub fn new(id: u32, english_name: &str, local_name: &str, icon: &str) -> Self {
        AnimalEntry {
            id,
            english_name: english_name.to_string(),
            local_name: local_name.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// (id, 英語名, 中国語名, 絵文字)
pub const DEFAULT_ANIMALS: [(u32, &str, &str, &str); 8] = [
    (1, "Cat", "猫", "🐱"),
    (2, "Dog", "狗", "🐶"),
    (3, "Panda", "熊猫", "🐼"),
    (4, "Tiger", "老虎", "🐯"),
    (5, "Rabbit", "兔子", "🐰"),
    (6, "Monkey", "猴子", "🐵"),
    (7, "Elephant", "大象", "🐘"),
    (8, "Lion", "狮子", "🦁"),
];

/// デフォルトの8匹を `AnimalEntry` のリストにして返すよ。
pub fn default_animals() -> Vec<AnimalEntry> {
    DEFAULT_ANIMALS
        .iter()
        .map(|&(id, en, local, icon)| AnimalEntry::new(id, en, local, icon))
        .collect()
}

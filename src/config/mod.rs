// src/config/mod.rs
//! ゲームの設定だよ！
//! デフォルト値は定数で持っておいて、JS から JSON で上書きもできるようにしてある。

pub mod animals;
pub mod timing;

use itertools::Itertools;
use serde::{Serialize, Deserialize};

use crate::error::ConfigError;
pub use animals::{default_animals, AnimalEntry};

/// 1ゲームぶんの設定。
///
/// JSON で一部のフィールドだけ渡しても、残りはデフォルト値で埋まるよ (`#[serde(default)]`)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// ペアにする動物たち。1匹につき2枚のカードになる。
    pub animals: Vec<AnimalEntry>,
    pub unflip_delay_ms: u32,
    pub tick_interval_ms: u32,
    pub local_language_label: String,
    pub card_back_glyph: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            animals: default_animals(),
            unflip_delay_ms: timing::UNFLIP_DELAY_MS,
            tick_interval_ms: timing::TIMER_TICK_MS,
            local_language_label: timing::LOCAL_LABEL.to_string(),
            card_back_glyph: timing::CARD_BACK_GLYPH.to_string(),
        }
    }
}

impl GameConfig {
    /// JSON 文字列から設定を読み込んで、チェックまでするよ。
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 設定がゲームとして成り立つかチェック。
    ///
    /// - 動物が1匹以上いること
    /// - 動物の id が被ってないこと (被るとペアが4枚になっちゃう！)
    /// - タイマー間隔が 0 じゃないこと
    /// - タイマー間隔と待ち時間がブラウザのタイマーに渡せる長さ (i32) に収まること
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animals.is_empty() {
            return Err(ConfigError::NoAnimals);
        }
        if let Some(id) = self.animals.iter().map(|a| a.id).duplicates().next() {
            return Err(ConfigError::DuplicateAnimalId(id));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        for (field, value) in [
            ("tick_interval_ms", self.tick_interval_ms),
            ("unflip_delay_ms", self.unflip_delay_ms),
        ] {
            if value > timing::MAX_TIMER_MS {
                return Err(ConfigError::IntervalTooLong { field, value });
            }
        }
        Ok(())
    }

    /// この設定で作られるデッキの枚数。
    pub fn deck_size(&self) -> usize {
        self.animals.len() * 2
    }
}

// src/config/timing.rs
//! 時間まわりと表示ラベルの定数。

/// ハズレの2枚を裏に戻すまでの待ち時間 (ミリ秒)
pub const UNFLIP_DELAY_MS: u32 = 700;
/// タイマーが1回進む間隔 (ミリ秒)。1回で elapsed_seconds が 1 増える。
pub const TIMER_TICK_MS: u32 = 1000;

/// 英語カードの言語タグ
pub const ENGLISH_LABEL: &str = "English";
/// ローカル言語カードの言語タグ (デフォルト)
pub const LOCAL_LABEL: &str = "中文";
/// カードの裏面に出す絵文字
pub const CARD_BACK_GLYPH: &str = "🐾";

/// setInterval / setTimeout に渡せる一番長い時間 (ミリ秒)。
pub const MAX_TIMER_MS: u32 = i32::MAX as u32;

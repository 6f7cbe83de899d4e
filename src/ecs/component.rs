// src/ecs/component.rs

/// Component（コンポーネント）トレイトだよ！
///
/// 構造体が World に入れられる「データ部品」であることを示すマーカー。
/// `Debug` はログやテストで `{:?}` 表示するために付けてるよ。
pub trait Component: std::fmt::Debug + 'static {}

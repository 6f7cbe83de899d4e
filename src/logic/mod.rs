// src/logic/mod.rs
//! World に依存しない、純粋なゲームルールの関数たち。

pub mod deck;
pub mod rules;

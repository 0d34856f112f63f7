// src/logic/mod.rs
//! World に依存しない、純粋なゲームロジック (デッキ生成とルール判定)。

pub mod deck;
pub mod rules;

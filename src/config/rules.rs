// src/config/rules.rs
//! 卓の構成に関する定数と、ゲーム開始時に渡せる設定を定義するよ！

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const DECK_SIZE: usize = 52; // 1デッキの枚数
pub const FOUNDATION_COUNT: usize = 4; // 組札の数
pub const TABLEAU_PILE_COUNT: usize = 7; // 場札の列数
pub const DEFAULT_DRAW_COUNT: usize = 3; // 山札クリック1回でめくる枚数

/// 配り終わったあと場札に乗っている枚数 (1 + 2 + ... + 7)
pub const DEALT_TABLEAU_CARDS: usize = TABLEAU_PILE_COUNT * (TABLEAU_PILE_COUNT + 1) / 2;

/// ゲーム開始時の設定。
///
/// JSON からも読めるように Deserialize を付けてあるよ。省略したフィールドはデフォルト値！
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 山札クリックでめくる最大枚数 (1 以上)
    pub draw_count: usize,
    /// シャッフル用のシード。None ならランダム。
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { draw_count: DEFAULT_DRAW_COUNT, seed: None }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.draw_count == 0 {
            return Err(GameError::InvalidConfig("draw_count must be at least 1".to_string()));
        }
        Ok(())
    }
}

// src/ecs/entity.rs

use serde::{Deserialize, Serialize};

/// Entity（エンティティ）は、カード1枚1枚を指すただの ID だよ！
///
/// カードの実体 (`Card`) は `World` の中に1つずつしかなくて、
/// 山札や場札はこの ID を並べて持ってるだけ。
/// だからカードを動かす = ID を別の列に移すだけで、カードが増えたり消えたりしないんだ！✨
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Entity(pub usize);

impl Entity {
    /// `World` の中での位置 (インデックス)。
    pub fn index(self) -> usize {
        self.0
    }
}

// src/components/stack.rs

use serde::{Deserialize, Serialize};

use crate::ecs::entity::Entity;

/// カードが存在する場所の種類を示す Enum だよ。
/// これを使って、カードが山札にあるのか、場札の何列目にあるのか、などを区別するよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau) だよ。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(usize),
    /// 組札 (Foundation) だよ。4つあって番号 (0-3) で管理する。
    /// 最初の1枚が置かれるまでスートは決まってないよ。
    Foundation(usize),
    /// 山札 (Stock) だよ。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste) だよ。
    Waste,
}

/// カードの山ひとつ分 (Stock, Waste, Foundation, Tableau のどれか)。
///
/// 中身は `Entity` の列で、最後の要素が「一番上」。動かせるのは一番上だけ！
/// 種類ごとの「何ができるか」は呼び出し側 (ルールとハンドラー) が決めるので、
/// ここはシンプルな push/pop/peek だけ持ってるよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    stack_type: StackType,
    cards: Vec<Entity>,
}

impl Stack {
    pub fn new(stack_type: StackType) -> Self {
        Self { stack_type, cards: Vec::new() }
    }

    pub fn stack_type(&self) -> StackType {
        self.stack_type
    }

    pub fn push(&mut self, entity: Entity) {
        self.cards.push(entity);
    }

    pub fn pop(&mut self) -> Option<Entity> {
        self.cards.pop()
    }

    /// 一番上のカード。空なら None。
    pub fn peek(&self) -> Option<Entity> {
        self.cards.last().copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 下から上の順に並んだ中身。
    pub fn entities(&self) -> &[Entity] {
        &self.cards
    }

    /// 上から `count` 枚を、積まれていた順のまま切り離す。
    /// `count` が枚数より多ければ全部。
    pub fn split_off_top(&mut self, count: usize) -> Vec<Entity> {
        let at = self.cards.len().saturating_sub(count);
        self.cards.split_off(at)
    }

    /// `split_off_top` で切り離した列をそのまま上に積む。
    pub fn extend_top(&mut self, run: Vec<Entity>) {
        self.cards.extend(run);
    }
}

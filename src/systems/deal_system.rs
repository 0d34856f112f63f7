// src/systems/deal_system.rs

use log::{info, warn};

use crate::components::stack::Stack;
use crate::ecs::world::World;

// === 初期カード配置システム！ ===
// ゲーム開始時に、山札から7つの場札にカードを配る役割を担うシステムだよ。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// # 処理の流れ
    /// - 場札 `i` 列目 (0 始まり) に `i + 1` 枚、山札の上から配る。
    /// - 配る順番は一番右の列 (6) から左 (0) へ。
    /// - 各列の一番上のカードだけ表向きにする。それより下は裏向きのまま。
    ///
    /// 配り終わると場札に28枚、山札に24枚が残る。
    pub fn execute(&self, world: &mut World, stock: &mut Stack, piles: &mut [Stack]) {
        let mut dealt = 0;
        for (pile_index, pile) in piles.iter_mut().enumerate().rev() {
            for _ in 0..=pile_index {
                match stock.pop() {
                    Some(entity) => {
                        pile.push(entity);
                        dealt += 1;
                    }
                    None => {
                        warn!("Deal: stock ran out while dealing pile {}", pile_index);
                        break;
                    }
                }
            }
            // その列の一番上のカードだけ表向きにするよ！👀
            if let Some(top) = pile.peek() {
                world.turn_up(top);
            }
        }
        info!("Deal: {} cards dealt to tableau, {} left in stock", dealt, stock.len());
    }
}

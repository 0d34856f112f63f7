// src/logic/deck.rs

use itertools::Itertools;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::components::stack::{Stack, StackType};
use crate::config::rules::DECK_SIZE;
use crate::ecs::world::World;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スート × ランクの全組み合わせを、スートごとに A から K の順で作る。
/// 生成された時点では、すべてのカードは裏向き！
pub fn create_standard_deck() -> Vec<Card> {
    ALL_SUITS
        .iter()
        .cartesian_product(ALL_RANKS.iter())
        .map(|(&suit, &rank)| Card::new(suit, rank))
        .collect()
}

/// カードデッキをシャッフルする関数だよ。
///
/// 乱数生成器は外から渡す。シード付きの `StdRng` を渡せば毎回同じ並びになるので、テストで便利！
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// シャッフルした52枚を World に登録して、山札 (Stock) として返すよ。
///
/// 全部裏向きで、Vec の最後のカードが山札の一番上になる。
pub fn create_stock<R: Rng + ?Sized>(world: &mut World, rng: &mut R) -> Stack {
    let mut deck = create_standard_deck();
    shuffle_deck(&mut deck, rng);

    let mut stock = Stack::new(StackType::Stock);
    for card in deck {
        stock.push(world.spawn_card(card));
    }
    debug!("Deck: created stock with {} cards", stock.len());
    debug_assert_eq!(stock.len(), DECK_SIZE);
    stock
}

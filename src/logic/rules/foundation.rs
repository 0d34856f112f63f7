//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};

/// 指定されたカードが、一番上が `foundation_top` の組札に置けるかチェックする。
///
/// 空の組札 (`None`) には A だけ。それ以外は同じスートで1つ上のランクだけ置ける。
pub fn can_add_to_foundation(card: &Card, foundation_top: Option<&Card>) -> bool {
    let result = match foundation_top {
        None => card.rank() == Rank::Ace,
        Some(top) => card.suit() == top.suit() && card.rank().value() == top.rank().value() + 1,
    };
    match foundation_top {
        Some(top) => debug!("[Foundation Rule] {} onto {}: {}", card, top, result),
        None => debug!("[Foundation Rule] {} onto empty foundation: {}", card, result),
    }
    result
}

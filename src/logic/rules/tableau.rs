//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};

/// 指定されたカードが、一番上が `pile_top` の場札に置けるかチェックする。
///
/// 列ごと動かすときは、その列の一番下のカードを `card` に渡してね。
/// - 空の列 (`None`) には K だけ。
/// - それ以外は、表向きのカードに「1つ小さいランク & 色違い」だけ。裏向きの上には置けない！
pub fn can_add_to_pile(card: &Card, pile_top: Option<&Card>) -> bool {
    let Some(top) = pile_top else {
        let is_king = card.rank() == Rank::King;
        debug!("[Tableau Rule] {} onto empty pile. Is King: {}", card, is_king);
        return is_king;
    };

    if !top.is_face_up() {
        debug!("[Tableau Rule] {} onto face-down card: invalid", card);
        return false;
    }

    let colors_different = card.is_red() != top.is_red();
    let rank_is_one_less = card.rank().value() + 1 == top.rank().value();
    debug!(
        "[Tableau Rule] {} onto {}. Colors different: {}. Rank is one less: {}.",
        card, top, colors_different, rank_is_one_less
    );
    colors_different && rank_is_one_less
}

// src/app/event_handler.rs
//! クリック (捨て札・組札・場札) を受けて、選択状態とカードの移動を進めるロジック。
//! 山札クリックは stock_handler.rs にあるよ。

use log::{debug, info, warn};

use crate::app::solitaire::Solitaire;
use crate::components::selection::Selection;
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_PILE_COUNT};
use crate::ecs::entity::Entity;
use crate::error::GameError;
use crate::logic::rules::{can_add_to_foundation, can_add_to_pile};

/// 捨て札クリック。
///
/// - 捨て札が選ばれていたら選択解除 (トグル)。
/// - 捨て札にカードがあって場札が選ばれていなければ、捨て札を選ぶ。
/// - それ以外は何もしない。
pub fn handle_waste_click(game: &mut Solitaire) {
    if game.selection.is_waste() {
        game.selection = Selection::None;
        debug!("Waste unselected");
    } else if !game.waste.is_empty() && game.selection.selected_pile().is_none() {
        game.selection = Selection::Waste;
        debug!("Waste selected");
    } else {
        debug!("Waste click ignored (selection: {:?})", game.selection);
    }
}

/// 組札 `index` のクリック。置けない時は何もしないで、選択もそのまま残す。
pub fn handle_foundation_click(game: &mut Solitaire, index: usize) -> Result<(), GameError> {
    if index >= FOUNDATION_COUNT {
        return Err(GameError::InvalidFoundationIndex(index));
    }

    let source = match game.selection {
        Selection::Waste => game.waste.peek(),
        Selection::Pile(pile_index) => game.piles[pile_index].peek(),
        Selection::None => None,
    };
    let Some(entity) = source else {
        debug!("Foundation({}) click ignored: nothing to move", index);
        return Ok(());
    };

    if !accepts_on_foundation(game, entity, index) {
        debug!("Foundation({}) rejected {:?}", index, entity);
        return Ok(());
    }

    let moved = match game.selection {
        Selection::Pile(pile_index) => game.piles[pile_index].pop(),
        _ => game.waste.pop(),
    };
    if let Some(entity) = moved {
        game.foundations[index].push(entity);
        info!("Moved {:?} to Foundation({})", entity, index);
    }
    game.selection = Selection::None;
    Ok(())
}

/// 場札クリックで実行するアクション。
/// `decide_pile_click` が上から順にガードを見て、最初に当てはまったものを選ぶよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PileClickAction {
    /// 1. 別の列 `from` が選ばれている: 表向きの列ごと移動を試みる (ダメなら元に戻す)
    MoveRun { from: usize },
    /// 2. 捨て札が選ばれていて、その一番上が置ける: 1枚移動
    MoveWasteCard,
    /// 3. 選ばれている列そのものをもう一度クリック: 選択解除
    Unselect,
    /// 4. 一番上が表向き: その列を選ぶ
    Select,
    /// 5. 一番上が裏向き: めくるだけ
    Reveal,
    /// どれにも当てはまらない (空の列など)
    Ignore,
}

/// 場札 `index` がクリックされた時に何をするか決める。状態は変えない。
pub fn decide_pile_click(game: &Solitaire, index: usize) -> Result<PileClickAction, GameError> {
    if index >= TABLEAU_PILE_COUNT {
        return Err(GameError::InvalidPileIndex(index));
    }
    let selected_pile = game.selection.selected_pile();
    let target_top = game.piles[index].peek();

    if let Some(from) = selected_pile.filter(|&from| from != index) {
        return Ok(PileClickAction::MoveRun { from });
    }
    if game.selection.is_waste() {
        if let Some(waste_top) = game.waste.peek() {
            if accepts_on_pile(game, waste_top, index) {
                return Ok(PileClickAction::MoveWasteCard);
            }
        }
    }
    if selected_pile == Some(index) {
        return Ok(PileClickAction::Unselect);
    }
    let action = match target_top {
        Some(top) if game.world.is_face_up(top) => PileClickAction::Select,
        Some(_) => PileClickAction::Reveal,
        None => PileClickAction::Ignore,
    };
    Ok(action)
}

/// 場札 `index` のクリック。
pub fn handle_pile_click(game: &mut Solitaire, index: usize) -> Result<(), GameError> {
    let action = decide_pile_click(game, index)?;
    debug!("Pile({}) click -> {:?}", index, action);

    match action {
        PileClickAction::MoveRun { from } => move_run(game, from, index),
        PileClickAction::MoveWasteCard => {
            if let Some(entity) = game.waste.pop() {
                game.piles[index].push(entity);
                info!("Moved {:?} from Waste to Pile({})", entity, index);
            }
            // 捨て札クリックと同じトグルで選択を外す
            handle_waste_click(game);
        }
        PileClickAction::Unselect => game.selection = Selection::None,
        PileClickAction::Select => game.selection = Selection::Pile(index),
        PileClickAction::Reveal => {
            if let Some(top) = game.piles[index].peek() {
                game.world.turn_up(top);
            }
        }
        PileClickAction::Ignore => {}
    }
    Ok(())
}

/// 列 `from` の表向きの部分を丸ごと `to` に動かす。置けなければ `from` に戻す。
///
/// 移動先の一番上が裏向きなら、移動できるかどうかに関係なく先にめくるよ。
fn move_run(game: &mut Solitaire, from: usize, to: usize) {
    if let Some(top) = game.piles[to].peek() {
        if !game.world.is_face_up(top) {
            game.world.turn_up(top);
            debug!("Revealed top of Pile({})", to);
        }
    }

    let run = take_face_up_run(game, from);
    game.selection = Selection::None;

    let Some(&bottom) = run.first() else {
        warn!("Pile({}) was selected but has no face-up cards", from);
        return;
    };

    if accepts_on_pile(game, bottom, to) {
        info!("Moved {} card(s) from Pile({}) to Pile({})", run.len(), from, to);
        game.piles[to].extend_top(run);
    } else {
        debug!("Pile({}) rejected run from Pile({}); putting it back", to, from);
        game.piles[from].extend_top(run);
    }
}

/// 列の上にある、連続した表向きのカードを (下から上の順で) 切り離す。
fn take_face_up_run(game: &mut Solitaire, index: usize) -> Vec<Entity> {
    let world = &game.world;
    let run_len = game.piles[index]
        .entities()
        .iter()
        .rev()
        .take_while(|&&entity| world.is_face_up(entity))
        .count();
    game.piles[index].split_off_top(run_len)
}

fn accepts_on_foundation(game: &Solitaire, entity: Entity, index: usize) -> bool {
    let Some(card) = game.card(entity) else { return false };
    let top = game.foundations[index].peek().and_then(|top| game.card(top));
    can_add_to_foundation(card, top)
}

fn accepts_on_pile(game: &Solitaire, entity: Entity, index: usize) -> bool {
    let Some(card) = game.card(entity) else { return false };
    let top = game.piles[index].peek().and_then(|top| game.card(top));
    can_add_to_pile(card, top)
}

#[cfg(test)]
#[path = "event_handler_tests.rs"]
mod tests;

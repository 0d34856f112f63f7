// src/app/stock_handler.rs
//! Handles logic related to clicking the Stock pile (dealing to Waste, resetting Waste).

use log::{debug, info};

use crate::app::solitaire::Solitaire;
use crate::logic::rules::stock_waste;

/// Stock click. Ignored while anything is selected; otherwise deals or recycles.
pub fn handle_stock_click(game: &mut Solitaire) {
    if !game.selection.is_none() {
        debug!("Stock click ignored: {:?} is selected", game.selection);
        return;
    }

    if game.stock.is_empty() {
        reset_waste_to_stock(game);
    } else {
        deal_cards_from_stock(game);
    }
}

/// Deals up to `draw_count` cards from Stock to Waste, turning each face up.
/// Returns how many cards were dealt.
pub(crate) fn deal_cards_from_stock(game: &mut Solitaire) -> usize {
    let mut dealt = 0;
    while dealt < game.draw_count && stock_waste::can_deal_from_stock(game.stock.is_empty()) {
        let Some(entity) = game.stock.pop() else { break };
        game.world.turn_up(entity);
        game.waste.push(entity);
        dealt += 1;
    }
    info!("Dealt {} card(s) to Waste ({} left in Stock)", dealt, game.stock.len());
    dealt
}

/// Moves every Waste card back to Stock face down. Popping from Waste and pushing
/// onto Stock reverses the order, so the next pass draws the same sequence again.
/// Returns true if the reset was performed.
pub(crate) fn reset_waste_to_stock(game: &mut Solitaire) -> bool {
    if !stock_waste::can_reset_stock_from_waste(game.stock.is_empty(), game.waste.is_empty()) {
        debug!("Cannot reset Waste to Stock (Stock not empty or Waste empty)");
        return false;
    }

    let count = game.waste.len();
    while let Some(entity) = game.waste.pop() {
        game.world.turn_down(entity);
        game.stock.push(entity);
    }
    info!("Waste pile reset to Stock ({} cards)", count);
    true
}

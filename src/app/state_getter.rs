//! Gets the current game state from the Solitaire table and converts it to JSON.

use log::{debug, error};

use crate::app::solitaire::Solitaire;
use crate::components::card::Card;
use crate::components::stack::Stack;
use crate::error::GameError;
use crate::protocol::{CardData, GameStateData};

/// 卓の状態をレンダラー向けのスナップショットにまとめるよ。
pub fn snapshot(game: &Solitaire) -> GameStateData {
    let cards = |stack: &Stack| -> Vec<CardData> { game.cards_of(stack).into_iter().map(card_data).collect() };

    GameStateData {
        stock_count: game.stock.len(),
        waste: cards(&game.waste),
        foundations: game.foundations.iter().map(cards).collect(),
        piles: game.piles.iter().map(cards).collect(),
        selection: game.selection,
        status: game.status(),
    }
}

/// スナップショットを JSON 文字列にして返す。
pub fn get_game_state_json(game: &Solitaire) -> Result<String, GameError> {
    let json = serde_json::to_string(&snapshot(game)).map_err(|e| {
        error!("Failed to serialize game state: {}", e);
        GameError::from(e)
    })?;
    debug!("Serialized game state ({} bytes)", json.len());
    Ok(json)
}

fn card_data(card: &Card) -> CardData {
    CardData { suit: card.suit(), rank: card.rank(), is_face_up: card.is_face_up() }
}

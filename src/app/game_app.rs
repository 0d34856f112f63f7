// src/app/game_app.rs

// --- 必要なものをインポート ---
use log::{error, info};
use wasm_bindgen::prelude::*;

use crate::app::solitaire::Solitaire;
use crate::app::state_getter;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::protocol::PlayerAction;

// --- JS 側のレンダラーから使うゲーム本体 ---
// 描画やマウス座標の変換は JS 側の仕事。ここはクリックを受けて、状態を JSON で返すだけ！
#[wasm_bindgen]
pub struct GameApp {
    game: Solitaire,
}

#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: Initializing...");
        Self { game: Solitaire::new() }
    }

    /// シード固定で始める (リプレイやデバッグ用)。
    pub fn new_with_seed(seed: u64) -> Self {
        info!("GameApp: Initializing with seed {}", seed);
        Self { game: Solitaire::with_seed(seed) }
    }

    /// `GameConfig` の JSON (例: `{"draw_count": 1}`) から始める。
    pub fn new_with_config_json(config_json: &str) -> Result<GameApp, String> {
        let config: GameConfig = serde_json::from_str(config_json).map_err(|e| report(GameError::from(e)))?;
        let game = Solitaire::with_config(&config).map_err(report)?;
        Ok(Self { game })
    }

    pub fn stock_clicked(&mut self) {
        self.game.stock_clicked();
    }

    pub fn waste_clicked(&mut self) {
        self.game.waste_clicked();
    }

    pub fn foundation_clicked(&mut self, index: usize) -> Result<(), String> {
        self.game.foundation_clicked(index).map_err(report)
    }

    pub fn pile_clicked(&mut self, index: usize) -> Result<(), String> {
        self.game.pile_clicked(index).map_err(report)
    }

    /// `PlayerAction` の JSON を受け取って実行する。
    pub fn handle_action_json(&mut self, action_json: &str) -> Result<(), String> {
        let action: PlayerAction = serde_json::from_str(action_json).map_err(|e| report(GameError::from(e)))?;
        self.game.apply(action).map_err(report)
    }

    /// 今の状態を JSON で返す (レンダラーは毎回これを読んで描き直す)。
    pub fn get_game_state_json(&self) -> Result<String, String> {
        state_getter::get_game_state_json(&self.game).map_err(report)
    }

    pub fn is_won(&self) -> bool {
        self.game.is_won()
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}

impl GameApp {
    /// Rust 側から中のゲームを覗く用。
    pub fn game(&self) -> &Solitaire {
        &self.game
    }
}

fn report(err: GameError) -> String {
    error!("GameApp: {}", err);
    err.to_string()
}

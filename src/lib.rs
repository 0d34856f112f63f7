// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod ecs;
pub mod error;
pub mod logic;
pub mod protocol;
pub mod systems;

// よく使う型はクレート直下からも使えるようにしておくよ。
pub use app::{GameApp, Solitaire};
pub use components::{Card, GameStatus, Rank, Selection, Stack, StackType, Suit};
pub use config::GameConfig;
pub use ecs::{Entity, World};
pub use error::GameError;
pub use protocol::{CardData, GameStateData, PlayerAction};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

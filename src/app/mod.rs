// src/app/mod.rs
//! ゲーム進行 (クリック操作と状態の問い合わせ) を役割ごとに分割して置くモジュールだよ！

pub mod event_handler; // 捨て札・組札・場札のクリック
pub mod game_app; // JS 向けの入口
pub mod solitaire; // 卓の状態とクエリ
pub mod state_getter; // スナップショット / JSON
pub mod stock_handler; // 山札クリック

pub use game_app::GameApp;
pub use solitaire::Solitaire;

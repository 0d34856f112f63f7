// src/protocol.rs

// このファイルは、エンジンとレンダラー (JS 側) の間でやり取りするデータの形式を定義するよ！💌
// `Serialize` は Rust のデータ構造 -> JSON 文字列 にするやつ、
// `Deserialize` は JSON 文字列 -> Rust のデータ構造 にするやつだよ。
use serde::{Deserialize, Serialize};

use crate::components::card::{Rank, Suit};
use crate::components::game_state::GameStatus;
use crate::components::selection::Selection;

// --- レンダラーからエンジンへ送るもの ---

/// プレイヤーのクリック操作。JSON だとこんな感じ:
/// `"Stock"`, `"Waste"`, `{"Foundation": 0}`, `{"Tableau": 6}`
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// 山札クリック (めくる / 捨て札を戻す)
    Stock,
    /// 捨て札クリック (選択 / 解除)
    Waste,
    /// 組札 (0-3) クリック
    Foundation(usize),
    /// 場札 (0-6) クリック
    Tableau(usize),
}

// --- エンジンからレンダラーへ返すもの ---

/// 描画に必要なゲームの状態全体を表すデータ構造だよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameStateData {
    /// 山札の枚数 (全部裏向きなので中身はいらない)
    pub stock_count: usize,
    /// 捨て札 (下から上の順)
    pub waste: Vec<CardData>,
    /// 組札4つ (それぞれ下から上の順)
    pub foundations: Vec<Vec<CardData>>,
    /// 場札7列 (それぞれ下から上の順、裏向きも含む)
    pub piles: Vec<Vec<CardData>>,
    /// ハイライト表示用の選択状態
    pub selection: Selection,
    pub status: GameStatus,
}

/// カード1枚の状態を表すデータ構造。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    /// カードのスート (マーク)。
    pub suit: Suit,
    /// カードのランク (数字)。
    pub rank: Rank,
    /// カードが表向きかどうか。
    pub is_face_up: bool,
}

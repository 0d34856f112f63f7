// src/error.rs
//! 呼び出し側のミス (範囲外のインデックスなど) を知らせるエラー型。
//! ルール上できない移動はエラーじゃなくて「何も起きない」で返すので、ここには入らないよ。

/// ゲーム操作で起こりうるエラー。
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("foundation index {0} out of range (0..4)")]
    InvalidFoundationIndex(usize),

    #[error("tableau pile index {0} out of range (0..7)")]
    InvalidPileIndex(usize),

    #[error("invalid game config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod game_state;
pub mod selection; // 選択中の場所 (Waste か場札か)
pub mod stack;

// よく使う型は `crate::components::X` で使えるように再エクスポート
pub use card::{Card, Rank, Suit};
pub use game_state::GameStatus;
pub use selection::Selection;
pub use stack::{Stack, StackType};

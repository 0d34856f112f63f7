// src/components/selection.rs

use serde::{Deserialize, Serialize};

/// いまプレイヤーが「選んでいる」場所だよ！🖱️
///
/// クリックで選んで、次のクリックで移動先を決める二段階操作のための一時的な状態。
/// Enum なので2つ同時に選ばれることはありえない！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Selection {
    /// 何も選ばれていない
    #[default]
    None,
    /// 捨て札 (Waste) の一番上が選ばれている
    Waste,
    /// 場札の列 (0-6) の表向きの列が選ばれている
    Pile(usize),
}

impl Selection {
    pub fn is_none(self) -> bool {
        self == Selection::None
    }

    pub fn is_waste(self) -> bool {
        self == Selection::Waste
    }

    /// 選ばれている場札の番号。場札じゃなければ None。
    pub fn selected_pile(self) -> Option<usize> {
        match self {
            Selection::Pile(index) => Some(index),
            _ => None,
        }
    }
}

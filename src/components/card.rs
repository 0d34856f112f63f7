// src/components/card.rs

use std::fmt;
use std::hash::{Hash, Hasher};

// serde を使う宣言！スナップショットを JSON にしてレンダラーに渡す時に使うよ。
use serde::{Deserialize, Serialize};

use crate::logic::rules::common::CardColor;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

impl Suit {
    /// ログ表示用の記号。
    pub fn symbol(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// `Ace = 1` から `King = 13` まで。PartialOrd, Ord も付けて大小比較できるようにしてあるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

impl Rank {
    /// 1 (Ace) から 13 (King) までの数値を返すよ。
    pub fn value(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// 全スート。デッキ生成でループするのに使う！
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

/// 全ランク (A から K の順)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのものを表すデータだよ！🃏
///
/// スートとランクは作ったあと変わらない。変わるのは表向きか裏向きか (`is_face_up`) だけ！
/// 同じ (ランク, スート) のカードはゲーム中に1枚しか存在しないので、
/// 比較とハッシュは (ランク, スート) だけで行うよ。表裏は関係なし！
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    is_face_up: bool,
}

impl Card {
    /// 裏向きの新しいカードを作るよ。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    /// ハートとダイヤは赤！ 色の対応は `CardColor::from_suit` にまとめてある。
    pub fn is_red(&self) -> bool {
        CardColor::from_suit(self.suit) == CardColor::Red
    }

    /// 表向きにする。もう表なら何もしない。
    pub fn turn_up(&mut self) {
        self.is_face_up = true;
    }

    /// 裏向きにする。もう裏なら何もしない。
    pub fn turn_down(&mut self) {
        self.is_face_up = false;
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

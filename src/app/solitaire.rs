// src/app/solitaire.rs
//! 1ゲーム分の卓 (山札・捨て札・組札・場札) と選択状態をまとめた構造体。
//! レンダラーはここのクエリで状態を読み、クリック操作をアクションとして呼ぶよ。

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::app::{event_handler, stock_handler};
use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::components::selection::Selection;
use crate::components::stack::{Stack, StackType};
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_PILE_COUNT};
use crate::config::GameConfig;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::GameError;
use crate::logic::deck::create_stock;
use crate::logic::rules::check_win_condition;
use crate::protocol::PlayerAction;
use crate::systems::DealInitialCardsSystem;

/// クロンダイク1ゲーム分の状態だよ！🃏
pub struct Solitaire {
    pub(crate) world: World,
    pub(crate) stock: Stack,
    pub(crate) waste: Stack,
    pub(crate) foundations: [Stack; FOUNDATION_COUNT],
    pub(crate) piles: [Stack; TABLEAU_PILE_COUNT],
    pub(crate) selection: Selection,
    pub(crate) draw_count: usize,
}

impl Solitaire {
    /// ランダムにシャッフルしたデッキで新しいゲームを始める。
    pub fn new() -> Self {
        Self::from_rng(&mut rand::thread_rng(), GameConfig::default().draw_count)
    }

    /// シード固定で新しいゲームを始める。同じシードなら同じ配り方になるよ。
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed), GameConfig::default().draw_count)
    }

    /// 設定を検証してからゲームを始める。
    pub fn with_config(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let game = match config.seed {
            Some(seed) => Self::from_rng(&mut StdRng::seed_from_u64(seed), config.draw_count),
            None => Self::from_rng(&mut rand::thread_rng(), config.draw_count),
        };
        Ok(game)
    }

    fn from_rng<R: Rng + ?Sized>(rng: &mut R, draw_count: usize) -> Self {
        let mut world = World::new();
        let stock = create_stock(&mut world, rng);
        let mut game = Self {
            world,
            stock,
            waste: Stack::new(StackType::Waste),
            foundations: std::array::from_fn(|i| Stack::new(StackType::Foundation(i))),
            piles: std::array::from_fn(|i| Stack::new(StackType::Tableau(i))),
            selection: Selection::None,
            draw_count,
        };
        DealInitialCardsSystem.execute(&mut game.world, &mut game.stock, &mut game.piles);
        info!("Solitaire: new game ready (draw {})", draw_count);
        game
    }

    // --- クエリ (レンダラー向け) ---

    /// 山札の一番上。空なら None。
    pub fn stock_top(&self) -> Option<&Card> {
        self.top_card(&self.stock)
    }

    /// 捨て札の一番上。空なら None。
    pub fn waste_top(&self) -> Option<&Card> {
        self.top_card(&self.waste)
    }

    /// 組札 `index` の一番上。空なら None。
    pub fn foundation_top(&self, index: usize) -> Result<Option<&Card>, GameError> {
        let foundation = self.foundations.get(index).ok_or(GameError::InvalidFoundationIndex(index))?;
        Ok(self.top_card(foundation))
    }

    /// 場札 `index` の中身 (下から上の順)。裏向きのカードも含むよ。
    pub fn pile(&self, index: usize) -> Result<Vec<&Card>, GameError> {
        let pile = self.piles.get(index).ok_or(GameError::InvalidPileIndex(index))?;
        Ok(self.cards_of(pile))
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    pub fn waste_len(&self) -> usize {
        self.waste.len()
    }

    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    pub fn status(&self) -> GameStatus {
        let on_foundations = self.foundations.iter().map(Stack::len).sum();
        if check_win_condition(on_foundations) {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    pub fn is_won(&self) -> bool {
        self.status() == GameStatus::Won
    }

    /// 全13個のスタック (山札, 捨て札, 組札 x4, 場札 x7) を順番に返す。
    pub fn zones(&self) -> impl Iterator<Item = &Stack> + '_ {
        std::iter::once(&self.stock)
            .chain(std::iter::once(&self.waste))
            .chain(self.foundations.iter())
            .chain(self.piles.iter())
    }

    /// カードの実体を持っている World。
    pub fn world(&self) -> &World {
        &self.world
    }

    /// スタックの中身をカードに変換する。World に無い Entity は警告して飛ばす。
    pub fn cards_of(&self, stack: &Stack) -> Vec<&Card> {
        stack
            .entities()
            .iter()
            .filter_map(|&entity| self.card(entity))
            .collect()
    }

    fn top_card(&self, stack: &Stack) -> Option<&Card> {
        stack.peek().and_then(|entity| self.card(entity))
    }

    pub(crate) fn card(&self, entity: Entity) -> Option<&Card> {
        let card = self.world.get_card(entity);
        if card.is_none() {
            warn!("Solitaire: entity {:?} is not in the world", entity);
        }
        card
    }

    // --- アクション (クリック相当) ---

    pub fn stock_clicked(&mut self) {
        stock_handler::handle_stock_click(self);
    }

    pub fn waste_clicked(&mut self) {
        event_handler::handle_waste_click(self);
    }

    pub fn foundation_clicked(&mut self, index: usize) -> Result<(), GameError> {
        event_handler::handle_foundation_click(self, index)
    }

    pub fn pile_clicked(&mut self, index: usize) -> Result<(), GameError> {
        event_handler::handle_pile_click(self, index)
    }

    /// シリアライズされたアクションを対応するクリックに振り分ける。
    pub fn apply(&mut self, action: PlayerAction) -> Result<(), GameError> {
        match action {
            PlayerAction::Stock => self.stock_clicked(),
            PlayerAction::Waste => self.waste_clicked(),
            PlayerAction::Foundation(index) => self.foundation_clicked(index)?,
            PlayerAction::Tableau(index) => self.pile_clicked(index)?,
        }
        Ok(())
    }
}

impl Default for Solitaire {
    fn default() -> Self {
        Self::new()
    }
}

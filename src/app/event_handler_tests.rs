// src/app/event_handler_tests.rs
//! クリック操作のテスト。場札クリックは分岐ごとにテストして優先順位を固定しておくよ。

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::components::card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
use crate::components::game_state::GameStatus;
use crate::components::stack::{Stack, StackType};
use crate::config::rules::DECK_SIZE;
use crate::protocol::PlayerAction;

// --- テスト用ヘルパー関数 ---

fn entity_of(game: &Solitaire, suit: Suit, rank: Rank) -> Entity {
    game.world
        .entities()
        .find(|&e| game.world.get_card(e).is_some_and(|c| c.suit() == suit && c.rank() == rank))
        .expect("52枚の中に必ずあるはず")
}

fn zone_mut(game: &mut Solitaire, zone: StackType) -> &mut Stack {
    match zone {
        StackType::Stock => &mut game.stock,
        StackType::Waste => &mut game.waste,
        StackType::Foundation(i) => &mut game.foundations[i],
        StackType::Tableau(i) => &mut game.piles[i],
    }
}

/// 卓を好きな配置に並べ直す。指定しなかったカードは全部、裏向きで山札へ。
fn arrange(game: &mut Solitaire, placements: &[(StackType, Suit, Rank, bool)]) {
    game.stock = Stack::new(StackType::Stock);
    game.waste = Stack::new(StackType::Waste);
    game.foundations = std::array::from_fn(|i| Stack::new(StackType::Foundation(i)));
    game.piles = std::array::from_fn(|i| Stack::new(StackType::Tableau(i)));
    game.selection = Selection::None;

    let mut placed = HashSet::new();
    for &(zone, suit, rank, face_up) in placements {
        let entity = entity_of(game, suit, rank);
        if face_up {
            game.world.turn_up(entity);
        } else {
            game.world.turn_down(entity);
        }
        zone_mut(game, zone).push(entity);
        placed.insert(entity);
    }

    let rest: Vec<Entity> = game.world.entities().filter(|e| !placed.contains(e)).collect();
    for entity in rest {
        game.world.turn_down(entity);
        game.stock.push(entity);
    }
}

fn labels(game: &Solitaire, zone: StackType) -> Vec<String> {
    let stack = match zone {
        StackType::Stock => &game.stock,
        StackType::Waste => &game.waste,
        StackType::Foundation(i) => &game.foundations[i],
        StackType::Tableau(i) => &game.piles[i],
    };
    game.cards_of(stack).iter().map(|c| c.to_string()).collect()
}

/// 52枚がちょうど1回ずつ、どこかのスタックにあることを確認する。
fn assert_partition(game: &Solitaire) {
    let mut seen = HashSet::new();
    for zone in game.zones() {
        for &entity in zone.entities() {
            assert!(seen.insert(entity), "{:?} が2か所にある！", entity);
        }
    }
    assert_eq!(seen.len(), DECK_SIZE, "カードが消えた/増えた");
    let cards: HashSet<&Card> = seen.iter().map(|&e| game.world.get_card(e).expect("World にある")).collect();
    assert_eq!(cards.len(), DECK_SIZE, "(ランク, スート) が重複してる");
}

const T3: StackType = StackType::Tableau(3);
const T5: StackType = StackType::Tableau(5);

/// 場札3: [裏 2♣, 表 7♥, 表 6♠]
fn pile_three_with_run() -> Vec<(StackType, Suit, Rank, bool)> {
    vec![
        (T3, Suit::Club, Rank::Two, false),
        (T3, Suit::Heart, Rank::Seven, true),
        (T3, Suit::Spade, Rank::Six, true),
    ]
}

// --- 捨て札クリック ---

#[test]
fn waste_click_toggles_selection() {
    let mut game = Solitaire::with_seed(1);
    handle_waste_click(&mut game);
    assert_eq!(game.selection, Selection::None, "空の捨て札は選べない");

    game.stock_clicked();
    handle_waste_click(&mut game);
    assert_eq!(game.selection, Selection::Waste);
    handle_waste_click(&mut game);
    assert_eq!(game.selection, Selection::None, "もう一度クリックで解除");
}

#[test]
fn waste_click_ignored_while_pile_selected() {
    let mut game = Solitaire::with_seed(2);
    game.stock_clicked();
    game.selection = Selection::Pile(0);
    handle_waste_click(&mut game);
    assert_eq!(game.selection, Selection::Pile(0));
}

// --- 組札クリック ---

#[test]
fn waste_ace_goes_to_empty_foundation() {
    let mut game = Solitaire::with_seed(3);
    arrange(
        &mut game,
        &[
            (StackType::Waste, Suit::Heart, Rank::Nine, true),
            (StackType::Waste, Suit::Spade, Rank::Ace, true),
        ],
    );
    handle_waste_click(&mut game);
    handle_foundation_click(&mut game, 0).expect("範囲内");

    assert_eq!(labels(&game, StackType::Foundation(0)), vec!["A♠"]);
    assert_eq!(labels(&game, StackType::Waste), vec!["9♥"]);
    assert_eq!(game.selection, Selection::None);
    assert_partition(&game);
}

#[test]
fn rejected_foundation_move_keeps_selection() {
    let mut game = Solitaire::with_seed(4);
    arrange(&mut game, &[(StackType::Waste, Suit::Spade, Rank::Two, true)]);
    handle_waste_click(&mut game);

    // 空の組札に 2 は置けない (空の組札を覗いてもパニックしない)
    handle_foundation_click(&mut game, 1).expect("範囲内");
    assert_eq!(labels(&game, StackType::Waste), vec!["2♠"]);
    assert!(game.foundations[1].is_empty());
    assert_eq!(game.selection, Selection::Waste, "選択はそのまま残る");
}

#[test]
fn foundation_builds_same_suit_upward() {
    let mut game = Solitaire::with_seed(5);
    arrange(
        &mut game,
        &[
            (StackType::Foundation(2), Suit::Diamond, Rank::Ace, true),
            (StackType::Waste, Suit::Diamond, Rank::Two, true),
        ],
    );
    handle_waste_click(&mut game);
    handle_foundation_click(&mut game, 2).expect("範囲内");
    assert_eq!(labels(&game, StackType::Foundation(2)), vec!["A♦", "2♦"]);
}

#[test]
fn selected_pile_top_goes_to_foundation() {
    let mut game = Solitaire::with_seed(6);
    arrange(
        &mut game,
        &[
            (T3, Suit::Club, Rank::Two, false),
            (T3, Suit::Heart, Rank::Ace, true),
        ],
    );
    handle_pile_click(&mut game, 3).expect("範囲内");
    assert_eq!(game.selection, Selection::Pile(3));

    handle_foundation_click(&mut game, 0).expect("範囲内");
    assert_eq!(labels(&game, StackType::Foundation(0)), vec!["A♥"]);
    assert_eq!(game.piles[3].len(), 1);
    assert!(!game.world.is_face_up(game.piles[3].peek().expect("1枚残る")), "残ったカードは裏のまま");
    assert_eq!(game.selection, Selection::None);
}

#[test]
fn foundation_click_without_selection_is_noop() {
    let mut game = Solitaire::with_seed(7);
    handle_foundation_click(&mut game, 0).expect("範囲内");
    assert!(game.foundations.iter().all(Stack::is_empty));
    assert!(matches!(handle_foundation_click(&mut game, 4), Err(GameError::InvalidFoundationIndex(4))));
}

// --- 場札クリック: 判定表 ---

#[test]
fn decide_move_run_when_other_pile_selected() {
    let mut game = Solitaire::with_seed(8);
    arrange(&mut game, &pile_three_with_run());
    game.selection = Selection::Pile(3);
    // 移動先が空でも、置けなくても、まず MoveRun
    assert_eq!(decide_pile_click(&game, 5).expect("範囲内"), PileClickAction::MoveRun { from: 3 });
}

#[test]
fn decide_unselect_on_same_pile() {
    let mut game = Solitaire::with_seed(9);
    arrange(&mut game, &pile_three_with_run());
    game.selection = Selection::Pile(3);
    assert_eq!(decide_pile_click(&game, 3).expect("範囲内"), PileClickAction::Unselect);
}

#[test]
fn decide_waste_move_before_select() {
    let mut game = Solitaire::with_seed(10);
    let mut layout = pile_three_with_run();
    layout.push((StackType::Waste, Suit::Heart, Rank::Five, true));
    layout.push((StackType::Waste, Suit::Diamond, Rank::Four, true));
    arrange(&mut game, &layout);
    game.selection = Selection::Waste;

    // 4♦ は 6♠ の上に置けない -> 場札3の選択に切り替わる
    assert_eq!(decide_pile_click(&game, 3).expect("範囲内"), PileClickAction::Select);

    game.waste.pop();
    // 5♥ は 6♠ の上に置ける
    assert_eq!(decide_pile_click(&game, 3).expect("範囲内"), PileClickAction::MoveWasteCard);
}

#[test]
fn decide_select_reveal_ignore() {
    let mut game = Solitaire::with_seed(11);
    arrange(
        &mut game,
        &[
            (T3, Suit::Heart, Rank::Seven, true),
            (T5, Suit::Club, Rank::Eight, false),
        ],
    );
    assert_eq!(decide_pile_click(&game, 3).expect("範囲内"), PileClickAction::Select);
    assert_eq!(decide_pile_click(&game, 5).expect("範囲内"), PileClickAction::Reveal);
    assert_eq!(decide_pile_click(&game, 0).expect("範囲内"), PileClickAction::Ignore);
}

// --- 場札クリック: 実行 ---

#[test]
fn run_moves_onto_accepting_pile() {
    let mut game = Solitaire::with_seed(12);
    let mut layout = pile_three_with_run();
    layout.push((T5, Suit::Club, Rank::Eight, true));
    arrange(&mut game, &layout);

    handle_pile_click(&mut game, 3).expect("範囲内");
    handle_pile_click(&mut game, 5).expect("範囲内");

    assert_eq!(labels(&game, T5), vec!["8♣", "7♥", "6♠"]);
    assert_eq!(labels(&game, T3), vec!["2♣"]);
    assert!(!game.world.is_face_up(game.piles[3].peek().expect("1枚残る")), "めくるのは次のクリックで");
    assert_eq!(game.selection, Selection::None);
    assert_partition(&game);

    // 裏向きの一番上をクリックするとめくれる
    handle_pile_click(&mut game, 3).expect("範囲内");
    assert!(game.world.is_face_up(game.piles[3].peek().expect("1枚残る")));
    assert_eq!(game.selection, Selection::None, "めくるだけで選ばない");
}

#[test]
fn rejected_run_is_restored() {
    let mut game = Solitaire::with_seed(13);
    let mut layout = pile_three_with_run();
    layout.push((T5, Suit::Diamond, Rank::Eight, true)); // 7♥ と同じ赤
    arrange(&mut game, &layout);

    handle_pile_click(&mut game, 3).expect("範囲内");
    handle_pile_click(&mut game, 5).expect("範囲内");

    assert_eq!(labels(&game, T3), vec!["2♣", "7♥", "6♠"]);
    assert_eq!(labels(&game, T5), vec!["8♦"]);
    assert_eq!(game.selection, Selection::None);
    assert_partition(&game);
}

#[test]
fn target_is_revealed_before_the_move_check() {
    let mut game = Solitaire::with_seed(14);
    let mut layout = pile_three_with_run();
    layout.push((T5, Suit::Club, Rank::Eight, false));
    arrange(&mut game, &layout);

    handle_pile_click(&mut game, 3).expect("範囲内");
    handle_pile_click(&mut game, 5).expect("範囲内");

    // 先にめくるので、めくった後の 8♣ に対して判定される
    let target_top = game.piles[5].peek().expect("1枚ある");
    assert!(game.world.is_face_up(target_top));
    assert_eq!(labels(&game, T5), vec!["8♣", "7♥", "6♠"]);
}

#[test]
fn reveal_happens_before_a_rejected_move() {
    let mut game = Solitaire::with_seed(15);
    let mut layout = pile_three_with_run();
    layout.push((T5, Suit::Club, Rank::Ten, false));
    arrange(&mut game, &layout);

    handle_pile_click(&mut game, 3).expect("範囲内");
    handle_pile_click(&mut game, 5).expect("範囲内");

    assert!(game.world.is_face_up(game.piles[5].peek().expect("1枚ある")), "拒否されてもめくれる");
    assert_eq!(labels(&game, T3), vec!["2♣", "7♥", "6♠"]);
    assert_eq!(labels(&game, T5), vec!["10♣"]);
}

#[test]
fn king_run_moves_to_empty_pile() {
    let mut game = Solitaire::with_seed(16);
    arrange(
        &mut game,
        &[
            (T3, Suit::Club, Rank::Two, false),
            (T3, Suit::Spade, Rank::King, true),
            (T3, Suit::Heart, Rank::Queen, true),
        ],
    );
    handle_pile_click(&mut game, 3).expect("範囲内");
    handle_pile_click(&mut game, 0).expect("範囲内");
    assert_eq!(labels(&game, StackType::Tableau(0)), vec!["K♠", "Q♥"]);
    assert_eq!(labels(&game, T3), vec!["2♣"]);
}

#[test]
fn clicking_selected_pile_again_unselects() {
    let mut game = Solitaire::with_seed(17);
    arrange(&mut game, &pile_three_with_run());
    handle_pile_click(&mut game, 3).expect("範囲内");
    assert_eq!(game.selection, Selection::Pile(3));
    handle_pile_click(&mut game, 3).expect("範囲内");
    assert_eq!(game.selection, Selection::None);
    assert_eq!(labels(&game, T3), vec!["2♣", "7♥", "6♠"]);
}

#[test]
fn waste_card_moves_to_pile_and_clears_selection() {
    let mut game = Solitaire::with_seed(18);
    let mut layout = pile_three_with_run();
    layout.push((StackType::Waste, Suit::Diamond, Rank::Five, true));
    arrange(&mut game, &layout);

    handle_waste_click(&mut game);
    handle_pile_click(&mut game, 3).expect("範囲内");

    assert_eq!(labels(&game, T3), vec!["2♣", "7♥", "6♠", "5♦"]);
    assert!(game.waste.is_empty());
    assert_eq!(game.selection, Selection::None);
}

#[test]
fn waste_king_moves_to_empty_pile() {
    let mut game = Solitaire::with_seed(19);
    arrange(&mut game, &[(StackType::Waste, Suit::Club, Rank::King, true)]);
    handle_waste_click(&mut game);
    handle_pile_click(&mut game, 6).expect("範囲内");
    assert_eq!(labels(&game, StackType::Tableau(6)), vec!["K♣"]);
    assert_eq!(game.selection, Selection::None);
}

#[test]
fn rejected_waste_move_onto_empty_pile_keeps_selection() {
    let mut game = Solitaire::with_seed(20);
    arrange(&mut game, &[(StackType::Waste, Suit::Club, Rank::Queen, true)]);
    handle_waste_click(&mut game);
    handle_pile_click(&mut game, 6).expect("範囲内");
    assert!(game.piles[6].is_empty());
    assert_eq!(game.selection, Selection::Waste);
}

#[test]
fn invalid_pile_index_is_an_error() {
    let mut game = Solitaire::with_seed(21);
    assert!(matches!(handle_pile_click(&mut game, 7), Err(GameError::InvalidPileIndex(7))));
    // 判定だけでも範囲外はエラー (パニックしない)
    assert!(matches!(decide_pile_click(&game, 7), Err(GameError::InvalidPileIndex(7))));
    assert!(matches!(decide_pile_click(&game, usize::MAX), Err(GameError::InvalidPileIndex(usize::MAX))));
}

#[test]
fn waste_selected_click_on_face_down_pile_reveals_and_keeps_selection() {
    let mut game = Solitaire::with_seed(26);
    arrange(
        &mut game,
        &[
            (T5, Suit::Club, Rank::Eight, false),
            (StackType::Waste, Suit::Heart, Rank::Seven, true),
        ],
    );
    handle_waste_click(&mut game);
    assert_eq!(decide_pile_click(&game, 5).expect("範囲内"), PileClickAction::Reveal);

    handle_pile_click(&mut game, 5).expect("範囲内");

    // めくるだけ。7♥ は捨て札に残って、選択もそのまま
    assert!(game.world.is_face_up(game.piles[5].peek().expect("1枚ある")));
    assert_eq!(labels(&game, T5), vec!["8♣"]);
    assert_eq!(labels(&game, StackType::Waste), vec!["7♥"]);
    assert_eq!(game.selection, Selection::Waste);
    assert_partition(&game);
}

// --- シナリオ ---

#[test]
fn full_stock_cycle() {
    let mut game = Solitaire::with_seed(22);
    game.stock_clicked();
    assert_eq!(game.waste_len(), 3);
    assert_eq!(game.stock_len(), 21);
    assert!(game.waste.entities().iter().all(|&e| game.world.is_face_up(e)));

    for _ in 0..7 {
        game.stock_clicked();
    }
    assert_eq!(game.stock_len(), 0);
    assert_eq!(game.waste_len(), 24);
    assert!(game.waste.entities().iter().all(|&e| game.world.is_face_up(e)));
    let acquired = game.waste.entities().to_vec();

    game.stock_clicked();
    assert_eq!(game.stock_len(), 24);
    assert_eq!(game.waste_len(), 0);
    assert!(game.stock.entities().iter().all(|&e| !game.world.is_face_up(e)));
    let reversed: Vec<_> = acquired.into_iter().rev().collect();
    assert_eq!(game.stock.entities(), reversed.as_slice());
    assert_partition(&game);
}

#[test]
fn last_card_to_foundation_wins() {
    let mut game = Solitaire::with_seed(23);
    let mut layout = Vec::new();
    for (i, &suit) in ALL_SUITS.iter().enumerate() {
        for &rank in ALL_RANKS.iter() {
            if suit == Suit::Spade && rank == Rank::King {
                continue;
            }
            layout.push((StackType::Foundation(i), suit, rank, true));
        }
    }
    layout.push((StackType::Waste, Suit::Spade, Rank::King, true));
    arrange(&mut game, &layout);
    assert_eq!(game.status(), GameStatus::Playing);

    handle_waste_click(&mut game);
    handle_foundation_click(&mut game, 3).expect("範囲内");

    assert_eq!(game.status(), GameStatus::Won);
    assert!(game.is_won());
    assert_partition(&game);
}

#[test]
fn random_play_never_loses_or_duplicates_cards() {
    for seed in 0..8u64 {
        let mut game = Solitaire::with_seed(seed);
        let mut rng = StdRng::seed_from_u64(seed + 1000);
        for _ in 0..1500 {
            let action = match rng.gen_range(0..13) {
                0 => PlayerAction::Stock,
                1 => PlayerAction::Waste,
                n @ 2..=5 => PlayerAction::Foundation(n - 2),
                n => PlayerAction::Tableau(n - 6),
            };
            game.apply(action).expect("範囲内のアクションは失敗しない");
            assert_partition(&game);
        }
    }
}

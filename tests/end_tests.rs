//! End-of-game condition tests.
//!
//! Each condition on its own, then the priority between them.

use rust_acquire::rules::is_game_over;
use rust_acquire::{Board, Chain, ChainMap, GameOverReason, GameState, Player, Position, Square};

fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

/// The first `count` positions in row-major order, all owned by `chain`.
fn chain_block(chain: Chain, skip: usize, count: usize) -> Vec<(Position, Square)> {
    Position::all()
        .skip(skip)
        .take(count)
        .map(|p| (p, Square::Chain(chain)))
        .collect()
}

fn state(board: Vec<(Position, Square)>, tiles: Vec<Position>) -> GameState {
    let players = vec![
        Player::new("a", 0, ChainMap::default(), tiles),
        Player::with_cash("b", 0),
        Player::with_cash("c", 0),
    ];
    GameState::from_parts(players, Board::from_squares(board).unwrap()).unwrap()
}

/// Test that an ordinary position is not over.
#[test]
fn test_fresh_game_continues() {
    let game = GameState::new(["a", "b", "c"]).unwrap();
    assert_eq!(is_game_over(&game, true), None);
}

/// Test that the game ends once every chain in play is safe.
#[test]
fn test_all_chains_safe() {
    let mut board = chain_block(Chain::Tower, 0, 12);
    board.extend(chain_block(Chain::Imperial, 24, 12));
    let game = state(board, vec![pos("1I")]);
    assert_eq!(is_game_over(&game, false), Some(GameOverReason::AllChainsSafe));
}

/// Test that an empty board does not count as "all chains safe".
#[test]
fn test_no_chains_is_not_all_safe() {
    let game = state(Vec::new(), vec![pos("1I")]);
    assert_eq!(is_game_over(&game, true), None);
}

/// Test that a chain of 40 tiles ends the game.
#[test]
fn test_chain_too_big() {
    let mut board = chain_block(Chain::Tower, 0, 40);
    board.extend(chain_block(Chain::Sackson, 60, 2));
    let game = state(board, vec![pos("1I")]);
    assert_eq!(is_game_over(&game, false), Some(GameOverReason::ChainTooBig));

    let mut board = chain_block(Chain::Tower, 0, 39);
    board.extend(chain_block(Chain::Sackson, 60, 2));
    let smaller = state(board, vec![pos("1I")]);
    assert_eq!(is_game_over(&smaller, false), None);
}

/// Test that "all safe" wins over "too big" when both hold.
#[test]
fn test_all_safe_has_priority() {
    let game = state(chain_block(Chain::Tower, 0, 41), vec![pos("1I")]);
    assert_eq!(is_game_over(&game, true), Some(GameOverReason::AllChainsSafe));
}

/// Test that a hand of dead tiles ends the game, but only at turn start.
#[test]
fn test_no_playable_tile() {
    // 1B sits between two safe chains; Sackson keeps "all safe" from firing.
    let mut board = chain_block(Chain::Tower, 0, 12);
    board.extend(chain_block(Chain::Continental, 24, 12));
    board.extend(chain_block(Chain::Sackson, 48, 2));
    let game = state(board, vec![pos("1B")]);

    assert_eq!(is_game_over(&game, true), Some(GameOverReason::NoPlayableTile));
    assert_eq!(is_game_over(&game, false), None);
}

/// Test that an empty hand counts as having no playable tile.
#[test]
fn test_empty_hand() {
    let game = state(Vec::new(), Vec::new());
    assert_eq!(is_game_over(&game, true), Some(GameOverReason::NoPlayableTile));
}

/// Test that an empty deck ends the game.
#[test]
fn test_deck_empty() {
    let game = state(Vec::new(), Position::all().collect());
    assert!(game.deck().is_empty());
    assert_eq!(is_game_over(&game, true), Some(GameOverReason::DeckEmpty));
}

/// Test that the game ends when every player has been removed.
#[test]
fn test_no_players() {
    let mut game = GameState::new(["a", "b", "c"]).unwrap();
    for name in ["b", "a", "c"] {
        assert_eq!(is_game_over(&game, false), None);
        game.remove_player(name).unwrap();
    }
    assert_eq!(is_game_over(&game, true), Some(GameOverReason::NoPlayers));
    assert_eq!(game.deck().len(), 108);
}

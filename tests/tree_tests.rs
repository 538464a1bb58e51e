//! Game tree integration tests.
//!
//! Option counts at each level of a turn, lazy enumeration, and applying
//! enumerated moves.

use rust_acquire::contracts::{AllInvariants, InvariantSet};
use rust_acquire::{
    Board, Chain, ChainMap, GameRng, GameState, GameTree, Player, Position, Purchase, Sellbacks, Square,
    TileMove,
};

fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

fn holding(chain: Chain, count: u32) -> ChainMap<u32> {
    let mut map = ChainMap::default();
    map[chain] = count;
    map
}

fn start() -> GameTree {
    GameTree::new(GameState::new(["a", "b", "c"]).unwrap())
}

/// Six players; 5A would join American, Sackson and Worldwide (two tiles each).
fn three_way_merge() -> GameTree {
    let board = Board::from_squares(
        [
            ("4A", Chain::American),
            ("3A", Chain::American),
            ("6A", Chain::Sackson),
            ("7A", Chain::Sackson),
            ("5B", Chain::Worldwide),
            ("5C", Chain::Worldwide),
        ]
        .map(|(t, c)| (pos(t), Square::Chain(c))),
    )
    .unwrap();
    let players = vec![
        Player::new("joe", 6000, holding(Chain::American, 5), [pos("5A")]),
        Player::new("obama", 6000, holding(Chain::Sackson, 4), []),
        Player::new("kerry", 6000, holding(Chain::Worldwide, 4), []),
        Player::new("romney", 6000, holding(Chain::Worldwide, 4), []),
        Player::new("ryan", 6000, holding(Chain::Worldwide, 4), []),
        Player::new("menino", 6000, holding(Chain::Worldwide, 4), []),
    ];
    GameTree::new(GameState::from_parts(players, board).unwrap())
}

/// Test that the opening hand yields six tile moves, all legal.
#[test]
fn test_tile_moves() {
    let tree = start();
    let moves = tree.tile_moves();
    assert_eq!(moves.len(), 6);
    assert!(moves.iter().all(|m| tree.state().is_valid_move(m.tile, m.chain)));
}

/// Test that nothing can be bought before any chain exists.
#[test]
fn test_share_purchase_options_at_start() {
    let tree = start();
    let first = tree.tile_moves()[0];
    let purchases = tree.share_purchase_options(first, &Sellbacks::none()).unwrap();
    assert_eq!(purchases, vec![Purchase::none()]);
}

/// Test the size of the opening move space: 6 tiles × 1 purchase × 90 next tiles.
#[test]
fn test_playable_moves_at_start() {
    assert_eq!(start().moves().iter().count(), 6 * 90);
}

/// Test that every player chooses independently among all acquiree subsets.
#[test]
fn test_sellbacks_for_merge() {
    let tree = three_way_merge();
    let options = tree.sellback_options(TileMove::with_chain(pos("5A"), Chain::American));
    assert_eq!(options.count(), 4usize.pow(6));
}

/// Test that a non-merge has exactly one, empty, sell-back assignment.
#[test]
fn test_sellbacks_no_merge() {
    let players = vec![Player::new("joe", 6000, holding(Chain::American, 5), [pos("5A")])];
    let tree = GameTree::new(GameState::from_parts(players, Board::new()).unwrap());
    let options: Vec<_> = tree.sellback_options(TileMove::plain(pos("5A"))).collect();
    assert_eq!(options, vec![Sellbacks::none()]);
}

/// Test that a merge with more players than a `usize` count can hold still
/// walks lazily.
#[test]
fn test_sellbacks_for_crowded_table() {
    let base = three_way_merge();
    let mut players: Vec<Player> = base.state().players().cloned().collect();
    players.extend((0..34).map(|i| Player::new(format!("extra{i}"), 6000, ChainMap::default(), [])));
    let tree = GameTree::new(GameState::from_parts(players, base.state().board().clone()).unwrap());

    let mut options = tree.sellback_options(TileMove::with_chain(pos("5A"), Chain::American));
    assert_eq!(options.total(), None);
    assert!(options.next().unwrap().is_empty());
    assert_eq!(options.next().unwrap().for_player("joe"), &[Chain::Sackson]);
    assert_eq!(options.take(100).count(), 100);
}

/// Test that filters make a huge move space cheap to walk.
#[test]
fn test_filtered_merge_moves() {
    let tree = three_way_merge();
    let next = pos("12I");
    let moves: Vec<_> = tree
        .moves()
        .filter_tiles(|m| m.chain == Some(Chain::American))
        .filter_sellbacks(Sellbacks::is_empty)
        .filter_next_tiles(|t| *t == next)
        .iter()
        .collect();

    // American grows to 7 tiles at 700 a share: none, one or two.
    let purchases: Vec<_> = moves.iter().map(|m| m.purchase.clone()).collect();
    assert_eq!(
        purchases,
        vec![Purchase::none(), Purchase::single(Chain::American), Purchase::double(Chain::American)]
    );
}

/// Test that enumeration yields results before the whole space is built.
#[test]
fn test_enumeration_is_lazy() {
    let tree = three_way_merge();
    let first: Vec<_> = tree.moves().iter().take(3).collect();
    assert_eq!(first.len(), 3);
    assert_eq!(first[0].tile, TileMove::with_chain(pos("5A"), Chain::American));
    assert!(first[0].sellbacks.is_empty());
}

/// Test that applying the first move twice places two tiles.
#[test]
fn test_apply() {
    let tree = start();
    let mv = tree.moves().iter().next().unwrap();
    let tree2 = tree.apply_move(&mv).unwrap();
    assert_eq!(tree2.state().board().placed_count(), 1);

    let mv = tree2.moves().iter().next().unwrap();
    let tree3 = tree2.apply(mv.tile, &mv.sellbacks, &mv.purchase, mv.next_tile).unwrap();
    assert_eq!(tree3.state().board().placed_count(), 2);
    assert_eq!(tree3.state().current_player().unwrap().name(), "c");
}

/// Test that applying a merge with sell-backs keeps every invariant.
#[test]
fn test_successors_keep_invariants() {
    let tree = three_way_merge();
    let moves = tree
        .moves()
        .filter_tiles(|m| m.chain == Some(Chain::Worldwide))
        .filter_purchases(Purchase::is_empty)
        .filter_next_tiles(|t| t.row() == 'I');

    let mut seen = 0;
    for next in moves.successors().take(200) {
        let next = next.unwrap();
        assert!(AllInvariants::check_all(next.state()).is_ok());
        assert_eq!(next.state().board().chain_size(Chain::Worldwide), 7);
        seen += 1;
    }
    assert_eq!(seen, 200);
}

/// Test that a sell-back is paid at the pre-merge price.
#[test]
fn test_apply_sellback_pricing() {
    let tree = three_way_merge();
    let merge = TileMove::with_chain(pos("5A"), Chain::American);
    let mut sellbacks = Sellbacks::none();
    sellbacks.insert("obama", [Chain::Sackson].into_iter().collect());

    let next = tree.apply(merge, &sellbacks, &Purchase::none(), pos("12I")).unwrap();
    let obama = next.state().player("obama").unwrap();
    // Sackson at 2 tiles: 200 a share, plus 2000 + 1000 as sole holder.
    assert_eq!(obama.cash(), 6000 + 4 * 200 + 3000);
    assert_eq!(obama.shares(Chain::Sackson), 0);
}

/// Test that random next tiles come from the deck and follow the seed.
#[test]
fn test_random_next_tile() {
    let tree = start();
    let draw = |seed| tree.random_next_tile(&mut GameRng::new(seed)).unwrap();
    assert_eq!(draw(9), draw(9));
    assert!(tree.state().deck().contains(&draw(9)));
}

//! Board integration tests.
//!
//! Placement classification and the effect of each placement kind.

use rust_acquire::{Board, BoardSnapshot, Chain, MoveKind, Position, Square};

fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

fn board(layout: &[(Square, &str)]) -> Board {
    Board::from_squares(
        layout.iter()
            .flat_map(|(square, tiles)| tiles.split_whitespace().map(move |t| (pos(t), *square))),
    )
    .unwrap()
}

/// Apply whatever `query` says to a copy of `board`, choosing the first
/// available chain when one is needed.
fn place(board: &Board, tile: Position) -> Option<Board> {
    let mut next = board.clone();
    match board.query(tile) {
        MoveKind::Invalid => return None,
        MoveKind::Singleton => next.place_singleton(tile).unwrap(),
        MoveKind::Grow => next.grow(tile).unwrap(),
        MoveKind::Found => next.found(tile, board.chains_not_in_play()[0]).unwrap(),
        MoveKind::Merge => next.merge(tile, board.acquirers(tile)[0]).unwrap(),
    }
    Some(next)
}

/// Test that every legal placement occupies the square and is never legal again.
#[test]
fn test_placement_is_final() {
    let b = board(&[
        (Square::Chain(Chain::Worldwide), "1A 2A 3A"),
        (Square::Chain(Chain::Sackson), "1C 2C 3C"),
        (Square::Unclaimed, "9E"),
    ]);
    for tile in Position::all() {
        if let Some(next) = place(&b, tile) {
            assert!(!next.is_free(tile), "{tile} still free");
            assert_eq!(next.query(tile), MoveKind::Invalid);
        }
    }
}

/// Test that a founded chain has one tile plus each adjacent unclaimed tile.
#[test]
fn test_found_size() {
    let b = board(&[(Square::Unclaimed, "5D 4E 6E")]);
    // 5D's neighbours are all empty, so founding at 5E is allowed.
    assert_eq!(b.query(pos("5E")), MoveKind::Found);
    let adjacent = b.adjacent_unclaimed(pos("5E")).len();

    let mut next = b.clone();
    next.found(pos("5E"), Chain::Festival).unwrap();
    assert_eq!(next.chain_size(Chain::Festival), 1 + adjacent);
    assert_eq!(next.chain_size(Chain::Festival), 4);
    assert!(next.unclaimed_positions().is_empty());
}

/// Test that a merge leaves only the acquirer on the joined tiles.
#[test]
fn test_merge_absorbs_every_adjacent_chain() {
    let mut b = board(&[
        (Square::Chain(Chain::Tower), "4A 4B 4C"),
        (Square::Chain(Chain::Festival), "6C 7C"),
        (Square::Chain(Chain::American), "5D 5E"),
        (Square::Chain(Chain::Sackson), "9I 10I"),
    ]);
    assert_eq!(b.query(pos("5C")), MoveKind::Merge);
    assert_eq!(b.acquirers(pos("5C")).as_slice(), &[Chain::Tower]);
    assert_eq!(
        b.acquirees(pos("5C"), Chain::Tower).as_slice(),
        &[Chain::American, Chain::Festival]
    );

    b.merge(pos("5C"), Chain::Tower).unwrap();
    assert_eq!(b.chain_size(Chain::Tower), 8);
    assert_eq!(b.chain_size(Chain::American), 0);
    assert_eq!(b.chain_size(Chain::Festival), 0);
    assert_eq!(b.chains_in_play(), vec![Chain::Sackson, Chain::Tower]);
}

/// Test the derived chain facts: sizes, ordering, prices and safety.
#[test]
fn test_chain_queries() {
    let b = board(&[
        (Square::Chain(Chain::Continental), "1A 2A 3A 4A 5A 6A 7A 8A 9A 10A 11A"),
        (Square::Chain(Chain::Worldwide), "1C 2C"),
        (Square::Chain(Chain::Imperial), "1E 2E 3E 4E 5E"),
    ]);
    assert_eq!(
        b.chains_by_size_desc(),
        vec![(Chain::Continental, 11), (Chain::Imperial, 5), (Chain::Worldwide, 2)]
    );
    assert_eq!(b.stock_price(Chain::Continental), Some(900));
    assert_eq!(b.stock_price(Chain::Imperial), Some(600));
    assert_eq!(b.stock_price(Chain::Worldwide), Some(200));
    assert_eq!(b.stock_price(Chain::Tower), None);
    assert!(!b.is_safe(Chain::Continental));

    let mut bigger = b.clone();
    bigger.grow(pos("12A")).unwrap();
    assert!(bigger.is_safe(Chain::Continental));
}

/// Test that a board survives a JSON round trip through its snapshot.
#[test]
fn test_snapshot_json() {
    let b = board(&[
        (Square::Chain(Chain::Worldwide), "1A 2A 3A"),
        (Square::Unclaimed, "9E 12I"),
    ]);
    let json = serde_json::to_string(&b.snapshot()).unwrap();
    assert!(json.contains("\"12I\""));

    let snapshot: BoardSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot.unclaimed, vec![pos("9E"), pos("12I")]);
    assert_eq!(Board::from_snapshot(&snapshot).unwrap(), b);
}

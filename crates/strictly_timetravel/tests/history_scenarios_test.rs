//! Scenario tests for the history log.

use strictly_timetravel::{GameHistory, GameStatus, Line, Player, Position, Square, evaluate};

fn positions(indices: &[usize]) -> Vec<Position> {
    indices
        .iter()
        .map(|i| Position::from_index(*i).expect("board index"))
        .collect()
}

#[test]
fn test_first_move_from_empty_board() {
    let history = GameHistory::new().apply_move(Position::TopLeft);

    assert_eq!(history.current_index(), 1);
    assert_eq!(
        history.snapshots()[1].board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
    assert_eq!(history.status(), GameStatus::InProgress { next: Player::O });
}

#[test]
fn test_diagonal_win() {
    let history = GameHistory::replay(&positions(&[0, 1, 4, 2, 8]));
    let last = history.snapshots().last().expect("non-empty log");

    match evaluate(last.board()) {
        GameStatus::Won { winner, line } => {
            assert_eq!(winner, Player::X);
            assert_eq!(line.indices(), [0, 4, 8]);
        }
        other => panic!("Expected X to win, got {:?}", other),
    }
}

#[test]
fn test_full_board_draw() {
    let history = GameHistory::replay(&positions(&[0, 1, 2, 4, 3, 5, 7, 6, 8]));

    assert_eq!(history.snapshots().len(), 10);
    assert_eq!(history.status(), GameStatus::Draw);
}

#[test]
fn test_branch_from_earlier_move() {
    let history = GameHistory::replay(&positions(&[0, 4, 8]));
    let abandoned = history.snapshots()[2].clone();

    let branched = history
        .jump_to(1)
        .expect("index in range")
        .apply_move(Position::MiddleRight);

    assert_eq!(branched.snapshots().len(), 3);
    assert_eq!(branched.current_index(), 2);
    assert_ne!(branched.snapshots()[2], abandoned);
    assert_eq!(
        branched.current().board().get(Position::MiddleRight),
        Square::Occupied(Player::O)
    );
}

#[test]
fn test_occupied_cell_at_any_pointer() {
    let history = GameHistory::replay(&positions(&[0, 4, 8]));

    for index in 1..history.snapshots().len() {
        let at = history.jump_to(index).expect("index in range");
        let after = at.apply_move(Position::TopLeft);
        assert_eq!(after.snapshots().len(), at.snapshots().len());
        assert_eq!(after.current_index(), at.current_index());
    }
}

#[test]
fn test_won_game_ignores_moves_but_allows_jumps() {
    let won = GameHistory::replay(&positions(&[0, 3, 1, 4, 2]));
    assert_eq!(won.status().line(), Some(Line::ALL[0]));

    assert_eq!(won.apply_move(Position::BottomRight), won);

    let back = won.jump_to(3).expect("index in range");
    assert_eq!(back.to_move(), Player::O);
    let resumed = back.apply_move(Position::BottomRight);
    assert_eq!(resumed.snapshots().len(), 5);
    assert!(!resumed.status().is_over());
}

#[test]
fn test_jump_to_last_index_is_allowed() {
    let history = GameHistory::replay(&positions(&[0, 4]));
    let at_start = history.jump_to(0).expect("index in range");

    let back = at_start.jump_to(history.last_index()).expect("index in range");
    assert_eq!(back, history);
}

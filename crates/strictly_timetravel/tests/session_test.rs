//! Tests for the session command/query surface.

use strictly_timetravel::{
    EngineError, GameSession, GameStatus, MoveOrder, MoveRejection, Player, Position, SessionEvent,
};

#[test]
fn test_session_lifecycle() {
    let mut session = GameSession::new();
    assert_eq!(session.status_text(), "Next player: X");
    assert_eq!(session.entries().len(), 1);

    for cell in [0, 1, 4, 2] {
        let event = session.select_cell(cell).expect("valid cell");
        assert!(event.changed());
    }

    let event = session.select_cell(8).expect("valid cell");
    assert!(matches!(
        event,
        SessionEvent::MovePlayed {
            player: Player::X,
            position: Position::BottomRight,
            status: GameStatus::Won { .. },
        }
    ));
    assert_eq!(session.status_text(), "Winner: X");
    assert_eq!(session.winning_line().map(|line| line.indices()), Some([0, 4, 8]));

    assert_eq!(
        session.select_cell(5).expect("valid cell"),
        SessionEvent::MoveIgnored(MoveRejection::GameOver)
    );
    assert_eq!(session.history().snapshots().len(), 6);
}

#[test]
fn test_time_travel_through_session() {
    let mut session = GameSession::new();
    for cell in [0, 4, 8] {
        session.select_cell(cell).expect("valid cell");
    }

    assert_eq!(
        session.select_history_entry(1).expect("index in range"),
        SessionEvent::Jumped { index: 1 }
    );
    assert_eq!(session.to_move(), Player::O);
    assert_eq!(session.history().snapshots().len(), 4);

    session.select_cell(5).expect("valid cell");
    assert_eq!(session.history().snapshots().len(), 3);
    assert_eq!(session.current_index(), 2);
}

#[test]
fn test_entries_follow_order() {
    let mut session = GameSession::new();
    session.select_cell(4).expect("valid cell");
    session.select_cell(0).expect("valid cell");
    session.toggle_order();

    let labels: Vec<String> = session.entries().into_iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        vec![
            "You are at move #2".to_string(),
            "Go to move #1 (row: 2, col: 2)".to_string(),
            "Go to game start".to_string(),
        ]
    );
}

#[test]
fn test_invalid_indices_are_errors() {
    let mut session = GameSession::new();
    assert_eq!(session.select_cell(42), Err(EngineError::InvalidCell(42)));
    assert_eq!(
        session.select_history_entry(1),
        Err(EngineError::InvalidIndex { index: 1, len: 1 })
    );
}

#[test]
fn test_view_serializes_for_renderers() {
    let mut session = GameSession::with_order(MoveOrder::Descending);
    session.select_cell(4).expect("valid cell");

    let view = session.view();
    assert_eq!(view.current_index, 1);
    assert_eq!(view.to_move, Player::O);
    assert_eq!(view.status_text, "Next player: O");
    assert_eq!(view.winning_line, None);

    let json = serde_json::to_value(&view).expect("serializable view");
    assert_eq!(json["order"], "descending");
    assert_eq!(json["entries"][0]["label"], "You are at move #1");
    assert_eq!(json["cells"][4], serde_json::json!({ "Occupied": "X" }));

    let round_trip: strictly_timetravel::SessionView =
        serde_json::from_value(json).expect("deserializable view");
    assert_eq!(round_trip, view);
}

#[test]
fn test_saved_session_restores() {
    let mut session = GameSession::with_order(MoveOrder::Descending);
    for cell in [0, 4, 8] {
        session.select_cell(cell).expect("valid cell");
    }
    session.select_history_entry(1).expect("index in range");

    let json = serde_json::to_string(&session).expect("serializable session");
    let restored: GameSession = serde_json::from_str(&json).expect("valid session");
    assert_eq!(restored, session);
    assert_eq!(restored.status_text(), "Next player: O");
}

#[test]
fn test_session_with_pointer_past_end_is_rejected() {
    let mut json = serde_json::to_value(GameSession::new()).expect("serializable session");
    json["history"]["current"] = serde_json::json!(5);

    let err = serde_json::from_value::<GameSession>(json).expect_err("pointer out of range");
    assert!(err.to_string().contains("Current pointer is inside the history log"));
}

#[test]
fn test_session_without_snapshots_is_rejected() {
    let mut json = serde_json::to_value(GameSession::new()).expect("serializable session");
    json["history"]["snapshots"] = serde_json::json!([]);

    let err = serde_json::from_value::<GameSession>(json).expect_err("empty log");
    assert!(err.to_string().contains("History starts with the empty board"));
}

#[test]
fn test_session_with_forged_board_is_rejected() {
    let mut session = GameSession::new();
    session.select_cell(0).expect("valid cell");
    let mut json = serde_json::to_value(&session).expect("serializable session");
    // O's mark where X moved first
    json["history"]["snapshots"][1]["board"]["squares"][0] = serde_json::json!({ "Occupied": "O" });

    let err = serde_json::from_value::<GameSession>(json).expect_err("forged mark");
    assert!(err.to_string().contains("Players alternate turns"));
}

//! Integration tests for the engine's external operation set.

use tictactoe_engine::{Game, GameStatus, MoveError, Player, Position, Square};

#[test]
fn test_fresh_game_reports_expected_queries() {
    let game = Game::new();
    assert!(game.has_empty_cells());
    assert!(!game.has_winner());
    assert!(!game.is_cpu_winner());
    assert!(!game.is_human_winner());
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_turn_alternation_enforced() {
    let mut game = Game::new();

    game.human_play(0, 0).expect("first human move");
    assert_eq!(
        game.human_play(0, 1),
        Err(MoveError::OutOfTurn(Player::Human))
    );

    game.cpu_play().expect("cpu reply");
    assert_eq!(game.cpu_play(), Err(MoveError::OutOfTurn(Player::Cpu)));

    // Back to the human, and the cycle repeats.
    game.human_play(2, 2).or_else(|_| game.human_play(2, 1)).expect("second human move");
    assert_eq!(
        game.human_play(1, 0),
        Err(MoveError::OutOfTurn(Player::Human))
    );
}

#[test]
fn test_restart_is_idempotent_from_any_state() {
    let mut game = Game::new();
    game.human_play(1, 1).unwrap();
    game.cpu_play().unwrap();
    game.human_play(0, 0).unwrap_or(());

    for _ in 0..3 {
        game.restart();
        assert!(game.has_empty_cells());
        assert!(!game.has_winner());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.to_move(), Player::Human);
        assert!(game.cells().iter().all(|c| c.value == Square::Empty));
    }
}

#[test]
fn test_occupied_cell_rejection_leaves_board_unchanged() {
    let mut game = Game::new();
    game.human_play(1, 1).unwrap();
    game.cpu_play().unwrap();

    let snapshot = game.cells();
    assert_eq!(
        game.human_play(1, 1),
        Err(MoveError::CellOccupied(Position::Center))
    );
    assert_eq!(game.cells(), snapshot);

    // Playing onto the Cpu's square is rejected the same way.
    let cpu_cell = snapshot
        .iter()
        .find(|c| c.value == Square::Occupied(Player::Cpu))
        .expect("cpu played");
    assert_eq!(
        game.human_play(cpu_cell.row, cpu_cell.column),
        Err(MoveError::CellOccupied(
            Position::from_coordinates(cpu_cell.row, cpu_cell.column).unwrap()
        ))
    );
    assert_eq!(game.cells(), snapshot);
}

#[test]
fn test_out_of_range_coordinates_rejected() {
    let mut game = Game::new();
    for (row, column) in [(3, 0), (0, 3), (3, 3), (255, 1)] {
        assert_eq!(
            game.human_play(row, column),
            Err(MoveError::InvalidMove { row, column })
        );
    }
    assert!(game.cells().iter().all(|c| c.value == Square::Empty));
}

#[test]
fn test_terminal_state_is_absorbing() {
    let mut game = Game::new();
    while !game.status().is_terminal() {
        let target = Position::ALL
            .into_iter()
            .find(|p| game.board().is_empty(*p))
            .unwrap();
        game.human_play(target.row(), target.column()).unwrap();
        if !game.status().is_terminal() {
            game.cpu_play().unwrap();
        }
    }

    let snapshot = game.cells();
    assert_eq!(game.human_play(0, 0), Err(MoveError::GameOver));
    assert_eq!(game.cpu_play(), Err(MoveError::GameOver));
    assert_eq!(game.cells(), snapshot);
}

#[test]
fn test_cells_snapshot_serializes_for_renderers() {
    let mut game = Game::new();
    game.human_play(0, 0).unwrap();

    let json = serde_json::to_value(game.cells()).unwrap();
    let cells = json.as_array().unwrap();
    assert_eq!(cells.len(), 9);
    assert_eq!(
        cells[0],
        serde_json::json!({ "row": 0, "column": 0, "value": { "Occupied": "Human" } })
    );
    assert_eq!(
        cells[1],
        serde_json::json!({ "row": 0, "column": 1, "value": "Empty" })
    );
}

#[test]
fn test_history_records_alternating_moves() {
    let mut game = Game::new();
    game.human_play(0, 0).unwrap();
    game.cpu_play().unwrap();
    game.human_play(2, 2).unwrap_or(());

    let history = game.history();
    assert!(history.len() >= 2);
    assert_eq!(history[0].player, Player::Human);
    assert_eq!(history[0].position, Position::TopLeft);
    assert_eq!(history[1].player, Player::Cpu);
}

#[test]
fn test_game_state_round_trips_through_serde() {
    let mut game = Game::new();
    game.human_play(1, 1).unwrap();
    game.cpu_play().unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.cells(), game.cells());
    assert_eq!(restored.to_move(), game.to_move());
    assert_eq!(restored.history(), game.history());
}

//! Draw detection logic.

use crate::types::Board;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::check_winner;
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::Human));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        for (pos, player) in [
            (Position::TopLeft, Player::Human),
            (Position::TopCenter, Player::Cpu),
            (Position::TopRight, Player::Human),
            (Position::MiddleLeft, Player::Cpu),
            (Position::Center, Player::Human),
            (Position::MiddleRight, Player::Human),
            (Position::BottomLeft, Player::Cpu),
            (Position::BottomCenter, Player::Human),
            (Position::BottomRight, Player::Cpu),
        ] {
            board.set(pos, Square::Occupied(player));
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Square::Occupied(Player::Human));
        }
        board.set(Position::MiddleLeft, Square::Occupied(Player::Cpu));
        board.set(Position::Center, Square::Occupied(Player::Cpu));
        assert!(!is_draw(&board));
    }
}

//! Outcome detection: win and draw rules.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{check_winner, has_win, LINES};

use crate::types::{Board, GameStatus};

/// Derives the game status from the board.
///
/// Status is a pure function of the board, recomputed on query, so
/// there is no cached terminal flag that could fall out of sync.
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};

    #[test]
    fn test_status_in_progress() {
        assert_eq!(status(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_status_won() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Square::Occupied(Player::Cpu));
        }
        assert_eq!(status(&board), GameStatus::Won(Player::Cpu));
    }

    #[test]
    fn test_status_draw() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        let marks = [
            (Position::TopLeft, Player::Human),
            (Position::TopCenter, Player::Cpu),
            (Position::TopRight, Player::Human),
            (Position::MiddleLeft, Player::Cpu),
            (Position::Center, Player::Human),
            (Position::MiddleRight, Player::Human),
            (Position::BottomLeft, Player::Cpu),
            (Position::BottomCenter, Player::Human),
            (Position::BottomRight, Player::Cpu),
        ];
        for (pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        assert_eq!(status(&board), GameStatus::Draw);
    }
}

//! Minimax move selection for the computer opponent.
//!
//! The search evaluates the full game tree: tic-tac-toe has at most
//! 9! leaf paths from an empty board, which runs synchronously well
//! inside a single move request, so there is no pruning, caching, or
//! depth limit.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

// Scores are from the Cpu's perspective.
const CPU_WIN: i8 = 1;
const HUMAN_WIN: i8 = -1;
const DRAW: i8 = 0;

/// Chooses the best move for the Cpu on the given board.
///
/// Every empty square is evaluated by full-depth minimax and the
/// highest-scoring candidate wins. Ties resolve to the first candidate
/// in row-major order ([`Position::ALL`]), so identical positions
/// always produce identical moves.
///
/// Returns `None` when the board has no empty square.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Option<Position> {
    let mut best: Option<(Position, i8)> = None;

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        let mut child = board.clone();
        child.set(pos, Square::Occupied(Player::Cpu));
        let score = minimax(&child, Player::Human);

        match best {
            // Strictly-greater keeps the earliest candidate on ties.
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((pos, score)),
        }
    }

    if let Some((pos, score)) = best {
        debug!(position = %pos, score, "search selected move");
    }
    best.map(|(pos, _)| pos)
}

/// Evaluates a position with `to_move` next to play.
///
/// Recursion works on a copy of the board per branch, so sibling
/// branches never see each other's marks.
fn minimax(board: &Board, to_move: Player) -> i8 {
    if let Some(winner) = rules::check_winner(board) {
        return match winner {
            Player::Cpu => CPU_WIN,
            Player::Human => HUMAN_WIN,
        };
    }
    if rules::is_full(board) {
        return DRAW;
    }

    let mut best = match to_move {
        Player::Cpu => i8::MIN,
        Player::Human => i8::MAX,
    };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        let mut child = board.clone();
        child.set(pos, Square::Occupied(to_move));
        let score = minimax(&child, to_move.opponent());

        best = match to_move {
            Player::Cpu => best.max(score),
            Player::Human => best.min(score),
        };
    }

    best
}

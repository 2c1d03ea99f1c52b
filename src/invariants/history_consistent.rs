//! History consistency invariant: the move log reproduces the board.

use super::Invariant;
use crate::game::Game;
use crate::types::{Board, Player, Square};
use tracing::warn;

/// Invariant: the recorded history matches the board exactly.
///
/// Every logged move must sit on the board, players must alternate
/// starting with Human, and the board must hold no mark the history
/// does not account for.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        // Replay the log onto a fresh board.
        let mut replayed = Board::new();
        let mut expected = Player::Human;
        for mov in history {
            if mov.player != expected || !replayed.is_empty(mov.position) {
                warn!(%mov, "history entry out of sequence");
                return false;
            }
            replayed.set(mov.position, Square::Occupied(mov.player));
            expected = expected.opponent();
        }

        let consistent = &replayed == game.board();
        if !consistent {
            warn!(
                history_len = history.len(),
                "history does not reproduce board"
            );
        }
        consistent
    }

    fn description() -> &'static str {
        "Replaying the move history must reproduce the board"
    }
}

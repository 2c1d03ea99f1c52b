//! Single winner invariant: at most one side holds a winning line.

use super::Invariant;
use crate::game::Game;
use crate::rules;
use crate::types::Player;
use tracing::warn;

/// Invariant: the two sides never both hold a winning line.
///
/// Move validation halts play as soon as a win appears, so a board
/// where both sides appear won signals a validation defect, not a
/// reachable game state.
pub struct SingleWinnerInvariant;

impl Invariant<Game> for SingleWinnerInvariant {
    fn holds(game: &Game) -> bool {
        let both = rules::has_win(game.board(), Player::Human)
            && rules::has_win(game.board(), Player::Cpu);

        if both {
            warn!("both sides hold a winning line");
        }
        !both
    }

    fn description() -> &'static str {
        "At most one side may hold a winning line"
    }
}

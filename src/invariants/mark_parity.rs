//! Mark parity invariant: Human moves first and turns alternate.

use super::Invariant;
use crate::game::Game;
use crate::types::Player;
use tracing::warn;

/// Invariant: Human marks minus Cpu marks is always 0 or 1, and the
/// stored turn matches that parity while the game is in progress.
///
/// Equal counts mean the Human is next; one extra Human mark means the
/// Cpu is next. Any other combination is unreachable through the
/// validated move path.
pub struct MarkParityInvariant;

impl Invariant<Game> for MarkParityInvariant {
    fn holds(game: &Game) -> bool {
        let human = game.board().count(Player::Human);
        let cpu = game.board().count(Player::Cpu);

        let parity_ok = human == cpu || human == cpu + 1;
        let turn_ok = game.status().is_terminal()
            || match game.to_move() {
                Player::Human => human == cpu,
                Player::Cpu => human == cpu + 1,
            };

        if !parity_ok || !turn_ok {
            warn!(human, cpu, to_move = ?game.to_move(), "mark parity violated");
        }
        parity_ok && turn_ok
    }

    fn description() -> &'static str {
        "Human marks minus Cpu marks must be 0 or 1, matching the side to move"
    }
}

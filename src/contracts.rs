//! Contract-based validation for move application.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. The
//! precondition is the move legality check of the engine; the
//! postcondition re-verifies the engine invariants after the mutation.

use crate::action::{Move, MoveError};
use crate::game::Game;
use crate::invariants::{EngineInvariants, InvariantSet};

/// A contract defines preconditions and postconditions for state
/// transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game must not already be over.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves once a terminal state is reached.
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.status().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves into occupied squares.
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.position) {
            Err(MoveError::CellOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the side not on turn.
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::OutOfTurn(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal if the game is still
/// running, the square is empty, and it is the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: game running, square empty, player's turn.
/// Postconditions: mark parity, single winner, history consistency.
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &Game, after: &Game) -> Result<(), MoveError> {
        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })
    }
}

//! First-class move types and the move error taxonomy.
//!
//! Moves are domain events, not side effects. They capture which side
//! played where, can be validated before application, and make the
//! engine's history replayable.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
///
/// All variants are recoverable: a failed call leaves the board exactly
/// as it was, and the caller decides what to surface to the user.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate fell outside the 0-2 range.
    #[display("Coordinate ({row}, {column}) is out of range")]
    InvalidMove {
        /// Requested row.
        row: u8,
        /// Requested column.
        column: u8,
    },

    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {:?}'s turn", _0)]
    OutOfTurn(Player),

    /// The computer was asked to move with no empty squares left.
    #[display("No empty squares left on the board")]
    BoardFull,

    /// An engine invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

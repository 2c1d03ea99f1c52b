//! The game engine facade.
//!
//! [`Game`] owns the board exclusively and exposes the full operation
//! set an external caller needs: issue a human move, ask the engine to
//! answer, query the outcome, restart. No caller ever reaches into the
//! board directly; `cells` hands out copies.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, GameNotOver, MoveContract};
use crate::position::Position;
use crate::search;
use crate::types::{Board, Cell, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe engine with an unbeatable computer opponent.
///
/// The Human side always moves first; callers alternate
/// [`Game::human_play`] and [`Game::cpu_play`] and query outcome state
/// between moves. Game status is derived from the board on every
/// query, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board, Human to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::Human,
            history: Vec::new(),
        }
    }

    /// Resets the engine to its initial condition.
    ///
    /// All squares become empty, the history is cleared, and the Human
    /// moves next. Always succeeds, regardless of prior state.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.to_move = Player::Human;
        self.history.clear();
    }

    /// Returns the 9 board squares as `(row, column, value)` snapshots
    /// in row-major order.
    ///
    /// The returned cells are copies; mutating them does not affect
    /// engine state.
    pub fn cells(&self) -> Vec<Cell> {
        Position::ALL
            .iter()
            .map(|pos| Cell {
                row: pos.row(),
                column: pos.column(),
                value: self.board.get(*pos),
            })
            .collect()
    }

    /// Plays a human mark at the given coordinate.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidMove`] if either coordinate is outside 0-2.
    /// - [`MoveError::GameOver`] if the game already ended.
    /// - [`MoveError::CellOccupied`] if the target square is taken.
    /// - [`MoveError::OutOfTurn`] if the Cpu is due to move.
    ///
    /// On any error the board is left unchanged.
    #[instrument(skip(self))]
    pub fn human_play(&mut self, row: u8, column: u8) -> Result<(), MoveError> {
        let position = Position::from_coordinates(row, column)
            .ok_or(MoveError::InvalidMove { row, column })?;
        self.apply(Move::new(Player::Human, position))
    }

    /// Selects and plays the Cpu's move via minimax search.
    ///
    /// Returns the square the engine chose. Identical positions always
    /// produce identical choices.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended.
    /// - [`MoveError::OutOfTurn`] if the Human is due to move.
    /// - [`MoveError::BoardFull`] if no empty square remains (normally
    ///   masked by `GameOver`, since a full board is terminal).
    #[instrument(skip(self))]
    pub fn cpu_play(&mut self) -> Result<Position, MoveError> {
        GameNotOver::check(self)?;
        if self.to_move != Player::Cpu {
            return Err(MoveError::OutOfTurn(Player::Cpu));
        }

        let position = search::best_move(&self.board).ok_or(MoveError::BoardFull)?;
        self.apply(Move::new(Player::Cpu, position))?;
        Ok(position)
    }

    /// Returns true iff at least one square is empty.
    pub fn has_empty_cells(&self) -> bool {
        !self.board.is_full()
    }

    /// Returns true iff either side holds a winning line.
    pub fn has_winner(&self) -> bool {
        crate::rules::check_winner(&self.board).is_some()
    }

    /// Returns true iff the Cpu holds a winning line.
    pub fn is_cpu_winner(&self) -> bool {
        crate::rules::has_win(&self.board, Player::Cpu)
    }

    /// Returns true iff the Human holds a winning line.
    ///
    /// Unreachable when the caller only plays through this engine, but
    /// kept so a search regression shows up as a detected outcome
    /// rather than silent misbehavior.
    pub fn is_human_winner(&self) -> bool {
        crate::rules::has_win(&self.board, Player::Human)
    }

    /// Returns the current game status, derived from the board.
    pub fn status(&self) -> GameStatus {
        crate::rules::status(&self.board)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Validates and applies a move, then re-checks engine invariants
    /// in debug builds.
    fn apply(&mut self, action: Move) -> Result<(), MoveError> {
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board
            .set(action.position, Square::Occupied(action.player));
        self.history.push(action);
        self.to_move = action.player.opponent();

        debug!(%action, status = ?self.status(), "move applied");

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

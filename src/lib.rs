//! Unbeatable tic-tac-toe engine.
//!
//! The engine owns all board state and decision logic behind a small
//! request/response API: a host UI issues human moves, asks the engine
//! to answer with a minimax-selected move, and queries outcome state
//! between turns. Rendering, event wiring, and presentation of marks
//! are the host's concern.
//!
//! # Architecture
//!
//! - **Types**: board, squares, players, derived game status
//! - **Rules**: win and draw detection over the 8 board lines
//! - **Search**: full-depth minimax move selection for the Cpu
//! - **Contracts**: pre/postconditions guarding move application
//! - **Invariants**: independently testable engine guarantees
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! game.human_play(1, 1)?;
//! let reply = game.cpu_play()?;
//! assert!(game.has_empty_cells());
//! assert_eq!(game.status(), GameStatus::InProgress);
//! println!("engine answered at {reply}");
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod invariants;
mod position;
mod rules;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use game::Game;
pub use invariants::{
    EngineInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MarkParityInvariant, SingleWinnerInvariant,
};
pub use position::Position;
pub use rules::{check_winner, has_win, is_full, status, LINES};
pub use search::best_move;
pub use types::{Board, Cell, GameStatus, Player, Square};

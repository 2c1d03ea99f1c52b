//! Interactive terminal front-end for the tic-tac-toe engine.
//!
//! Plays a game against the engine on stdin/stdout. The real consumer
//! of the engine is a host UI; this binary is the reference caller,
//! sequencing `human_play` / `cpu_play` and the outcome queries the
//! way any host is expected to.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use tictactoe_engine::{Game, GameStatus, Player};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play tic-tac-toe against an unbeatable opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_engine")]
#[command(about = "Play tic-tac-toe against an unbeatable opponent", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter directive (overridden by RUST_LOG when set)
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log)),
        )
        .init();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Game::new();

    println!("You are X. Enter moves as: row column (0-2), or 'restart', or 'quit'.");
    print_board(&game);

    loop {
        print!("> ");
        std::io::stdout().flush().context("flushing prompt")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading input")?;
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "q" => break,
            "restart" | "r" => {
                game.restart();
                println!("New game.");
                print_board(&game);
                continue;
            }
            _ => {}
        }

        let Some((row, column)) = parse_coordinates(input) else {
            println!("Could not parse '{input}'. Expected: row column (0-2).");
            continue;
        };

        if let Err(err) = game.human_play(row, column) {
            println!("{err}");
            continue;
        }

        if !game.status().is_terminal() && game.has_empty_cells() {
            let reply = game.cpu_play().context("engine move")?;
            info!(%reply, "engine answered");
        }

        print_board(&game);
        if report_if_over(&game) {
            println!("Type 'restart' for another game or 'quit' to exit.");
        }
    }

    Ok(())
}

/// Parses "row column" with either whitespace or comma separation.
fn parse_coordinates(input: &str) -> Option<(u8, u8)> {
    let mut parts = input.split(|c: char| c.is_whitespace() || c == ',').filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let column = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, column))
}

fn print_board(game: &Game) {
    println!("{}", game.board().display());
}

/// Prints the result if the game ended. Returns true when terminal.
fn report_if_over(game: &Game) -> bool {
    match game.status() {
        GameStatus::InProgress => false,
        GameStatus::Won(Player::Cpu) => {
            println!("The engine wins.");
            true
        }
        GameStatus::Won(Player::Human) => {
            println!("You win?! Please report this as an engine bug.");
            true
        }
        GameStatus::Draw => {
            println!("Draw.");
            true
        }
    }
}

//! Console Tower of Hanoi (default binary).
//!
//! A thin line-oriented front end over the engine: reads one command per
//! line from stdin and prints the resulting state. Auto-solve runs as a
//! background task, so `cancel` (or any other command) is accepted while it
//! is animating.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hanoi::core::GameSnapshot;
use hanoi::engine::{EngineConfig, SharedGame, SolveEvent, SolveHandle, SolveOutcome};
use hanoi::types::{GamePhase, Peg};

const HELP: &str = "\
commands:
  move <from> <to>   move the top disk (pegs 0-2 or left/middle/right)
  undo               take back the last move
  solve              start the auto-solver
  cancel             stop the auto-solver after the current move
  reset              restart with the same number of disks
  new <n>            start a new game with n disks
  state              print the board
  help               show this text
  quit               exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move(usize, usize),
    Undo,
    Solve,
    Cancel,
    Reset,
    New(u8),
    State,
    Help,
    Quit,
}

fn parse_peg(s: &str) -> Option<usize> {
    Peg::from_str(s).map(Peg::index).or_else(|| s.parse().ok())
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let cmd = words.next()?.to_lowercase();
    let command = match cmd.as_str() {
        "move" | "m" => Command::Move(parse_peg(words.next()?)?, parse_peg(words.next()?)?),
        "undo" | "u" => Command::Undo,
        "solve" | "s" => Command::Solve,
        "cancel" | "c" => Command::Cancel,
        "reset" | "r" => Command::Reset,
        "new" | "n" => Command::New(words.next()?.parse().ok()?),
        "state" | "p" => Command::State,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return None,
    };
    if words.next().is_some() {
        return None;
    }
    Some(command)
}

fn render(s: &GameSnapshot) -> String {
    let mut out = String::new();
    for peg in Peg::ALL {
        let disks: Vec<String> = s.peg(peg).iter().map(|d| d.to_string()).collect();
        out.push_str(&format!("{} {:<6} | {}\n", peg.index(), peg.as_str(), disks.join(" ")));
    }
    out.push_str(&format!("Moves: {} | Optimal: {}", s.moves, s.optimal_moves));
    if s.solving {
        out.push_str(" | solving");
    }
    if s.phase == GamePhase::Won {
        out.push_str(&format!("\nSolved in {} moves!", s.moves));
    }
    out
}

/// Next auto-solve event, or pending forever when no solve is running
async fn next_solve_event(solving: &mut Option<SolveHandle>) -> Option<SolveEvent> {
    match solving.as_mut() {
        Some(handle) => handle.next_event().await,
        None => std::future::pending().await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = EngineConfig::from_env();
    info!(disks = config.disks, delay = ?config.solve.delay, "starting");

    let game = SharedGame::new(config.disks)?;
    let mut solving: Option<SolveHandle> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Tower of Hanoi - type `help` for commands");
    println!("{}", render(&game.snapshot().await));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let Some(command) = parse_command(&line) else {
                    println!("unrecognized command; type `help`");
                    continue;
                };

                let result = match command {
                    Command::Move(from, to) => game.try_move(from, to).await,
                    Command::Undo => game.undo().await,
                    Command::Solve => match game.start_auto_solve(&config.solve).await {
                        Ok(handle) => {
                            println!("auto-solving...");
                            solving = Some(handle);
                            continue;
                        }
                        Err(e) => Err(e),
                    },
                    Command::Cancel => {
                        if !game.cancel_auto_solve().await {
                            println!("no auto-solve running");
                        }
                        continue;
                    }
                    Command::Reset => Ok(game.reset().await),
                    Command::New(n) => game.new_game(n).await,
                    Command::State => Ok(game.snapshot().await),
                    Command::Help => {
                        println!("{HELP}");
                        continue;
                    }
                    Command::Quit => break,
                };

                match result {
                    Ok(snapshot) => println!("{}", render(&snapshot)),
                    Err(e) => println!("rejected: {e}"),
                }
            }
            event = next_solve_event(&mut solving) => {
                match event {
                    Some(event) => {
                        println!("auto: {}", event.step.mv());
                        println!("{}", render(&event.snapshot));
                    }
                    None => {
                        if let Some(handle) = solving.take() {
                            match handle.wait().await? {
                                SolveOutcome::Solved { .. } => {}
                                SolveOutcome::Cancelled { applied } => {
                                    println!("auto-solve stopped after {applied} moves");
                                }
                                SolveOutcome::Failed { error, .. } => {
                                    println!("auto-solve failed: {error}");
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    game.cancel_auto_solve().await;
    Ok(())
}

use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use connect_four::config::AppConfig;
use connect_four::game::{GameEvent, GameState, Outcome, Placement};
use connect_four::session::Session;

/// Play a scripted list of moves without a terminal UI.
#[derive(Parser)]
#[command(name = "replay", about = "Replay a Connect Four move list headlessly")]
struct Cli {
    /// Comma-separated columns, 0-based, e.g. "3,3,4,2"
    #[arg(long)]
    moves: String,

    /// Animation ticks to run after each move
    #[arg(long, default_value_t = 0)]
    ticks: u32,

    /// Print a JSON summary instead of text
    #[arg(long)]
    json: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,
}

#[derive(Serialize)]
struct MoveReport {
    column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    placement: Option<Placement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejected: Option<String>,
}

#[derive(Serialize)]
struct Summary {
    moves: Vec<MoveReport>,
    outcome: Outcome,
    state: GameState,
    board: Vec<String>,
    pieces_in_flight: usize,
}

fn parse_moves(list: &str) -> Result<Vec<usize>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .with_context(|| format!("invalid column '{s}'"))
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let moves = parse_moves(&cli.moves)?;

    let mut session = Session::new(&config);
    let (tx, rx) = mpsc::channel::<GameEvent>();
    session.subscribe(Box::new(tx));

    let mut reports = Vec::with_capacity(moves.len());
    for (i, &column) in moves.iter().enumerate() {
        let report = match session.try_move(column) {
            Ok(placement) => {
                if !cli.json {
                    println!(
                        "move {}: {} -> column {}, row {}",
                        i + 1,
                        placement.player,
                        placement.column,
                        placement.row
                    );
                }
                MoveReport {
                    column,
                    placement: Some(placement),
                    rejected: None,
                }
            }
            Err(err) => {
                if !cli.json {
                    println!("move {}: column {column} rejected: {err}", i + 1);
                }
                MoveReport {
                    column,
                    placement: None,
                    rejected: Some(err.to_string()),
                }
            }
        };
        reports.push(report);

        for _ in 0..cli.ticks {
            session.tick();
        }
        for event in rx.try_iter() {
            if !cli.json {
                println!("  {}", event.status_text());
            }
        }
    }

    let engine = session.engine();
    let outcome = engine.outcome().unwrap_or(Outcome::InProgress);
    info!("replayed {} moves: {outcome:?}", moves.len());

    if cli.json {
        let summary = Summary {
            moves: reports,
            outcome,
            state: engine.state(),
            board: engine.board().to_string().lines().map(String::from).collect(),
            pieces_in_flight: session.animation().in_flight(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!();
        print!("{}", engine.board());
        match outcome {
            Outcome::Win(player) => println!("{player} wins"),
            Outcome::Draw => println!("Draw"),
            Outcome::InProgress => println!("In progress, {} to move", engine.current_turn()),
        }
        if cli.ticks > 0 {
            println!("{} piece(s) still falling", session.animation().in_flight());
        }
    }
    Ok(())
}

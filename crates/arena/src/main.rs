//! Arena CLI
//!
//! Play engine matches and answer snapshot requests.

use std::env;

use anyhow::{Context, bail};
use arena::{
    ArenaConfig, GameKind, MatchConfig, MatchReport, MatchRunner, Snapshot, SnapshotBoard, apply_requested,
    best_reply, create_engine,
};
use game_core::{ChessBoard, DraughtsBoard, TicTacToeBoard};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Game Arena");
    println!();
    println!("Usage:");
    println!("  arena play [game] [--white E] [--black E] [--games N] [--depth D|full]");
    println!("             [--max-plies N] [--seed S] [--no-alternate] [--quiet] [--results file]");
    println!("  arena initial <game>");
    println!("  arena best <game> <snapshot-json> [--depth D|full]");
    println!("  arena apply <game> <snapshot-json>");
    println!();
    println!("Every command also accepts --config <file.toml>.");
    println!();
    println!("Games:   chess, draughts, tictactoe");
    println!("Engines: minimax, random");
}

/// Calls `$body` with `$B` bound to the board type of `$game`.
macro_rules! with_board {
    ($game:expr, $B:ident => $body:expr) => {
        match $game {
            GameKind::Chess => {
                type $B = ChessBoard;
                $body
            }
            GameKind::Draughts => {
                type $B = DraughtsBoard;
                $body
            }
            GameKind::TicTacToe => {
                type $B = TicTacToeBoard;
                $body
            }
        }
    };
}

fn start_board<B: SnapshotBoard + Default>() -> B {
    B::default()
}

fn run_play(config: &ArenaConfig) -> anyhow::Result<()> {
    println!("=== {}: {} vs {} ===", config.game, config.white, config.black);
    match config.depth {
        Some(depth) => println!("Games: {}, Depth: {}", config.games, depth),
        None => println!("Games: {}, Depth: full", config.games),
    }
    println!();

    let runner = MatchRunner::new(MatchConfig::from(config));
    let result = with_board!(config.game, B => {
        let mut engine1 = create_engine::<B>(config.white, config.seed);
        let mut engine2 = create_engine::<B>(config.black, config.seed.map(|s| s.wrapping_add(1)));
        runner.run_match(&start_board::<B>(), engine1.as_mut(), engine2.as_mut())
    });

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        config.white, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    info!(wins = result.wins, losses = result.losses, draws = result.draws, "match finished");

    if let Some(path) = &config.results {
        let report = MatchReport {
            game: config.game.to_string(),
            engine1: config.white.to_string(),
            engine2: config.black.to_string(),
            depth: config.depth,
            result,
        };
        report
            .save(path)
            .with_context(|| format!("saving match report to {}", path.display()))?;
    }
    Ok(())
}

fn parse_game(positional: &[String]) -> anyhow::Result<GameKind> {
    let Some(name) = positional.first() else {
        bail!("missing game name");
    };
    Ok(name.parse()?)
}

fn parse_snapshot(positional: &[String]) -> anyhow::Result<Snapshot> {
    let Some(json) = positional.get(1) else {
        bail!("missing snapshot JSON");
    };
    Snapshot::from_json(json).context("decoding snapshot")
}

fn run(args: &[String]) -> anyhow::Result<()> {
    let command = args[1].as_str();
    if matches!(command, "help" | "--help" | "-h") {
        print_usage();
        return Ok(());
    }

    let (mut config, positional) = ArenaConfig::from_args(&args[2..])?;

    match command {
        "play" => {
            if let Some(name) = positional.first() {
                config.game = name.parse()?;
            }
            run_play(&config)
        }
        "initial" => {
            let game = parse_game(&positional)?;
            let json = with_board!(game, B => start_board::<B>().to_snapshot(None).to_json()?);
            println!("{json}");
            Ok(())
        }
        "best" => {
            let game = parse_game(&positional)?;
            let snapshot = parse_snapshot(&positional)?;
            let reply = with_board!(game, B => best_reply::<B>(&snapshot, config.depth)?);
            println!("{}", reply.to_json()?);
            Ok(())
        }
        "apply" => {
            let game = parse_game(&positional)?;
            let snapshot = parse_snapshot(&positional)?;
            let reply = with_board!(game, B => apply_requested::<B>(&snapshot)?);
            println!("{}", reply.to_json()?);
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}");
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    run(&args)
}

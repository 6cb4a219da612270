//! Self-play driver.
//!
//! Plays a full game against itself: the first plies are drawn uniformly at
//! random, then a depth-limited alpha-beta search takes over. The board is
//! redrawn after every move, and the finished game is reported with its
//! outcome, end method, and movetext.

mod config;
mod report;

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use alphabeta_engine::AlphaBeta;
use chess_rules::{Game, Move, Mover};
use random_engine::RandomMover;

use crate::config::AutoplayConfig;
use crate::report::GameReport;

#[derive(Parser)]
#[command(name = "autoplay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search depth in plies
    #[arg(long, short = 'd')]
    depth: Option<u8>,

    /// Number of opening plies played at random
    #[arg(long)]
    random_plies: Option<u32>,

    /// Pause before each searched move, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Stop the game after this many plies
    #[arg(long)]
    max_plies: Option<u32>,

    /// Seed for the random mover (reproducible games)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file; flags override file values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a JSON report of the finished game
    #[arg(long)]
    report: Option<PathBuf>,

    /// Suppress the board redraw, print only the summary
    #[arg(long, short = 'q')]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> Result<(AutoplayConfig, Option<PathBuf>, bool)> {
        let mut cfg = match &self.config {
            Some(path) => AutoplayConfig::load(path)?,
            None => AutoplayConfig::default(),
        };
        if let Some(depth) = self.depth {
            cfg.search_depth = depth;
        }
        if let Some(plies) = self.random_plies {
            cfg.random_plies = plies;
        }
        if let Some(delay) = self.delay_ms {
            cfg.move_delay_ms = delay;
        }
        if let Some(max) = self.max_plies {
            cfg.max_plies = max;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        Ok((cfg, self.report, self.quiet))
    }
}

fn main() -> Result<()> {
    let (cfg, report_path, quiet) = Cli::parse().into_config()?;

    let mut game = Game::new();
    let mut opening = match cfg.seed {
        Some(seed) => RandomMover::seeded(seed),
        None => RandomMover::new(),
    };
    let mut searcher = AlphaBeta::new(cfg.search_depth);
    let mut announced = false;

    while game.outcome().is_none() && game.ply() < cfg.max_plies {
        let searching = game.ply() >= cfg.random_plies;
        if searching {
            if !announced {
                announced = true;
                if !quiet {
                    println!(
                        "Switching to {} search at depth {}",
                        searcher.name(),
                        searcher.depth()
                    );
                }
            }
            if cfg.move_delay_ms > 0 {
                thread::sleep(Duration::from_millis(cfg.move_delay_ms));
            }
        }

        let mover: &mut dyn Mover = if searching {
            &mut searcher
        } else {
            &mut opening
        };
        let mv = match mover.choose(&game) {
            Some(mv) => mv,
            None => break,
        };
        game.play(mv)?;

        if !quiet {
            draw(&game, mv);
        }
    }

    match game.outcome() {
        Some((outcome, method)) => println!("Game completed. {outcome} by {method}."),
        None => println!("Game stopped after {} plies.", game.ply()),
    }
    println!("{}", game.movetext());

    if let Some(path) = report_path {
        GameReport::from_game(&game, cfg.random_plies, cfg.search_depth).save(&path)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

/// Clear the terminal and redraw the board under the move that led here.
fn draw(game: &Game, last: Move) {
    print!("\x1b[2J\x1b[1;1H");
    println!("Previous move : {last}");
    println!("======================================");
    println!("{}", game.position());
    println!();
}

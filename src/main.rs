mod game;
mod input;
mod model;
mod report;
mod scoring;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use game::prompts::prompt_for;
use game::{Leaderboard, LeaderboardEntry, MemoryStore, SessionStore};
use input::{Role, load_session};
use model::verdict::Verdict;
use report::{ScoreReportContext, write_leaderboard_report, write_score_report};
use scoring::score_bundle;

const TOOL_NAME: &str = "bluff-judge";

/// Deterministic bluff judge for recorded voice game sessions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one session directory of <role>.json feature files
    Score {
        /// Session directory
        #[arg(short, long)]
        input: PathBuf,

        /// Directory for bluff_score.json and report.txt
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Score every session under a directory and rank the results
    Rank {
        /// Directory of session subdirectories
        #[arg(short, long)]
        input: PathBuf,

        /// Directory for leaderboard.json and leaderboard.txt
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Print the five recording prompts in session order
    Prompts,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Command::Score { input, out } => run_score(&input, &out),
        Command::Rank { input, out } => {
            let mut store = MemoryStore::new();
            run_rank(&input, &out, &mut store)
        }
        Command::Prompts => run_prompts(),
    }
}

fn run_score(session_dir: &Path, out_dir: &Path) -> Result<()> {
    let ctx = score_session(session_dir)
        .with_context(|| format!("failed to score {}", session_dir.display()))?;
    write_score_report(&ctx, out_dir)
        .with_context(|| format!("failed to write reports to {}", out_dir.display()))?;

    println!(
        "{}: score {:.1} / 100, confidence {:.2} ({})",
        ctx.session_id,
        ctx.result.score,
        ctx.result.confidence,
        ctx.verdict.label()
    );
    for reason in &ctx.result.reasons {
        println!("  - {reason}");
    }
    Ok(())
}

fn run_rank(sessions_dir: &Path, out_dir: &Path, store: &mut dyn SessionStore) -> Result<()> {
    let mut board = Leaderboard::new();

    for session_dir in session_dirs(sessions_dir)? {
        let session_id = session_name(&session_dir);

        let bundle = match load_session(&session_dir) {
            Ok(bundle) => bundle,
            Err(err) => {
                warn!("skipping {}: {err:#}", session_dir.display());
                continue;
            }
        };

        store.create(&session_id, &session_id)?;
        for (role, record) in &bundle.records {
            store.add_record(&session_id, *role, *record)?;
        }
        if !store.read(&session_id)?.is_complete() {
            info!("{session_id}: target-only session, threshold fallback");
        }

        let ctx = match score_loaded(&bundle, session_id.clone()) {
            Ok(ctx) => ctx,
            Err(err) => {
                warn!("skipping {}: {err:#}", session_dir.display());
                continue;
            }
        };
        store.set_result(&session_id, ctx.result.clone())?;

        write_score_report(&ctx, &session_dir)
            .with_context(|| format!("failed to write reports to {}", session_dir.display()))?;

        board.add(LeaderboardEntry {
            name: ctx.session_id.clone(),
            score: ctx.result.score,
            session_id: ctx.session_id,
            recorded_at: Utc::now(),
        });
    }

    if board.is_empty() {
        anyhow::bail!("no scorable sessions under {}", sessions_dir.display());
    }

    write_leaderboard_report(&board, out_dir)
        .with_context(|| format!("failed to write leaderboard to {}", out_dir.display()))?;

    println!("Ranked {} sessions:", board.len());
    for entry in board.entries() {
        println!(
            "{:>3}. {}  {:.1}",
            board.position(entry.score),
            entry.name,
            entry.score
        );
    }
    Ok(())
}

fn run_prompts() -> Result<()> {
    for (i, role) in Role::ALL.iter().enumerate() {
        let prompt = prompt_for(*role);
        println!(
            "{}. {} [{}] {}",
            i + 1,
            prompt.role.name(),
            prompt.kind.name(),
            prompt.text
        );
    }
    Ok(())
}

fn score_session(session_dir: &Path) -> Result<ScoreReportContext> {
    let bundle = load_session(session_dir)?;
    score_loaded(&bundle, session_name(session_dir))
}

fn session_name(session_dir: &Path) -> String {
    session_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| session_dir.display().to_string())
}

fn score_loaded(bundle: &input::SessionBundle, session_id: String) -> Result<ScoreReportContext> {
    let (method, result) = score_bundle(bundle)?;
    let verdict = Verdict::from_score(result.score);

    info!(
        "scored {session_id}: {:.1} via {} ({})",
        result.score,
        method.name(),
        verdict.label()
    );

    Ok(ScoreReportContext {
        session_id,
        method,
        roles_present: bundle.records.keys().copied().collect(),
        result,
        verdict,
        tool_name: TOOL_NAME.to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Subdirectories of `sessions_dir`, sorted by name so ranking order is
/// stable across runs.
fn session_dirs(sessions_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(sessions_dir)
        .with_context(|| format!("cannot read {}", sessions_dir.display()))?
    {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

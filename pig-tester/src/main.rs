mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use pig_game::TournamentConfig;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use logic::{
    TournamentRunner, TournamentSummary, build_roster, resolve_seed_token, validate_standings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One line per strategy plus a short summary
    Console,
    /// Pretty-printed JSON summary
    Json,
    /// Markdown summary and standings table
    Markdown,
    /// Standings as CSV rows
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "pig-tester", version)]
#[command(about = "Round-robin tournament of Pig strategies - simulates every pairing and reports win rates")]
struct Args {
    /// JSON tournament configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Score at which a game ends
    #[arg(long)]
    win: Option<u32>,

    /// Games simulated for every pair of strategies
    #[arg(long)]
    games: Option<u32>,

    /// Stay-at-k thresholds to enter (comma-separated k values, a-b ranges, or "all")
    #[arg(long, default_value = "all")]
    thresholds: String,

    /// Tournament seed: an integer, 0x-prefixed hex, or "random"
    #[arg(long)]
    seed: Option<String>,

    /// Maximum actions per game before it is abandoned as an error
    #[arg(long, conflicts_with = "unbounded")]
    max_actions: Option<u64>,

    /// Let games run until someone wins, without an action cap
    #[arg(long)]
    unbounded: bool,

    /// Play pairings one after another instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Fail unless the standings trend non-degenerately across the roster
    #[arg(long)]
    acceptance: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start_time = Instant::now();
    let config = resolve_config(&args)?;
    let roster = build_roster(&args.thresholds, &config)?;

    if args.report == ReportFormat::Console {
        announce_banner();
    }

    let runner = TournamentRunner::new(config, args.verbose);
    let summary = runner.run(&roster)?;
    write_report(&args, &summary)?;

    if args.acceptance {
        validate_standings(&summary.standings).context("acceptance checks failed")?;
        log::info!("acceptance checks passed");
    }

    log::info!("pig-tester finished in {:?}", start_time.elapsed());
    Ok(())
}

fn announce_banner() {
    println!("{}", "🐷 Pig Strategy Tournament".bright_cyan().bold());
    println!("{}", "==========================".cyan());
}

fn resolve_config(args: &Args) -> Result<TournamentConfig> {
    let mut config = if let Some(path) = &args.config {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        TournamentConfig::from_json_str(&raw)
            .with_context(|| format!("failed to load {}", path.display()))?
    } else {
        TournamentConfig::default()
    };

    if let Some(win) = args.win {
        config.win_threshold = win;
    }
    if let Some(games) = args.games {
        config.games_per_series = games;
    }
    if let Some(token) = &args.seed {
        config.seed = resolve_seed_token(token)?;
    }
    if args.unbounded {
        config.max_actions = None;
    } else if let Some(cap) = args.max_actions {
        config.max_actions = Some(cap);
    }
    if args.sequential {
        config.parallel = false;
    }

    config.validate().context("invalid tournament configuration")?;
    Ok(config)
}

fn write_report(args: &Args, summary: &TournamentSummary) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Console => {
            logic::reports::generate_console_report(output_target.writer(), summary)?;
        }
        ReportFormat::Json => logic::reports::generate_json_report(output_target.writer(), summary)?,
        ReportFormat::Markdown => {
            logic::reports::generate_markdown_report(output_target.writer(), summary)?;
        }
        ReportFormat::Csv => logic::reports::generate_csv_report(output_target.writer(), summary)?,
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

//! Diplomap -- paints Diplomacy board snapshots onto an SVG map.
//!
//! `render` paints one snapshot (or the opening board when none is given);
//! `batch` paints every turn of a game history into a directory.

use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use diplomap::board::{BoardConfig, ConfigError, CoordinateTable, GameHistory};
use diplomap::render::{render_batch, MapRenderer, RenderOptions};
use diplomap::svg::{SvgDocument, SvgError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Svg(#[from] SvgError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Parser)]
#[command(name = "diplomap", version, about = "Paints Diplomacy board snapshots onto an SVG map")]
struct Cli {
    /// Diagnostics written to stderr.
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Paint one snapshot.
    Render(RenderArgs),
    /// Paint every turn of a game history.
    Batch(BatchArgs),
}

#[derive(Args)]
struct MapArgs {
    /// SVG map artwork.
    #[arg(long)]
    map: PathBuf,
    /// JSON coordinate table replacing the standard one.
    #[arg(long)]
    coords: Option<PathBuf>,
    /// TOML renderer options.
    #[arg(long)]
    options: Option<PathBuf>,
}

#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    map: MapArgs,
    /// Board snapshot JSON; the opening board when omitted.
    #[arg(long)]
    board: Option<PathBuf>,
    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct BatchArgs {
    #[command(flatten)]
    map: MapArgs,
    /// Game history JSON: {"turns": [{"name": ..., "board": {...}}]}.
    #[arg(long)]
    game: PathBuf,
    /// Directory receiving one `<name>.svg` per turn.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = diplomap::logging::init(cli.log_level.into()) {
        eprintln!("{}", e);
    }

    let result = match cli.command {
        Commands::Render(args) => run_render(args),
        Commands::Batch(args) => run_batch(args),
    };
    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Loads the map, renderer options and coordinate table shared by both commands.
fn load_map(args: &MapArgs) -> Result<(SvgDocument, MapRenderer), CliError> {
    let document = SvgDocument::load(&args.map)?;
    let options = match &args.options {
        Some(path) => RenderOptions::load(path)?,
        None => RenderOptions::default(),
    };
    let coordinates = match &args.coords {
        Some(path) => CoordinateTable::load(path)?,
        None => CoordinateTable::standard(),
    };
    Ok((document, MapRenderer::new(options, coordinates)))
}

fn run_render(args: RenderArgs) -> Result<(), CliError> {
    let (mut document, renderer) = load_map(&args.map)?;
    let config = match &args.board {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::initial(),
    };
    let report = renderer.render(&mut document, &config);
    log::info!(
        "painted {} territories and {} units ({} warnings)",
        report.colored,
        report.placed,
        report.warnings.len()
    );

    let svg = document.to_svg_string()?;
    match &args.out {
        Some(path) => write_file(path, &svg),
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(svg.as_bytes())
                .and_then(|_| out.flush())
                .map_err(|source| CliError::Write { path: PathBuf::from("-"), source })
        }
    }
}

fn run_batch(args: BatchArgs) -> Result<(), CliError> {
    let (document, renderer) = load_map(&args.map)?;
    let history = GameHistory::load(&args.game)?;
    fs::create_dir_all(&args.out_dir).map_err(|source| CliError::Write {
        path: args.out_dir.clone(),
        source,
    })?;

    let mut taken = HashSet::new();
    for item in render_batch(&renderer, &document, &history.turns) {
        let path = args.out_dir.join(format!("{}.svg", unique_stem(&item.name, &mut taken)));
        write_file(&path, &item.document.to_svg_string()?)?;
        log::info!(
            "{}: {} territories, {} units, {} warnings",
            path.display(),
            item.report.colored,
            item.report.placed,
            item.report.warnings.len()
        );
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Write { path: path.to_path_buf(), source })
}

/// Keeps turn names usable as file names.
fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "turn".to_string()
    } else {
        stem
    }
}

/// Picks a file stem no earlier turn in this batch has used, appending
/// `-2`, `-3`, ... when distinct names escape to the same stem.
fn unique_stem(name: &str, taken: &mut HashSet<String>) -> String {
    let base = file_stem(name);
    let mut stem = base.clone();
    let mut n = 1;
    while taken.contains(&stem) {
        n += 1;
        stem = format!("{}-{}", base, n);
    }
    if n > 1 {
        log::warn!("turn {:?} collides with an earlier file name; writing {}.svg", name, stem);
    }
    taken.insert(stem.clone());
    stem
}

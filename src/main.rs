//! Army Clash - Entry Point
//!
//! Recruits two armies, lets them trade volleys round by round and prints
//! the transcript until one army has no soldiers left.

use army_clash::battle::{Battle, BattleReport, ConsoleObserver, ConsoleStream};
use army_clash::core::config::{load_config, BattleConfig};
use army_clash::core::error::Result;
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Round transcript on stdout
    Text,
    /// Transcript on stderr, JSON report on stdout
    Json,
}

/// Two armies of riflemen and snipers fight until one is wiped out
#[derive(Parser, Debug)]
#[command(name = "army-clash")]
#[command(about = "Two randomly recruited armies trade fire until one is wiped out")]
struct Args {
    /// TOML battle config; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for a replayable battle
    #[arg(long)]
    seed: Option<u64>,

    /// Soldiers recruited into each army
    #[arg(long)]
    soldiers: Option<usize>,

    /// Pause between rounds in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Skip the pause between rounds
    #[arg(long)]
    fast: bool,

    /// End the battle undecided after this many rounds
    #[arg(long)]
    max_rounds: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log every round and kill to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    fn battle_config(&self) -> Result<BattleConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => BattleConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(soldiers) = self.soldiers {
            config.soldiers_per_army = soldiers;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.round_delay_ms = delay_ms;
        }
        if self.fast {
            config.round_delay_ms = 0;
        }
        if let Some(max_rounds) = self.max_rounds {
            config.max_rounds = Some(max_rounds);
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "army_clash=debug"
    } else {
        "army_clash=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = args.battle_config()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!("Battle seed: {}", seed);

    let stream = match args.format {
        OutputFormat::Text => ConsoleStream::Stdout,
        OutputFormat::Json => ConsoleStream::Stderr,
    };
    let manager = Rc::new(ConsoleObserver::new(config.observer_name.as_str()).with_stream(stream));
    let mut battle = Battle::from_config(&config, manager, ChaCha8Rng::seed_from_u64(seed));

    let start = Instant::now();
    match stream {
        ConsoleStream::Stdout => battle.run(&mut io::stdout(), config.round_delay())?,
        ConsoleStream::Stderr => battle.run(&mut io::stderr(), config.round_delay())?,
    };
    let elapsed = start.elapsed();

    let report = BattleReport::new(&battle, Some(seed), elapsed);
    tracing::info!("{}", report.summary());

    if args.format == OutputFormat::Json {
        println!("{}", report.to_json()?);
    }

    Ok(())
}

//! chromacli - find the most stable chord in a set of pitch classes

use std::path::PathBuf;

use anyhow::{Context, Result};
use chromaconf::{ChromaConfig, OutputFormat};
use chromatic_analysis::{Analysis, ChromaticEngine};
use chromacli::{parse_pitch_class, quiz, render_json, render_text, telemetry, ReportOptions};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Chromatic harmony analyzer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file (replaces ./chromatic.toml)
    #[arg(long, global = true, env = "CHROMATIC_CONFIG")]
    config: Option<PathBuf>,

    /// Print the analysis as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze pitch classes given as numbers (0-11) or note names
    Analyze {
        #[arg(required = true, value_parser = parse_pitch_class)]
        pitch_classes: Vec<u8>,
    },

    /// Analyze a randomly drawn question
    Quiz {
        /// Seed for a reproducible question
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (mut config, sources) = ChromaConfig::load_with_sources_from(args.config.as_deref())
        .context("Failed to load configuration")?;
    if args.json {
        config.output.format = OutputFormat::Json;
    }
    if args.no_color {
        config.output.color = false;
    }

    telemetry::init(&config.telemetry.log_level);
    debug!(files = ?sources.files, env = ?sources.env_overrides, "configuration loaded");

    let engine = ChromaticEngine::new(Some(config.analysis.question_size));

    match args.command {
        Command::Analyze { pitch_classes } => {
            let analysis = engine
                .analyze(&pitch_classes)
                .context("Cannot analyze question")?;
            print_analysis(&analysis, &config)?;
        }
        Command::Quiz { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let question = quiz::random_question(&mut rng, config.analysis.question_size)
                .context("Question size does not fit in twelve pitch classes")?;
            debug!(?question, ?seed, "drew quiz question");
            let analysis = engine.analyze(&question)?;
            print_analysis(&analysis, &config)?;
        }
        Command::Config => {
            print!("{}", config.to_toml());
        }
    }

    Ok(())
}

fn print_analysis(analysis: &Analysis, config: &ChromaConfig) -> Result<()> {
    match config.output.format {
        OutputFormat::Json => {
            println!("{}", render_json(analysis).context("Failed to serialize analysis")?);
        }
        OutputFormat::Text => {
            let options = ReportOptions {
                show_interpretations: config.output.show_interpretations,
                color: config.output.color,
            };
            print!("{}", render_text(analysis, &options));
        }
    }
    Ok(())
}

//! Oncoscore CLI
//!
//! Predicts whether a tumor is benign or malignant from 30 measurements and
//! keeps a small viewer feedback log.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use oncoscore_classifier::{ArtifactSet, FeatureVector, FEATURE_NAMES};
use oncoscore_cli::{commands, input, logging, shell, AppConfig, Session};
use oncoscore_feedback::FeedbackStore;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "oncoscore")]
#[command(about = "Breast cancer prediction from tumor measurements", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML configuration file (defaults to the working-directory layout)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one sample
    Predict(PredictCommand),
    /// Viewer feedback
    Feedback {
        #[command(subcommand)]
        action: FeedbackCommands,
    },
    /// List the 30 input features in model order
    Features,
    /// Print the blake3 hash of the loaded model
    ModelHash,
    /// Write the default configuration to a file
    InitConfig {
        /// Output path
        #[arg(short, long, default_value = "oncoscore.toml")]
        output: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Interactive session: edit inputs, predict and rate repeatedly
    Shell,
}

#[derive(Args)]
struct PredictCommand {
    /// JSON object or CSV (header + one row) of feature values
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Feature assignment, e.g. --set "concave points_mean=0.147"; repeatable
    #[arg(long = "set", value_name = "NAME=VALUE")]
    assignments: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum FeedbackCommands {
    /// Rate the app for today
    Submit {
        /// Your name (defaults to the configured session name)
        #[arg(long)]
        name: Option<String>,
        /// Rating from 1 to 5 (defaults to the configured session rating)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: Option<u8>,
    },
    /// Show view count, average rating and viewers
    Stats,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    logging::init(cli.verbose, config.logging.level())?;
    config.validate();
    debug!("Oncoscore v{}", oncoscore_cli::VERSION);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Predict(args) => {
            let artifacts = load_artifacts(&config)?;

            let mut pairs = Vec::new();
            if let Some(path) = &args.input {
                pairs.extend(input::read_feature_file(path)?);
            }
            for raw in &args.assignments {
                pairs.push(input::parse_assignment(raw)?);
            }
            let features = input::apply_features(&FeatureVector::default(), &pairs)?;

            commands::predict(&artifacts.predictor, &features, args.json, &mut out)?;
        }
        Commands::Feedback { action } => {
            let store = FeedbackStore::new(&config.feedback.path);
            match action {
                FeedbackCommands::Submit { name, rating } => {
                    let mut session = Session::new(&config.session);
                    if let Some(name) = name {
                        session.user_name = name;
                    }
                    if let Some(rating) = rating {
                        session.user_rating = rating;
                    }
                    commands::submit_feedback(&store, &session, today(), &mut out)?;
                }
                FeedbackCommands::Stats => commands::show_stats(&store, &mut out)?,
            }
        }
        Commands::Features => {
            for (i, name) in FEATURE_NAMES.iter().enumerate() {
                writeln!(out, "{:>2}. {}", i + 1, name)?;
            }
        }
        Commands::ModelHash => {
            let artifacts = load_artifacts(&config)?;
            writeln!(out, "{}", artifacts.predictor.engine().model_hash())?;
        }
        Commands::InitConfig { output, force } => {
            if output.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", output.display());
            }
            config.save_to_file(&output)?;
            writeln!(out, "Wrote {}", output.display())?;
        }
        Commands::Shell => {
            let artifacts = load_artifacts(&config)?;
            let store = FeedbackStore::new(&config.feedback.path);
            let mut session = Session::new(&config.session);
            let ctx = shell::ShellContext {
                predictor: &artifacts.predictor,
                store: &store,
                today: &today,
            };
            let stdin = io::stdin();
            shell::run(&ctx, &mut session, stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}

fn load_artifacts(config: &AppConfig) -> Result<ArtifactSet> {
    let artifacts = ArtifactSet::load(&config.artifacts).context("Failed to load startup artifacts")?;
    info!("Header image: {}", artifacts.header_image.display());
    Ok(artifacts)
}

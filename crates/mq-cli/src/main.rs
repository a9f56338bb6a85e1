//! CLI frontend for Milliomos, a terminal "Who Wants to Be a
//! Millionaire" quiz.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use mq_session::SessionConfig;

#[derive(Parser)]
#[command(
    name = "mq",
    about = "Milliomos, a twelve-round quiz for the big prize",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (resumes a saved game when one exists)
    Play {
        /// Question file (JSON)
        #[arg(short, long, default_value = "questions.json")]
        questions: PathBuf,

        /// Directory for the save file and the leaderboard
        #[arg(short, long, default_value = ".")]
        data_dir: PathBuf,

        /// RNG seed for reproducible question draws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Seconds on the clock per question
        #[arg(long, default_value = "30")]
        round_seconds: u32,
    },

    /// Show the leaderboard
    Scores {
        /// Directory holding the leaderboard file
        #[arg(short, long, default_value = ".")]
        data_dir: PathBuf,

        /// Empty the leaderboard
        #[arg(long)]
        clear: bool,
    },

    /// Validate a question file and report pool coverage
    Check {
        /// Question file (JSON)
        #[arg(default_value = "questions.json")]
        questions: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            questions,
            data_dir,
            seed,
            round_seconds,
        } => {
            let mut config = SessionConfig::default()
                .with_questions(questions)
                .with_data_dir(data_dir)
                .with_round_seconds(round_seconds);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            commands::play::run(config)
        }
        Commands::Scores { data_dir, clear } => commands::scores::run(&data_dir, clear),
        Commands::Check { questions } => commands::check::run(&questions),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

//! Wordle-by-dependency-resolution - CLI
//!
//! Generates a synthetic package universe, publishes it as wheels, and
//! plays Wordle by compiling clues into manifests for uv to resolve.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_depsolve::{
    commands::{run_generate, run_publish, run_solve},
    dictionary::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_depsolve",
    about = "Wordle solver that outsources the thinking to a package dependency resolver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file of 5-letter words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the package universe into a directory
    Generate {
        /// Target directory for the generated packages
        #[arg(default_value = "./output")]
        directory: PathBuf,
    },

    /// Build installable wheels for a generated universe
    Publish {
        /// Directory holding the generated packages
        #[arg(default_value = "./output")]
        directory: PathBuf,
    },

    /// Play: resolve guesses interactively against your feedback
    Solve {
        /// Scratch directory for the problem manifest and lockfile
        #[arg(long, default_value = "./problem")]
        work_dir: PathBuf,

        /// Directory holding the published wheels
        #[arg(long, default_value = "./output/wheels")]
        wheels_dir: PathBuf,

        /// Echo uv's own output after each resolution
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    match wordlist_mode {
        "embedded" => Ok(Dictionary::embedded()),
        path => {
            let words = load_from_file(path)?;
            anyhow::ensure!(!words.is_empty(), "Wordlist {path} contains no valid words");
            Ok(Dictionary::new(words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;

    match cli.command {
        Commands::Generate { directory } => run_generate(&directory, &dictionary),
        Commands::Publish { directory } => run_publish(&directory),
        Commands::Solve {
            work_dir,
            wheels_dir,
            verbose,
        } => run_solve(&work_dir, &wheels_dir, &dictionary, verbose),
    }
}

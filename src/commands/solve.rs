//! Interactive solving command
//!
//! Drives the resolution loop against the real `uv` resolver, prompting
//! for feedback after each guess.

use crate::dictionary::Dictionary;
use crate::solver::{Feedback, Game, GameStatus, UvResolver};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Run the interactive solver loop
///
/// # Errors
/// Returns an error on I/O failures reading input or on resolver
/// infrastructure failures. Running out of candidates is a normal outcome,
/// not an error.
pub fn run_solve(
    work_dir: &Path,
    wheels_dir: &Path,
    dictionary: &Dictionary,
    verbose: bool,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║          Wordle via dependency resolution                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll guess by compiling your feedback into a package manifest");
    println!("and letting uv resolve it. After each guess, enter the feedback:\n");
    println!("  - G for green (correct position)");
    println!("  - Y for yellow (wrong position)");
    println!("  - . for blank (not in word)\n");
    println!("Type 'quit' to exit.\n");

    let resolver = UvResolver::new(work_dir, wheels_dir).verbose(verbose);
    let mut game = Game::new(&resolver, dictionary)?;

    loop {
        let Some(guess) = game.next_guess()? else {
            // The resolver proved no dictionary word fits all the clues
            println!(
                "\n{}",
                "No remaining candidate — I give up!".bright_red().bold()
            );
            return Ok(());
        };
        let guess = guess.clone();

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Round {}: my guess is {}",
            game.rounds(),
            guess.text().to_uppercase().bright_yellow().bold()
        );

        let feedback = loop {
            let input = get_user_input("Enter feedback (G/Y/.)")?;

            if matches!(input.as_str(), "quit" | "q" | "exit") {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }

            match Feedback::parse(&input) {
                Ok(feedback) => break feedback,
                Err(e) => println!("{} {e}\n", "❌".red()),
            }
        };

        if game.apply_feedback(&guess, &feedback) {
            println!(
                "\n{}",
                format!("🎉 Solved in {} rounds!", game.rounds())
                    .bright_green()
                    .bold()
            );
            debug_assert_eq!(game.status(), GameStatus::Won);
            return Ok(());
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

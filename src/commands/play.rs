//! Interactive console mode
//!
//! The user hosts a game and reports what each suggested letter revealed.
//! Everything goes through the solver's `guess`/`feedback` pair, exactly as a
//! game loop would drive it.

use crate::core::Mask;
use crate::output::formatters::spaced_mask;
use crate::solver::{HangmanSolver, Outcome};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the interactive loop until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Feedback the
/// solver rejects is reported and asked for again.
pub fn run_play<R: BufRead, W: Write>(
    solver: &mut HangmanSolver,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        output,
        " {}",
        "Hangman Solver - Interactive Mode".bright_cyan().bold()
    )?;
    writeln!(output, "{}", "═".repeat(60).cyan())?;
    writeln!(output, "\nThink of a word. After each suggested letter, type the")?;
    writeln!(output, "revealed pattern (e.g. _a__e), or press enter if the letter")?;
    writeln!(output, "is not in the word. Commands: 'new', 'quit'.\n")?;

    'games: loop {
        let Some(line) = prompt(&mut input, &mut output, "Word length (or 'quit')")? else {
            break;
        };
        if is_quit(&line) {
            break;
        }
        let length = match line.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                writeln!(output, "❌ Enter a positive number")?;
                continue;
            }
        };

        let mut mask = Mask::blank(length);
        let mut new_word = true;
        loop {
            let letter = match solver.guess(&mask.to_string(), new_word) {
                Ok(letter) => letter,
                Err(e) => {
                    writeln!(output, "❌ {e}")?;
                    continue 'games;
                }
            };
            new_word = false;

            writeln!(
                output,
                "\n{}  Suggested letter: {}",
                spaced_mask(&mask),
                letter.to_ascii_uppercase().to_string().bright_yellow().bold()
            )?;

            loop {
                let Some(reply) = prompt(&mut input, &mut output, "Revealed pattern")? else {
                    return Ok(());
                };
                if is_quit(&reply) {
                    return Ok(());
                }
                if reply.eq_ignore_ascii_case("new") {
                    writeln!(output, "\n🔄 New game started!\n")?;
                    continue 'games;
                }

                let revealed = if reply.is_empty() {
                    mask.to_string()
                } else {
                    reply
                };
                let correct = revealed.chars().any(|c| c.eq_ignore_ascii_case(&letter));
                match solver.feedback(correct, &revealed) {
                    Ok(()) => break,
                    Err(e) => writeln!(output, "❌ {e}")?,
                }
            }

            let Some(session) = solver.session() else {
                continue 'games;
            };
            mask = session.mask().clone();
            let wrong = session.wrong_guesses();

            match session.outcome() {
                Some(Outcome::Won) => {
                    writeln!(
                        output,
                        "\n{} {} with {wrong} wrong guess{}\n",
                        "🎉 Solved:".green().bold(),
                        mask.to_string().to_uppercase().bright_green().bold(),
                        if wrong == 1 { "" } else { "es" }
                    )?;
                    continue 'games;
                }
                Some(Outcome::Lost) => {
                    writeln!(output, "\n{}\n", "💀 Out of guesses!".red().bold())?;
                    continue 'games;
                }
                None if wrong > 0 => writeln!(output, "   Wrong guesses: {wrong}")?,
                None => {}
            }
        }
    }

    writeln!(output, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn is_quit(line: &str) -> bool {
    matches!(line.to_ascii_lowercase().as_str(), "quit" | "q" | "exit")
}

/// Read one trimmed line, or `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

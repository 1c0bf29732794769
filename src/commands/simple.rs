//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess per line.

use crate::game::{GuessOutcome, RoundStore, Session};
use crate::output::display::print_board;
use crate::wordlists::Catalog;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Options for a line-based round
#[derive(Debug, Clone)]
pub struct SimpleOptions {
    /// Share header label, e.g. `xordle #42`
    pub label: String,
    pub color_blind: bool,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: RoundStore>(
    session: &mut Session<S>,
    catalog: &Catalog,
    options: &SimpleOptions,
) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_lines(session, catalog, options, stdin.lock(), &mut stdout)
}

/// Drive a session from any line source
///
/// Returns when the round ends, on `quit`, or at end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_lines<S, R, W>(
    session: &mut Session<S>,
    catalog: &Catalog,
    options: &SimpleOptions,
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    S: RoundStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", options.label.bright_cyan().bold())?;
    writeln!(
        out,
        "Find both words. Tiles show the better of the two clues."
    )?;
    writeln!(out, "Commands: 'quit' to exit, 'share' to print results\n")?;

    print_board(out, session.round(), options.color_blind)?;
    writeln!(out, "{}", session.hint())?;

    let mut lines = input.lines();
    while !session.round().is_over() {
        write!(out, "Guess: ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim().to_lowercase();

        match line.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                writeln!(out, "\nThanks for playing!")?;
                return Ok(());
            }
            "share" => {
                writeln!(
                    out,
                    "\n{}\n",
                    session.round().share_text(&options.label, options.color_blind)
                )?;
                continue;
            }
            _ => {}
        }

        match session.submit(&line, catalog) {
            Ok(outcome) => {
                writeln!(out)?;
                print_board(out, session.round(), options.color_blind)?;
                let hint = match outcome {
                    GuessOutcome::Won => session.hint().green().bold(),
                    GuessOutcome::Lost => session.hint().red().bold(),
                    GuessOutcome::BonusGuess => session.hint().yellow().bold(),
                    GuessOutcome::FoundTarget(_) | GuessOutcome::Continue => {
                        session.hint().normal()
                    }
                };
                writeln!(out, "{hint}")?;
            }
            Err(_) => writeln!(out, "{}", session.hint().red())?,
        }
    }

    if session.round().is_over() {
        writeln!(
            out,
            "\n{}",
            session.round().share_text(&options.label, options.color_blind)
        )?;
    }
    Ok(())
}

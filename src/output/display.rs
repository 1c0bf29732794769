//! Display functions for command results

use super::formatters::{format_clue_row, format_keyboard};
use crate::commands::{PuzzleReport, VerifyStatistics};
use crate::game::Round;
use colored::Colorize;
use std::io::{self, Write};

/// Write the board: played rows, empty rows up to the limit, then the keyboard
///
/// # Errors
/// Returns an error if writing fails.
pub fn print_board<W: Write>(out: &mut W, round: &Round, color_blind: bool) -> io::Result<()> {
    let rows = round.clue_rows();
    let opening = round.puzzle().initial_guesses.len();

    for i in 0..round.board_rows() {
        let tag = if i >= round.max_guesses() {
            "bonus!".yellow().bold()
        } else if i < opening {
            "start".bright_black()
        } else {
            "".normal()
        };
        match rows.get(i) {
            Some(row) => writeln!(out, "  {}  {tag}", format_clue_row(row, color_blind))?,
            None => writeln!(out, "  {}  {tag}", " · ".repeat(5).bright_black())?,
        }
    }

    writeln!(out)?;
    for (indent, row) in format_keyboard(&round.letter_aggregate(), color_blind)
        .iter()
        .enumerate()
    {
        writeln!(out, "  {}{row}", " ".repeat(indent))?;
    }
    writeln!(out)
}

/// Print a generated puzzle; targets only appear with `cheat`
pub fn print_puzzle_report(report: &PuzzleReport, cheat: bool, color_blind: bool) {
    if let Err(e) = write_puzzle_report(&mut io::stdout(), report, cheat, color_blind) {
        eprintln!("Error: {e}");
    }
}

/// Write a generated puzzle; targets only appear with `cheat`
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_puzzle_report<W: Write>(
    out: &mut W,
    report: &PuzzleReport,
    cheat: bool,
    color_blind: bool,
) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "{} (seed {})",
        report.label.bright_yellow().bold(),
        report.seed
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    for (guess, clues) in &report.opening {
        writeln!(
            out,
            "\nOpening guess {}: {}  {}",
            guess.to_uppercase().bold(),
            format_clue_row(clues, color_blind),
            clues.to_emoji(color_blind)
        )?;
        writeln!(out, "  {}", clues.describe().bright_black())?;
    }

    if cheat {
        writeln!(
            out,
            "\nTargets: {} {}",
            report.targets[0].to_uppercase().green().bold(),
            report.targets[1].to_uppercase().green().bold()
        )?;
        writeln!(out, "Draws:   {}", report.draws)?;
    } else {
        writeln!(out, "\nPass --cheat to reveal the targets.")?;
    }
    writeln!(out)
}

/// Print verify statistics
pub fn print_verify_statistics(stats: &VerifyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Verify Results ");
    println!("{}", "═".repeat(70));

    println!("\n{}", "Overall".bright_cyan().bold());
    println!(
        "  Seeds checked:  {} (from {})",
        stats.checked, stats.first_seed
    );
    let pass_rate = if stats.checked == 0 {
        0.0
    } else {
        stats.passed() as f64 / stats.checked as f64 * 100.0
    };
    println!(
        "  Passed:         {} {}",
        stats.passed(),
        format!("({pass_rate:.1}%)").green()
    );
    if !stats.failures.is_empty() {
        println!(
            "  Failed:         {}",
            stats.failures.len().to_string().red().bold()
        );
    }
    println!(
        "  Total time:     {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n{}", "Generator Draws".bright_cyan().bold());
    println!(
        "  Average:        {}",
        format!("{:.1}", stats.average_draws).bright_yellow().bold()
    );
    println!("  Min / max:      {} / {}", stats.min_draws, stats.max_draws);
    if let Some((seed, draws)) = stats.hardest_seed {
        println!("  Hardest seed:   {seed} ({draws} draws)");
    }

    if !stats.frequent_targets.is_empty() {
        println!("\n{}", "Most Frequent Targets".bright_cyan().bold());
        for (word, count) in stats.frequent_targets.iter().take(5) {
            println!("  {}: {count} times", word.to_uppercase());
        }
    }

    if !stats.failures.is_empty() {
        println!("\n{}", "Failures".red().bold());
        for failure in stats.failures.iter().take(10) {
            println!("  seed {}: {}", failure.seed, failure.reason);
        }
        if stats.failures.len() > 10 {
            println!("  ... and {} more", stats.failures.len() - 10);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Clues, Puzzle, Word};

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn board(round: &Round) -> String {
        let mut out = Vec::new();
        print_board(&mut out, round, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn board_has_a_line_per_row_plus_keyboard() {
        let puzzle = Puzzle {
            targets: [w("north"), w("bleak")],
            initial_guesses: vec![w("train")],
        };
        let round = Round::new(puzzle, 6);
        let text = board(&round);

        // 6 rows, blank, 3 keyboard rows, blank
        assert_eq!(text.lines().count(), 11);
        assert!(text.contains("start"));
        assert!(!text.contains("bonus!"));
    }

    #[test]
    fn bonus_row_is_tagged() {
        let puzzle = Puzzle {
            targets: [w("north"), w("bleak")],
            initial_guesses: vec![w("train")],
        };
        let catalog = crate::wordlists::Catalog::new(
            &["north", "bleak", "train", "crisp", "gravy", "fight", "plumb"],
            &[""; 0],
            "plumb",
        )
        .unwrap();
        let mut round = Round::new(puzzle, 3);
        round.submit("crisp", &catalog).unwrap();
        round.submit("north", &catalog).unwrap();
        assert!(round.bonus_guess_available());

        let text = board(&round);
        assert_eq!(text.lines().filter(|l| l.contains("bonus!")).count(), 1);
    }

    fn report_text(cheat: bool) -> String {
        let targets = [w("north"), w("bleak")];
        let opening = w("train");
        let report = PuzzleReport {
            label: "xordle #3".to_string(),
            seed: 3,
            targets: ["north".to_string(), "bleak".to_string()],
            opening: vec![("train".to_string(), Clues::composite(&opening, &targets))],
            draws: 17,
        };
        let mut out = Vec::new();
        write_puzzle_report(&mut out, &report, cheat, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn puzzle_report_names_the_opening_guess() {
        let text = report_text(false);
        assert!(text.contains("TRAIN"));
        assert!(text.contains("T elsewhere"));
        assert!(!text.contains("NORTH"));
        assert!(text.contains("--cheat"));
    }

    #[test]
    fn cheat_reveals_targets_and_draws() {
        let text = report_text(true);
        assert!(text.contains("NORTH"));
        assert!(text.contains("BLEAK"));
        assert!(text.contains("Draws:   17"));
    }
}

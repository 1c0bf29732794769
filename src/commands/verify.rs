//! Verify puzzles - generator sweep over a range of seeds
//!
//! Generates the puzzle for every seed in the range and checks that each one
//! obeys the puzzle rules and is reproducible.

use crate::core::{PuzzleGenerator, is_good_initial_guess, is_valid_clue_pair};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// A seed whose puzzle broke a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedFailure {
    pub seed: u32,
    pub reason: String,
}

/// Statistics from verifying a range of seeds
#[derive(Debug)]
pub struct VerifyStatistics {
    pub first_seed: u32,
    pub checked: usize,
    pub failures: Vec<SeedFailure>,
    pub total_time: Duration,
    pub average_draws: f64,
    pub min_draws: usize,
    pub max_draws: usize,
    pub hardest_seed: Option<(u32, usize)>,
    /// Targets that appeared most often, most frequent first
    pub frequent_targets: Vec<(String, usize)>,
}

impl VerifyStatistics {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.checked - self.failures.len()
    }
}

struct SeedCheck {
    seed: u32,
    draws: usize,
    targets: [String; 2],
}

/// Check the puzzle generated for one seed; the error names the broken rule
fn check_seed(generator: &PuzzleGenerator<'_>, seed: u32) -> Result<SeedCheck, String> {
    let generated = generator.generate(seed).map_err(|e| e.to_string())?;
    let again = generator.generate(seed).map_err(|e| e.to_string())?;
    if generated != again {
        return Err("puzzle is not reproducible".to_string());
    }

    let puzzle = &generated.puzzle;
    let [first, second] = &puzzle.targets;
    if !is_valid_clue_pair(first, second) {
        return Err(format!("targets {first} and {second} overlap"));
    }

    let [opening] = puzzle.initial_guesses.as_slice() else {
        return Err(format!(
            "expected one opening guess, got {}",
            puzzle.initial_guesses.len()
        ));
    };
    if puzzle.is_target(opening) {
        return Err(format!("opening guess {opening} is a target"));
    }
    if !is_good_initial_guess(&puzzle.targets, opening) {
        return Err(format!("opening guess {opening} gives too much away"));
    }

    Ok(SeedCheck {
        seed,
        draws: generated.draws,
        targets: [first.text().to_string(), second.text().to_string()],
    })
}

/// Verify `count` seeds starting at `first_seed`
///
/// Seeds are checked in parallel; the progress bar is hidden when
/// `show_progress` is false.
#[must_use]
pub fn run_verify(
    generator: &PuzzleGenerator<'_>,
    first_seed: u32,
    count: u32,
    show_progress: bool,
) -> VerifyStatistics {
    let seeds = first_seed..first_seed.saturating_add(count);

    let pb = if show_progress {
        ProgressBar::new(seeds.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message("generating");

    let total_start = Instant::now();

    let mut results: Vec<(u32, Result<SeedCheck, String>)> = seeds
        .into_par_iter()
        .map(|seed| {
            let result = check_seed(generator, seed);
            pb.inc(1);
            (seed, result)
        })
        .collect();
    results.sort_by_key(|(seed, _)| *seed);

    pb.finish_with_message("Complete!");
    let total_time = total_start.elapsed();

    let mut failures = Vec::new();
    let mut passed = Vec::new();
    for (seed, result) in results.iter() {
        match result {
            Ok(check) => passed.push(check),
            Err(reason) => {
                debug!("seed {seed} failed: {reason}");
                failures.push(SeedFailure {
                    seed: *seed,
                    reason: reason.clone(),
                });
            }
        }
    }

    let total_draws: usize = passed.iter().map(|check| check.draws).sum();
    let average_draws = if passed.is_empty() {
        0.0
    } else {
        total_draws as f64 / passed.len() as f64
    };
    let min_draws = passed.iter().map(|check| check.draws).min().unwrap_or(0);
    let max_draws = passed.iter().map(|check| check.draws).max().unwrap_or(0);
    let hardest_seed = passed
        .iter()
        .max_by_key(|check| check.draws)
        .map(|check| (check.seed, check.draws));

    let mut target_counts: FxHashMap<&str, usize> = FxHashMap::default();
    for target in passed.iter().flat_map(|check| check.targets.iter()) {
        *target_counts.entry(target.as_str()).or_insert(0) += 1;
    }
    let mut frequent_targets: Vec<(String, usize)> = target_counts
        .into_iter()
        .map(|(word, n)| (word.to_string(), n))
        .collect();
    frequent_targets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    frequent_targets.truncate(10);

    VerifyStatistics {
        first_seed,
        checked: results.len(),
        failures,
        total_time,
        average_draws,
        min_draws,
        max_draws,
        hardest_seed,
        frequent_targets,
    }
}

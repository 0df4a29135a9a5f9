//! Runs the age calculation over a record set in each execution mode and
//! reports how long each one took.

use crate::age::{AgeCalculator, SharedWriter};
use crate::config::{Config, Mode};
use crate::error::AppError;
use crate::pool::WorkerPool;
use crate::record::{NameAndAge, Scientist};
use colored::Colorize;
use rayon::prelude::*;
use std::io::Write;
use std::sync::PoisonError;
use std::time::{Duration, Instant};

/// Outcome of one execution mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeReport {
    pub mode: Mode,
    pub results: Vec<NameAndAge>,
    pub elapsed: Duration,
}

/// One record after another on the calling thread.
pub fn run_serial(
    records: &[Scientist],
    calc: &AgeCalculator,
) -> Result<Vec<NameAndAge>, AppError> {
    records.iter().map(|s| calc.transform(s)).collect()
}

/// Fan the records out over `pool`; results come back in input order.
pub fn run_parallel(
    records: &[Scientist],
    calc: &AgeCalculator,
    pool: &WorkerPool,
) -> Result<Vec<NameAndAge>, AppError> {
    pool.try_map(records, |s| calc.transform(s))
}

/// Same contract as [`run_parallel`], on a dedicated rayon pool.
pub fn run_rayon(
    records: &[Scientist],
    calc: &AgeCalculator,
    workers: usize,
) -> Result<Vec<NameAndAge>, AppError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("rayon-{}", i))
        .build()?;

    pool.install(|| records.par_iter().map(|s| calc.transform(s)).collect())
}

/// Run `f` and measure wall-clock time.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

pub fn run_mode(
    mode: Mode,
    records: &[Scientist],
    calc: &AgeCalculator,
    workers: usize,
) -> Result<ModeReport, AppError> {
    let (results, elapsed) = match mode {
        Mode::Serial => timed(|| run_serial(records, calc)),
        Mode::Parallel => {
            let pool = WorkerPool::new(workers)?;
            timed(|| run_parallel(records, calc, &pool))
        }
        Mode::Rayon => timed(|| run_rayon(records, calc, workers)),
    };

    Ok(ModeReport {
        mode,
        results: results?,
        elapsed,
    })
}

/// Pretty-printed JSON list of results.
pub fn render(results: &[NameAndAge]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(results)?)
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Time to complete: {:.2}s", elapsed.as_secs_f64())
}

fn emit(out: &SharedWriter, text: &str) -> Result<(), AppError> {
    let mut out = out.lock().unwrap_or_else(PoisonError::into_inner);
    writeln!(out, "{}", text)?;
    Ok(())
}

/// Run every configured mode over `records`.
///
/// Headers, results and timings go to `out`, and so do the per-record
/// progress lines unless `config.quiet` is set. The lock is only held per
/// line, so workers can write while a mode is running.
pub fn run_all(
    config: &Config,
    records: &[Scientist],
    out: &SharedWriter,
) -> Result<Vec<ModeReport>, AppError> {
    let mut calc = AgeCalculator::new(config.reference_year, config.delay);
    if !config.quiet {
        calc = calc.with_progress(out.clone());
    }
    let mut reports = Vec::with_capacity(config.modes.len());

    for &mode in &config.modes {
        emit(out, &format!("\n{}", mode.title().bold()))?;
        let report = run_mode(mode, records, &calc, config.workers)?;
        emit(out, &render(&report.results)?)?;
        emit(out, &format!("\n{}\n", format_elapsed(report.elapsed).green()))?;
        reports.push(report);
    }

    Ok(reports)
}

//! The per-record unit of work.
//!
//! `AgeCalculator::transform` stands in for an I/O- or CPU-bound job: it
//! blocks the current thread for a delay, then derives the scientist's age
//! relative to a reference year.

use crate::error::AppError;
use crate::record::{NameAndAge, Scientist};
use std::io::Write;
use std::process;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

/// Output shared between the driver and every worker thread.
pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

type DelayFn = Arc<dyn Fn(&Scientist) -> Duration + Send + Sync>;

#[derive(Clone)]
pub struct AgeCalculator {
    reference_year: i32,
    delay: DelayFn,
    progress: Option<SharedWriter>,
}

impl AgeCalculator {
    /// Same fixed delay for every record, no progress output.
    pub fn new(reference_year: i32, delay: Duration) -> Self {
        AgeCalculator {
            reference_year,
            delay: Arc::new(move |_| delay),
            progress: None,
        }
    }

    /// Per-record delay, e.g. to make some records finish before others.
    pub fn with_delay_by<F>(mut self, delay: F) -> Self
    where
        F: Fn(&Scientist) -> Duration + Send + Sync + 'static,
    {
        self.delay = Arc::new(delay);
        self
    }

    /// Write a start and a done line per record to `out`.
    pub fn with_progress(mut self, out: SharedWriter) -> Self {
        self.progress = Some(out);
        self
    }

    pub fn transform(&self, scientist: &Scientist) -> Result<NameAndAge, AppError> {
        thread::sleep((self.delay)(scientist));
        self.progress("working record", scientist)?;

        let age = self
            .reference_year
            .checked_sub(scientist.born)
            .ok_or_else(|| AppError::AgeOutOfRange {
                name: scientist.name.to_string(),
                reference_year: self.reference_year,
                born: scientist.born,
            })?;
        let result = NameAndAge {
            name: scientist.name.to_string(),
            age,
        };

        self.progress("done processing record", scientist)?;
        Ok(result)
    }

    fn progress(&self, what: &str, scientist: &Scientist) -> Result<(), AppError> {
        let Some(out) = &self.progress else {
            return Ok(());
        };
        let mut out = out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{}", progress_line(what, scientist))?;
        Ok(())
    }
}

/// `Process <pid> [<thread>] <what> <name>` for the calling thread.
pub fn progress_line(what: &str, scientist: &Scientist) -> String {
    format!(
        "Process {} [{}] {} {}",
        process::id(),
        worker_name(),
        what,
        scientist.name
    )
}

/// Name of the thread running the current job.
pub fn worker_name() -> String {
    thread::current().name().unwrap_or("unnamed").to_string()
}

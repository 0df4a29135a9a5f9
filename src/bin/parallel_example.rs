//! Serial vs. parallel execution of a slow per-record job.
//!
//! Run with: cargo run --bin parallel_example [-- path/to/config.toml]

use parallel_ages::{run_all, AppError, Config, SharedWriter, SCIENTISTS};
use std::env;
use std::io;
use std::sync::{Arc, Mutex};

fn main() -> Result<(), AppError> {
    let config = match env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let stdout: SharedWriter = Arc::new(Mutex::new(io::stdout()));
    run_all(&config, &SCIENTISTS, &stdout)?;
    Ok(())
}

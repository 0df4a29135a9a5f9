//! # Serial vs. parallel execution
//!
//! Computes the ages of a handful of scientists, once record by record and
//! once through a worker pool, with a deliberate delay per record so the
//! difference in wall-clock time is easy to see.
//!
//! ## Modules
//! - `record`: the fixed dataset and the derived `NameAndAge` result
//! - `age`: the delayed per-record job
//! - `pool`: a scoped worker pool whose `map` keeps input order
//! - `driver`: serial, pooled and rayon runs plus timing/reporting
//! - `config`: optional TOML settings

pub mod age;
pub mod config;
pub mod driver;
pub mod error;
pub mod pool;
pub mod record;

pub use age::{AgeCalculator, SharedWriter};
pub use config::{Config, Mode};
pub use driver::{run_all, run_parallel, run_rayon, run_serial, ModeReport};
pub use error::AppError;
pub use pool::{PoolError, WorkerPool};
pub use record::{NameAndAge, Scientist, SCIENTISTS};

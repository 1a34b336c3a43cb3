//! Prelude module for convenient imports
//!
//! This module provides the most commonly used types and functions for
//! working with Springboard. Import everything from this module for
//! quick access:
//!
//! ```
//! use springboard::prelude::*;
//!
//! fn countdown(n: u64) -> Step<u64> {
//!     if n == 0 {
//!         Step::Done(0)
//!     } else {
//!         Step::more(move || countdown(n - 1))
//!     }
//! }
//!
//! assert_eq!(run(countdown(10_000)), 0);
//! ```

// Trampoline core
pub use crate::trampoline::{run, run_with, run_with_stats, try_run, DriveStats, FallibleStep, Step, Thunk};

// Error handling
pub use crate::error::{Error, Result};

// Cooperative stepping
pub use crate::scheduler::{RunReport, StepLoop, StepLoopStats, Stepper, Turn};

// Algorithms
pub use crate::factorial::{factorial, factorial_bounded};
pub use crate::nested::{flatten, from_json_str, read_nested_file, Nested};
pub use crate::prime_scan::{scan_primes, LogSink, MemorySink, PrimeScan, RenderSink, ScanEvent};
pub use crate::primes::is_prime;

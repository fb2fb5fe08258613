//! `mltree` is the command line front-end of a maximum-likelihood
//! phylogenetic tree tool.
//!
//! This crate owns everything between the raw argument list and a validated
//! run configuration:
//! * a fixed, closed schema of long-form options (no short flags, no runtime
//!   registration),
//! * a resolver that seeds defaults, coerces each option value, and enforces
//!   the cross-option invariants (one command per run, mandatory inputs per
//!   command),
//! * the usage screen describing the schema.
//!
//! It deliberately does not own the science: likelihood evaluation, tree
//! search and model optimization consume the resolved [`Options`] as a pure
//! data contract.
//!
//! # Usage
//! ```no_run
//! use mltree::resolve;
//!
//! let options = resolve(&["--search", "--msa", "primates.fa", "--threads", "4"])?;
//! assert_eq!(options.num_threads, 4);
//! # Ok::<(), mltree::ResolveError>(())
//! ```
//!
//! # Semantics
//! * Options are scanned left to right; a repeated option silently overrides
//!   earlier occurrences (last value wins). This is a documented part of the
//!   contract, not an accident.
//! * With no command flag, the run defaults to `--search` when any argument
//!   was supplied and `--help` otherwise.
//! * Toggles (`--pat-comp`, `--tip-inner`, `--opt-model`, `--opt-branches`,
//!   `--prob-msa`) are on when present; only an explicit value of `off`
//!   (case-insensitive) disables them.
//! * Malformed syntax (an unknown option, a bare non-option token, a missing
//!   required value) is fatal at the command line surface: the process exits
//!   with a failure status and no configuration is produced. Semantic
//!   violations are ordinary typed errors.
//!
//! # Features
//! * `unit_test`: expose the in-memory [`ui::UserInterface`] implementation
//!   for downstream testing.
//! * `tracing_debug`: emit `tracing` debug events while resolving.
#![deny(missing_docs)]

mod constant;
mod probe;
mod schema;

pub mod cli;
/// The run configuration and its enumerations.
pub mod model;
pub mod resolver;
/// The token scanner and its syntax errors.
pub mod scanner;
pub mod ui;
pub mod usage;

pub use model::{BranchLinkage, Command, Options, SimdKernel, StartingTree};
pub use resolver::{resolve, ResolveError};
pub use scanner::ScanError;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

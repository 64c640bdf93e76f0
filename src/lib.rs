//! # listfold
//!
//! Left-fold iteration over immutable sequences, plus a small workload that
//! uses it to build a series of sequentially halved quantities.
//!
//! ## Usage
//!
//! ```bash
//! listfold [--initial 1000] [--steps 10] [--divisor 2] [--format text|json|csv|markdown]
//! ```
//!
//! ## Modules
//!
//! - `sequence` - Immutable ordered sequences and numeric range generation
//! - `series` - List-shaped accumulator with explicit `last()` access
//! - `fold` - The fold primitive: `iterate` and `try_iterate`
//! - `halving` - Sequentially halved quantities built on the fold
//! - `report` - Text, JSON, CSV and Markdown rendering of halving results
//! - `config` - TOML configuration with environment and CLI overrides
//! - `error` - Crate-wide error type and error code registry
pub mod config;
pub mod error;
pub mod fold;
pub mod halving;
pub mod report;
pub mod sequence;
pub mod series;

#[cfg(test)]
mod property_tests;

pub use error::{ErrorCode, ListFoldError};
pub use fold::{iterate, try_fold_elements, try_iterate, CombinerError};
pub use sequence::{Sequence, SequenceError};
pub use series::{EmptyContainerError, Series};

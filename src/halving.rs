//! Sequentially halved quantities
//!
//! Starts from a seed quantity and, for each step, appends the previous
//! quantity divided by a fixed divisor. The step list is generated from zero
//! so that step `0` lines up with the seed; only steps `1..=n` are folded.

use crate::error::{ErrorCode, ListFoldError};
use crate::fold::try_iterate;
use crate::sequence::Sequence;
use crate::series::{EmptyContainerError, Series};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Largest number of halving steps accepted by [`HalvingConfig::validate`]
pub const MAX_STEPS: u32 = 10_000;

/// Parameters of a halving run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HalvingConfig {
    /// Quantity at step zero
    pub initial_quantity: f64,
    /// Number of halving iterations after the seed
    pub steps: u32,
    /// Value each quantity is divided by to get the next one
    pub divisor: f64,
}

impl Default for HalvingConfig {
    fn default() -> Self {
        Self {
            initial_quantity: 1000.0,
            steps: 10,
            divisor: 2.0,
        }
    }
}

impl HalvingConfig {
    pub fn validate(&self) -> Result<(), ListFoldError> {
        if !self.initial_quantity.is_finite() {
            return Err(ListFoldError::validation_with_code(
                ErrorCode::VALIDATION_NON_FINITE,
                format!(
                    "initial_quantity must be finite, got {}",
                    self.initial_quantity
                ),
                Some("initial_quantity".to_string()),
            ));
        }
        if !self.divisor.is_finite() || self.divisor == 0.0 {
            return Err(ListFoldError::validation_with_code(
                ErrorCode::VALIDATION_NON_FINITE,
                format!("divisor must be finite and non-zero, got {}", self.divisor),
                Some("divisor".to_string()),
            ));
        }
        if self.steps > MAX_STEPS {
            return Err(ListFoldError::validation_with_code(
                ErrorCode::VALIDATION_OUT_OF_RANGE,
                format!("steps must be at most {MAX_STEPS}, got {}", self.steps),
                Some("steps".to_string()),
            ));
        }
        Ok(())
    }
}

/// Steps of a halving run alongside the quantity at each step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalvingReport {
    pub steps: Vec<f64>,
    pub quantities: Vec<f64>,
}

impl HalvingReport {
    /// `(step, quantity)` pairs in step order
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.steps.iter().copied().zip(self.quantities.iter().copied())
    }

    pub fn final_quantity(&self) -> Option<f64> {
        self.quantities.last().copied()
    }
}

/// Combining function that appends the previous quantity divided by `divisor`
///
/// The accumulator must hold at least one value; an empty series fails with
/// [`EmptyContainerError`] rather than inventing a starting point.
pub fn halve_previous(
    divisor: f64,
) -> impl Fn(&f64, Series<f64>) -> Result<Series<f64>, EmptyContainerError> {
    move |_step: &f64, quantities: Series<f64>| {
        let previous = *quantities.last()?;
        Ok(quantities.appended(previous / divisor))
    }
}

/// Run the halving workload described by `config`
pub fn run(config: &HalvingConfig) -> Result<HalvingReport, ListFoldError> {
    config.validate()?;

    let steps = Sequence::range(0.0, f64::from(config.steps), 1.0)?;
    debug!(
        steps = steps.len(),
        initial_quantity = config.initial_quantity,
        divisor = config.divisor,
        "Starting halving run"
    );

    let quantities = try_iterate(
        &steps.skip(1),
        Series::single(config.initial_quantity),
        halve_previous(config.divisor),
    )?;

    let report = HalvingReport {
        steps: steps.to_vec(),
        quantities: quantities.into_vec(),
    };
    info!(
        final_quantity = report.final_quantity(),
        "Halving run complete"
    );
    Ok(report)
}

// micrograd-core/src/nn/losses/mse.rs

use crate::error::MicrogradError;
use crate::value::Value;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors:
/// 'sum' | 'mean'
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = MicrogradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(MicrogradError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Squared-error loss between network outputs and plain target scalars.
///
/// The loss is a graph node, so calling `backward()` on it populates the
/// gradients of every parameter that produced `outputs`.
#[derive(Debug, Clone)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Computes `Σ (yᵢ - tᵢ)²`, divided by `n` for `Reduction::Mean`.
    ///
    /// # Errors
    /// * `InputSizeMismatch` if `outputs` and `targets` differ in length.
    /// * `EmptyBatch` if both are empty.
    pub fn calculate(&self, outputs: &[Value], targets: &[f64]) -> Result<Value, MicrogradError> {
        if outputs.len() != targets.len() {
            return Err(MicrogradError::InputSizeMismatch {
                expected: outputs.len(),
                actual: targets.len(),
                operation: "MseLoss::calculate".to_string(),
            });
        }
        if outputs.is_empty() {
            return Err(MicrogradError::EmptyBatch);
        }

        let total: Value = outputs
            .iter()
            .zip(targets)
            .map(|(y, &t)| (y - t).pow(2.0))
            .sum();

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => total / outputs.len() as f64,
        })
    }
}

impl Default for MseLoss {
    fn default() -> Self {
        MseLoss::new(Reduction::Mean)
    }
}

/// Sum of squared errors, the loss used by the training demo.
pub fn sse_loss(outputs: &[Value], targets: &[f64]) -> Result<Value, MicrogradError> {
    MseLoss::new(Reduction::Sum).calculate(outputs, targets)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;

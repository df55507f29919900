use crate::error::MicrogradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;
use log::{debug, warn};

/// Plain stochastic gradient descent: `data ← data − lr · grad`.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    lr: f64,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: Handles to the parameter leaves to optimize, typically
    ///   `module.parameters()`.
    /// * `lr`: The learning rate.
    ///
    /// # Errors
    ///
    /// * `InvalidLearningRate` if `lr` is not finite and strictly positive.
    /// * `NonLeafParameter` if one of `params` is a derived value.
    pub fn new(params: impl IntoIterator<Item = Value>, lr: f64) -> Result<Self, MicrogradError> {
        if !lr.is_finite() || lr <= 0.0 {
            return Err(MicrogradError::InvalidLearningRate(lr));
        }
        let params: Vec<Value> = params.into_iter().collect();
        if let Some(bad) = params.iter().find(|p| !p.is_leaf()) {
            return Err(MicrogradError::NonLeafParameter { label: bad.label() });
        }
        Ok(SgdOptimizer { params, lr })
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), MicrogradError> {
        debug!("SgdOptimizer: step() over {} parameters, lr = {}", self.params.len(), self.lr);
        for (param_idx, param) in self.params.iter().enumerate() {
            let grad = param.grad();
            if !grad.is_finite() {
                warn!(
                    "SgdOptimizer: non-finite gradient {} for param {} ({:?})",
                    grad,
                    param_idx,
                    param.label()
                );
            }
            param.set_data(param.data() - self.lr * grad)?;
        }
        Ok(())
    }

    fn zero_grad(&mut self) {
        debug!("SgdOptimizer: zero_grad() called");
        for param in &self.params {
            param.zero_grad();
        }
    }
}

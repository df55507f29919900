use crate::error::MicrogradError;
use crate::nn::init::uniform_leaf;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A single unit computing `tanh(Σ wᵢ·xᵢ + b)`.
///
/// Weights and bias are leaves drawn from `U[-1, 1]`, labeled `w0..w{n-1}`
/// and `b`. A linear neuron skips the tanh.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    nonlin: bool,
}

impl Neuron {
    /// Creates a tanh neuron with `nin` inputs, initialized from the thread RNG.
    pub fn new(nin: usize) -> Self {
        Self::with_rng(nin, &mut rand::thread_rng())
    }

    /// Creates a tanh neuron drawing its parameters from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(nin: usize, rng: &mut R) -> Self {
        let weights = (0..nin)
            .map(|i| uniform_leaf(rng, format!("w{}", i)))
            .collect();
        let bias = uniform_leaf(rng, "b");
        Neuron {
            weights,
            bias,
            nonlin: true,
        }
    }

    /// Builds a tanh neuron around existing parameter leaves.
    pub fn from_parameters(weights: Vec<Value>, bias: Value) -> Self {
        Neuron {
            weights,
            bias,
            nonlin: true,
        }
    }

    /// Enables or disables the tanh activation.
    pub fn with_nonlin(mut self, nonlin: bool) -> Self {
        self.nonlin = nonlin;
        self
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn is_nonlinear(&self) -> bool {
        self.nonlin
    }

    /// Computes the neuron output for one input vector.
    ///
    /// # Errors
    /// `InputSizeMismatch` if `inputs.len() != self.nin()`.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, MicrogradError> {
        if inputs.len() != self.weights.len() {
            return Err(MicrogradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::activate".to_string(),
            });
        }
        let weighted_sum: Value = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(w, x)| w * x)
            .sum();
        let act = weighted_sum + &self.bias;
        Ok(if self.nonlin { act.tanh() } else { act })
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicrogradError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), w.clone()))
            .collect();
        named.push(("b".to_string(), self.bias.clone()));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;

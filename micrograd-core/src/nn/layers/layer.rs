use crate::error::MicrogradError;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A fully connected layer: `nout` neurons sharing the same `nin` inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    nin: usize,
}

impl Layer {
    pub fn new(nin: usize, nout: usize) -> Self {
        Self::with_rng(nin, nout, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(nin: usize, nout: usize, rng: &mut R) -> Self {
        let neurons = (0..nout).map(|_| Neuron::with_rng(nin, rng)).collect();
        Layer { neurons, nin }
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// `InputSizeMismatch` if the neurons do not all have `nin` inputs.
    pub fn from_neurons(nin: usize, neurons: Vec<Neuron>) -> Result<Self, MicrogradError> {
        if let Some(bad) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(MicrogradError::InputSizeMismatch {
                expected: nin,
                actual: bad.nin(),
                operation: "Layer::from_neurons".to_string(),
            });
        }
        Ok(Layer { neurons, nin })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicrogradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(Module::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, neuron)| {
                neuron
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neurons.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;

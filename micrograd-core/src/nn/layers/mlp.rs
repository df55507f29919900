use crate::error::MicrogradError;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::value::Value;
use log::debug;
use rand::Rng;

/// Multi-layer perceptron: layers chained so each one's outputs feed the next.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
    nin: usize,
}

impl Mlp {
    /// Creates a network with `nin` inputs and one layer per entry of `nouts`.
    ///
    /// # Errors
    /// `EmptyNetwork` if `nouts` is empty.
    pub fn new(nin: usize, nouts: &[usize]) -> Result<Self, MicrogradError> {
        Self::with_rng(nin, nouts, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        rng: &mut R,
    ) -> Result<Self, MicrogradError> {
        if nouts.is_empty() {
            return Err(MicrogradError::EmptyNetwork);
        }
        let mut layers = Vec::with_capacity(nouts.len());
        let mut fan_in = nin;
        for &nout in nouts {
            layers.push(Layer::with_rng(fan_in, nout, rng));
            fan_in = nout;
        }
        let mlp = Mlp { layers, nin };
        debug!(
            "Mlp: built {} -> {:?} with {} parameters",
            nin,
            nouts,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.layers.last().map_or(0, Layer::nout)
    }

    /// Lifts raw features into fresh leaves and runs the forward pass.
    pub fn predict(&self, features: &[f64]) -> Result<Vec<Value>, MicrogradError> {
        let inputs: Vec<Value> = features.iter().map(|&x| Value::new(x)).collect();
        self.forward(&inputs)
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicrogradError> {
        if inputs.len() != self.nin {
            return Err(MicrogradError::InputSizeMismatch {
                expected: self.nin,
                actual: inputs.len(),
                operation: "Mlp::forward".to_string(),
            });
        }
        let mut outputs = inputs.to_vec();
        for layer in &self.layers {
            outputs = layer.forward(&outputs)?;
        }
        Ok(outputs)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(Module::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layers.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;

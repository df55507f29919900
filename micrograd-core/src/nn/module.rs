use crate::error::MicrogradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// Modules only compose engine operators; they add no backward rules of their
/// own. Parameters are returned as shared `Value` handles, so an optimizer
/// reading or writing them acts on the live nodes of the module.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `inputs`: One value per input feature.
    ///
    /// # Returns
    /// The output values, or `MicrogradError::InputSizeMismatch` if `inputs`
    /// does not match the module's fan-in.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicrogradError>;

    /// Returns handles to all learnable parameters, including those of sub-modules.
    fn parameters(&self) -> Vec<Value>;

    /// Returns all learnable parameters along with hierarchical names
    /// (e.g. "layers.0.neurons.1.w0").
    fn named_parameters(&self) -> Vec<(String, Value)>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to 0.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}

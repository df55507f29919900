use crate::error::MicrogradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Reads the gradient accumulated on each managed parameter by the last
    /// backward pass and writes the updated value back into the parameter leaf.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `MicrogradError` otherwise.
    fn step(&mut self) -> Result<(), MicrogradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call it before each backward pass: gradients accumulate across passes.
    fn zero_grad(&mut self);
}

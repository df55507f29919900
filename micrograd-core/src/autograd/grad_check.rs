use crate::error::MicrogradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Gradient check input must be a leaf value. Input index: {input_index}")]
    InputNotLeaf { input_index: usize },

    #[error("Engine error during gradient check: {0}")]
    Engine(#[from] MicrogradError),
}

/// Checks analytical gradients against central finite differences.
///
/// `func` must rebuild its graph from `inputs` on every call: the inputs are
/// perturbed in place with [`Value::set_data`] between evaluations and
/// restored afterwards. Gradients of `inputs` are zeroed before the backward
/// pass, so their previous values are lost.
///
/// Two gradients match when they are relatively equal within `tolerance`
/// (also used as the absolute epsilon near zero).
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    // --- Initial Checks ---
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
    }

    // --- Analytical Gradients ---
    for input in inputs {
        input.zero_grad();
    }
    let output = func(inputs);
    output.backward();
    let analytical: Vec<f64> = inputs.iter().map(Value::grad).collect();

    // --- Numerical Gradients ---
    for (i, input) in inputs.iter().enumerate() {
        let original = input.data();

        input.set_data(original + epsilon)?;
        let loss_plus = func(inputs).data();
        input.set_data(original - epsilon)?;
        let loss_minus = func(inputs).data();
        input.set_data(original)?;

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical[i].is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical[i],
            });
        }
        if !relative_eq!(
            analytical[i],
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad: analytical[i],
                numerical_grad: numerical,
                difference: (analytical[i] - numerical).abs(),
            });
        }
    }

    Ok(())
}

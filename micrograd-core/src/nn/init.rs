use crate::error::MicrogradError;
use crate::value::Value;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Creates a labeled leaf drawn from `U[-1, 1]`.
pub fn uniform_leaf<R: Rng + ?Sized>(rng: &mut R, label: impl Into<String>) -> Value {
    let dist = Uniform::new_inclusive(-1.0, 1.0);
    Value::with_label(dist.sample(rng), label)
}

/// Re-draws every parameter from `U[low, high]`.
///
/// Operates in-place on the parameter leaves.
///
/// # Errors
/// `NonLeafMutation` if one of `params` is a derived value.
pub fn uniform_<R: Rng + ?Sized>(
    params: &[Value],
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<(), MicrogradError> {
    let dist = Uniform::new_inclusive(low, high);
    for param in params {
        param.set_data(dist.sample(rng))?;
    }
    Ok(())
}

/// Fills every parameter with the scalar value 0.
pub fn zeros_(params: &[Value]) -> Result<(), MicrogradError> {
    fill_(params, 0.0)
}

/// Fills every parameter with `value`.
pub fn fill_(params: &[Value], value: f64) -> Result<(), MicrogradError> {
    for param in params {
        param.set_data(value)?;
    }
    Ok(())
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file

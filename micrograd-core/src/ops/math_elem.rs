use crate::autograd::Operation;
use crate::value::Value;

pub fn pow_op(base: &Value, exponent: f64) -> Value {
    Value::from_op(
        base.data().powf(exponent),
        Operation::Pow {
            base: base.clone(),
            exponent,
        },
    )
}

pub fn exp_op(a: &Value) -> Value {
    Value::from_op(a.data().exp(), Operation::Exp(a.clone()))
}

pub fn tanh_op(a: &Value) -> Value {
    Value::from_op(a.data().tanh(), Operation::Tanh(a.clone()))
}

impl Value {
    /// Raises this value to a constant power.
    ///
    /// A negative base with a fractional exponent yields NaN, as `f64::powf` does.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    pub fn exp(&self) -> Value {
        exp_op(self)
    }

    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "math_elem_test.rs"]
mod tests;

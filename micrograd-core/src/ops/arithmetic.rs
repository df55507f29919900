use crate::autograd::Operation;
use crate::value::Value;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// --- Forward Operations ---

pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() + b.data(), Operation::Add(a.clone(), b.clone()))
}

pub fn sub_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() - b.data(), Operation::Sub(a.clone(), b.clone()))
}

pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() * b.data(), Operation::Mul(a.clone(), b.clone()))
}

/// Division follows IEEE-754: a zero divisor yields ±inf or NaN, not an error.
pub fn div_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() / b.data(), Operation::Div(a.clone(), b.clone()))
}

pub fn neg_op(a: &Value) -> Value {
    Value::from_op(-a.data(), Operation::Neg(a.clone()))
}

// --- Operator Overloads ---

/// Implements a binary operator for every owned/borrowed combination of
/// `Value`, plus `f64` on either side. Scalars are lifted into fresh
/// unlabeled leaves.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, &Value::new(rhs))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(&self, &Value::new(rhs))
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&Value::new(self), rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::new(self), &rhs)
            }
        }
    };
}

/// Compound assignment rebinds the left-hand side to a new node whose first
/// operand is the previous binding. The previous node is never mutated, so
/// anything that already captured it keeps seeing the same value.
macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Value> for Value {
            fn $method(&mut self, rhs: &Value) {
                *self = $op_fn(&*self, rhs);
            }
        }

        impl $trait<Value> for Value {
            fn $method(&mut self, rhs: Value) {
                *self = $op_fn(&*self, &rhs);
            }
        }

        impl $trait<f64> for Value {
            fn $method(&mut self, rhs: f64) {
                *self = $op_fn(&*self, &Value::new(rhs));
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl_assign_op!(AddAssign, add_assign, add_op);
impl_assign_op!(SubAssign, sub_assign, sub_op);
impl_assign_op!(MulAssign, mul_assign, mul_op);
impl_assign_op!(DivAssign, div_assign, div_op);

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

// --- Reductions ---

/// Left fold with `Add`. An empty iterator sums to a fresh `0.0` leaf.
impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(mut iter: I) -> Value {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, v| add_op(&acc, &v)),
            None => Value::new(0.0),
        }
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(mut iter: I) -> Value {
        match iter.next() {
            Some(first) => iter.fold(first.clone(), |acc, v| add_op(&acc, v)),
            None => Value::new(0.0),
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;

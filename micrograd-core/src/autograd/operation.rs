use crate::error::MicrogradError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// How a node was produced, together with the handles of its operands.
///
/// Keeping the operands inside the variant ties arity to the operation:
/// a `Tanh` node cannot carry two operands and an `Add` node cannot carry one.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Input or parameter. No operands.
    Leaf,
    Add(Value, Value),
    Sub(Value, Value),
    Mul(Value, Value),
    Div(Value, Value),
    Neg(Value),
    /// `base ^ exponent`. The exponent is a constant, not a graph node,
    /// so no gradient flows into it.
    Pow {
        base: Value,
        exponent: f64,
    },
    Exp(Value),
    Tanh(Value),
}

/// Operand-free tag of an [`Operation`], used for inspection and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Leaf,
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Pow,
    Exp,
    Tanh,
}

impl Operation {
    pub fn kind(&self) -> OpKind {
        match self {
            Operation::Leaf => OpKind::Leaf,
            Operation::Add(..) => OpKind::Add,
            Operation::Sub(..) => OpKind::Sub,
            Operation::Mul(..) => OpKind::Mul,
            Operation::Div(..) => OpKind::Div,
            Operation::Neg(_) => OpKind::Neg,
            Operation::Pow { .. } => OpKind::Pow,
            Operation::Exp(_) => OpKind::Exp,
            Operation::Tanh(_) => OpKind::Tanh,
        }
    }

    /// Returns the operand handles in order. Empty for leaves.
    pub fn operands(&self) -> Vec<Value> {
        match self {
            Operation::Leaf => Vec::new(),
            Operation::Add(a, b)
            | Operation::Sub(a, b)
            | Operation::Mul(a, b)
            | Operation::Div(a, b) => vec![a.clone(), b.clone()],
            Operation::Neg(a) | Operation::Exp(a) | Operation::Tanh(a) => vec![a.clone()],
            Operation::Pow { base, .. } => vec![base.clone()],
        }
    }

    /// Moves the operand handles out without touching their reference counts.
    pub(crate) fn into_operands(self) -> Vec<Value> {
        match self {
            Operation::Leaf => Vec::new(),
            Operation::Add(a, b)
            | Operation::Sub(a, b)
            | Operation::Mul(a, b)
            | Operation::Div(a, b) => vec![a, b],
            Operation::Neg(a) | Operation::Exp(a) | Operation::Tanh(a) => vec![a],
            Operation::Pow { base, .. } => vec![base],
        }
    }

    /// Applies the local chain rule of this operation.
    ///
    /// `grad` is the finalized gradient of the node holding this operation.
    /// Contributions are added to the operands' gradients, never assigned,
    /// so a node reached through several paths sums all of them.
    pub(crate) fn propagate(&self, grad: f64) {
        match self {
            Operation::Leaf => {}
            Operation::Add(a, b) => {
                a.accumulate_grad(grad);
                b.accumulate_grad(grad);
            }
            Operation::Sub(a, b) => {
                a.accumulate_grad(grad);
                b.accumulate_grad(-grad);
            }
            Operation::Mul(a, b) => {
                let (a_data, b_data) = (a.data(), b.data());
                a.accumulate_grad(grad * b_data);
                b.accumulate_grad(grad * a_data);
            }
            Operation::Div(a, b) => {
                let (a_data, b_data) = (a.data(), b.data());
                a.accumulate_grad(grad / b_data);
                b.accumulate_grad(-grad * a_data / (b_data * b_data));
            }
            Operation::Neg(a) => a.accumulate_grad(-grad),
            Operation::Pow { base, exponent } => {
                let local = exponent * base.data().powf(exponent - 1.0);
                base.accumulate_grad(grad * local);
            }
            Operation::Exp(a) => a.accumulate_grad(grad * a.data().exp()),
            Operation::Tanh(a) => {
                let t = a.data().tanh();
                a.accumulate_grad(grad * (1.0 - t * t));
            }
        }
    }
}

impl OpKind {
    /// Short symbol used by `Display` and the DOT exporter.
    pub fn symbol(&self) -> &'static str {
        match self {
            OpKind::Leaf => "",
            OpKind::Add => "+",
            OpKind::Sub => "-",
            OpKind::Mul => "*",
            OpKind::Div => "/",
            OpKind::Neg => "neg",
            OpKind::Pow => "pow",
            OpKind::Exp => "exp",
            OpKind::Tanh => "tanh",
        }
    }

    /// Number of operands a node of this kind carries.
    pub fn arity(&self) -> usize {
        match self {
            OpKind::Leaf => 0,
            OpKind::Neg | OpKind::Pow | OpKind::Exp | OpKind::Tanh => 1,
            OpKind::Add | OpKind::Sub | OpKind::Mul | OpKind::Div => 2,
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for OpKind {
    type Err = MicrogradError;

    /// Parses an operator symbol. Unknown symbols fail instead of mapping to a
    /// kind without a backward rule.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(OpKind::Leaf),
            "+" => Ok(OpKind::Add),
            "-" => Ok(OpKind::Sub),
            "*" => Ok(OpKind::Mul),
            "/" => Ok(OpKind::Div),
            "neg" => Ok(OpKind::Neg),
            "pow" | "^" => Ok(OpKind::Pow),
            "exp" => Ok(OpKind::Exp),
            "tanh" => Ok(OpKind::Tanh),
            other => Err(MicrogradError::UnsupportedOperation(format!(
                "Unknown operation symbol: {:?}",
                other
            ))),
        }
    }
}

#[cfg(test)]
#[path = "operation_test.rs"]
mod tests;

// src/value.rs

use crate::autograd::graph::{self, NodeId};
use crate::autograd::{OpKind, Operation};
use crate::error::MicrogradError;
use std::cell::{Ref, RefCell, RefMut};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Internal storage for a single vertex of the computation graph.
///
/// Wrapped in `Rc<RefCell<ValueData>>` by [`Value`] so that one logical node
/// can be the operand of many downstream nodes while its `grad` stays shared.
#[derive(Debug)]
pub(crate) struct ValueData {
    /// Scalar result of `op`, computed once at construction.
    pub(crate) data: f64,
    /// Accumulated derivative of the last backward root with respect to this node.
    pub(crate) grad: f64,
    /// How this node was produced. Carries the operand handles.
    pub(crate) op: Operation,
    /// Cosmetic name, only read by `Display`/`Debug` and the DOT exporter.
    pub(crate) label: Option<String>,
}

impl Drop for ValueData {
    // Dropping the last handle of a long chain would otherwise recurse once
    // per node. Operands owned only by this node are unlinked onto a work list
    // and released one at a time.
    fn drop(&mut self) {
        let mut pending = std::mem::replace(&mut self.op, Operation::Leaf).into_operands();
        while let Some(value) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(value.node) {
                let mut data = cell.into_inner();
                pending.extend(std::mem::replace(&mut data.op, Operation::Leaf).into_operands());
            }
        }
    }
}

/// A scalar node in the computation graph.
///
/// `Value` is a cheap handle: cloning it clones the `Rc`, not the node, so
/// every clone observes the same `grad` after a backward pass. Equality and
/// hashing are by identity. Two leaves holding the same number are still two
/// distinct vertices.
pub struct Value {
    /// Rc for shared ownership, RefCell for interior mutability of `grad`.
    pub(crate) node: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a new unlabeled leaf.
    pub fn new(data: f64) -> Self {
        Self::from_op(data, Operation::Leaf)
    }

    /// Creates a new labeled leaf, e.g. an input `x1` or a weight `w0`.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        let value = Self::new(data);
        value.set_label(label);
        value
    }

    /// Wraps the result of an operator. Used by the construction operators only.
    pub(crate) fn from_op(data: f64, op: Operation) -> Self {
        Value {
            node: Rc::new(RefCell::new(ValueData {
                data,
                grad: 0.0,
                op,
                label: None,
            })),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.node.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.node.borrow_mut()
    }

    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.node)
    }

    // --- Inspection API ---

    /// Returns the scalar held by this node.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Returns the gradient accumulated by the last backward pass(es).
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    /// Returns the tag of the operation that produced this node.
    pub fn op_kind(&self) -> OpKind {
        self.read_data().op.kind()
    }

    /// Returns handles to the immediate dependencies of this node, in operand order.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().op.operands()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.read_data().op, Operation::Leaf)
    }

    /// Stable identity of the underlying node for as long as it is alive.
    pub fn id(&self) -> usize {
        self.node_id() as usize
    }

    /// Compares the scalars held by two nodes. Identity is not involved.
    pub fn partial_cmp_data(&self, other: &Value) -> Option<Ordering> {
        self.data().partial_cmp(&other.data())
    }

    // --- Mutation API ---

    /// Overwrites the scalar of a leaf.
    ///
    /// Derived nodes are rejected: downstream nodes already captured their
    /// value, so changing it would desynchronize the graph.
    pub fn set_data(&self, data: f64) -> Result<(), MicrogradError> {
        let mut guard = self.write_data();
        if !matches!(guard.op, Operation::Leaf) {
            return Err(MicrogradError::NonLeafMutation {
                label: guard.label.clone(),
            });
        }
        guard.data = data;
        Ok(())
    }

    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Resets the gradient of this node only.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Builder-style variant of [`Value::set_label`] for use inside expressions.
    pub fn labeled(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    // --- Evaluation API ---

    /// Computes the gradient of `self` with respect to every reachable node.
    ///
    /// Seeds `self.grad` with 1.0 and accumulates into all upstream nodes.
    /// Gradients of upstream nodes are added to, so call
    /// [`Value::zero_grad_graph`] (or zero the parameters) between passes.
    pub fn backward(&self) {
        graph::backward(self);
    }

    /// Returns every node reachable from `self`, dependencies first, `self` last.
    pub fn topological_order(&self) -> Vec<Value> {
        graph::topological_sort(self)
    }

    /// Zeroes `grad` on every node reachable from `self`, `self` included.
    pub fn zero_grad_graph(&self) {
        for node in graph::topological_sort(self) {
            node.zero_grad();
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        Value {
            node: Rc::clone(&self.node), // Clone the Rc, not the ValueData
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.data())
    }
}

impl fmt::Debug for Value {
    // Operands are summarized by kind only; dumping them would walk the whole graph.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Value")
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("op", &guard.op.kind())
            .field("label", &guard.label)
            .finish()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "value_test.rs"]
mod tests;

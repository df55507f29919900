use crate::value::{Value, ValueData};
use log::{debug, trace};
use std::cell::RefCell;
use std::collections::HashSet;

/// Identity of a node: the address of its shared `RefCell<ValueData>`.
///
/// Stable for as long as one `Value` handle keeps the node alive, which the
/// traversal guarantees by holding clones in `order`.
pub(crate) type NodeId = *const RefCell<ValueData>;

/// State threaded through a single graph walk.
pub(crate) struct TraversalContext {
    visited: HashSet<NodeId>,
    order: Vec<Value>,
}

impl TraversalContext {
    pub(crate) fn new() -> Self {
        TraversalContext {
            visited: HashSet::new(),
            order: Vec::new(),
        }
    }

    /// Post-order depth-first walk from `root` along operand edges.
    ///
    /// Each node is appended once, after all of its operands. Iterative so
    /// that long chains of operations cannot exhaust the call stack.
    pub(crate) fn visit(&mut self, root: &Value) {
        // (node, operands_done)
        let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];
        while let Some((node, operands_done)) = stack.pop() {
            if operands_done {
                self.order.push(node);
                continue;
            }
            if !self.visited.insert(node.node_id()) {
                continue;
            }
            trace!("[topological_sort] Visiting node {:?}", node);
            let operands = node.operands();
            stack.push((node, true));
            // Reversed so that operand 0 is walked first.
            for operand in operands.into_iter().rev() {
                if !self.visited.contains(&operand.node_id()) {
                    stack.push((operand, false));
                }
            }
        }
    }

    pub(crate) fn into_order(self) -> Vec<Value> {
        self.order
    }
}

/// Returns every node reachable from `root`, dependencies first and `root` last.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut context = TraversalContext::new();
    context.visit(root);
    context.into_order()
}

/// Backward pass from `root`. See [`Value::backward`].
pub(crate) fn backward(root: &Value) {
    let order = topological_sort(root);
    debug!("backward() over {} reachable nodes", order.len());

    root.set_grad(1.0);
    for node in order.iter().rev() {
        // Clone the operation out so no borrow of `node` is held while its
        // operands are mutated.
        let (op, grad) = {
            let guard = node.read_data();
            (guard.op.clone(), guard.grad)
        };
        op.propagate(grad);
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;

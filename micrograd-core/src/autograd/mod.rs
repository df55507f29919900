//! Reverse-mode differentiation over the scalar graph.
//!
//! `operation` pairs every construction operator with its local derivative
//! rule, `graph` orders the nodes and drives the backward pass, and
//! `grad_check` validates analytical gradients against finite differences.

pub mod grad_check;
pub mod graph;
pub mod operation;

pub use operation::{OpKind, Operation};

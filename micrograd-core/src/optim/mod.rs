// micrograd-core/src/optim/mod.rs

//! Optimizers for training networks built on the engine.
//!
//! This module provides the `Optimizer` trait and plain step-wise gradient
//! descent (`SgdOptimizer`).

pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;

// Declare test module conditionally
#[cfg(test)]
mod sgd_test;

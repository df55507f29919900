// src/nn/mod.rs
// Neural network building blocks composed purely from engine operators.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use layers::{Layer, Mlp, Neuron};
pub use losses::{sse_loss, MseLoss, Reduction};
pub use module::Module;

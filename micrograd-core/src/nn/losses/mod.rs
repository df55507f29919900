// src/nn/losses/mod.rs

pub mod mse;

pub use mse::{sse_loss, MseLoss, Reduction};

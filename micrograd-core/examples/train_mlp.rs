//! # Training a small MLP with plain SGD
//!
//! Fits `MLP(3, [4, 4, 1])` to a 4-sample binary target set:
//! 1.  Forward pass over the whole dataset (`Mlp::predict`).
//! 2.  Sum of squared errors (`sse_loss`).
//! 3.  `zero_grad`, `backward`, then an `SgdOptimizer::step`.
//!
//! ## Running
//! `RUST_LOG=info cargo run --example train_mlp`
//!

use micrograd_core::nn::{sse_loss, Mlp, Module};
use micrograd_core::optim::{Optimizer, SgdOptimizer};
use micrograd_core::{MicrogradError, Value};

const EPOCHS: usize = 50;
const LEARNING_RATE: f64 = 0.05;

fn main() -> Result<(), MicrogradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mlp = Mlp::new(3, &[4, 4, 1])?;
    log::info!("MLP created with {} parameters", mlp.num_parameters());
    let mut optimizer = SgdOptimizer::new(mlp.parameters(), LEARNING_RATE)?;

    for epoch in 0..EPOCHS {
        let mut predictions: Vec<Value> = Vec::with_capacity(xs.len());
        for x in &xs {
            predictions.extend(mlp.predict(x)?);
        }
        let loss = sse_loss(&predictions, &ys)?;

        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;

        if epoch % 5 == 0 || epoch == EPOCHS - 1 {
            log::info!("Epoch {:>3}: loss = {:.6}", epoch, loss.data());
        } else {
            log::debug!("Epoch {:>3}: loss = {:.6}", epoch, loss.data());
        }
    }

    for (x, y) in xs.iter().zip(ys) {
        let prediction = mlp.predict(x)?;
        log::info!("{:?} -> {:.4} (target {})", x, prediction[0].data(), y);
    }
    Ok(())
}

use micrograd_core::Value;

// Shared helpers for the integration tests.
// Added allow(dead_code) because usage across different test crates isn't detected easily.

/// Creates one labeled leaf per `(label, data)` pair.
#[allow(dead_code)]
pub fn leaves(specs: &[(&str, f64)]) -> Vec<Value> {
    specs
        .iter()
        .map(|&(label, data)| Value::with_label(data, label))
        .collect()
}

/// The 4-sample dataset used by the training tests and the demo.
#[allow(dead_code)]
pub fn toy_dataset() -> (Vec<[f64; 3]>, Vec<f64>) {
    let xs = vec![
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];
    (xs, ys)
}

/// Installs `env_logger` once so `RUST_LOG=debug cargo test` shows engine logs.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

//! # Exporting a computation graph to Graphviz
//!
//! Builds the classic single tanh neuron `o = tanh(x1·w1 + x2·w2 + b)`,
//! backpropagates through it and writes the annotated graph to `neuron.dot`.
//!
//! ## Running
//! `cargo run --example draw_graph && dot -Tsvg neuron.dot -o neuron.svg`
//!

use micrograd_core::viz::DotBuilder;
use micrograd_core::{MicrogradError, Value};

fn main() -> Result<(), MicrogradError> {
    env_logger::init();

    let x1 = Value::with_label(2.0, "x1");
    let x2 = Value::with_label(0.0, "x2");
    let w1 = Value::with_label(-3.0, "w1");
    let w2 = Value::with_label(1.0, "w2");
    let b = Value::with_label(6.881_373_587_019_543_2, "b");

    let x1w1 = (&x1 * &w1).labeled("x1*w1");
    let x2w2 = (&x2 * &w2).labeled("x2*w2");
    let sum = (&x1w1 + &x2w2).labeled("x1*w1 + x2*w2");
    let n = (&sum + &b).labeled("n");
    let o = n.tanh().labeled("o");
    o.backward();

    println!("o = {}", o);
    for v in [&x1, &w1, &x2, &w2, &b] {
        println!(
            "d o / d {} = {:.4}",
            v.label().unwrap_or_default(),
            v.grad()
        );
    }

    let path = "neuron.dot";
    DotBuilder::new().write_to_file(&o, path)?;
    println!("Graph written to {}", path);
    Ok(())
}

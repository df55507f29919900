use super::*;
use crate::autograd::OpKind;
use std::collections::HashSet;

#[test]
fn test_leaf_construction() {
    let v = Value::new(1.0);
    assert_eq!(v.data(), 1.0);
    assert_eq!(v.grad(), 0.0);
    assert!(v.is_leaf());
    assert_eq!(v.op_kind(), OpKind::Leaf);
    assert!(v.operands().is_empty());
    assert_eq!(v.label(), None);
}

#[test]
fn test_labels() {
    let v = Value::with_label(2.0, "x1");
    assert_eq!(v.label().as_deref(), Some("x1"));

    v.set_label("renamed");
    assert_eq!(v.label().as_deref(), Some("renamed"));

    let w = Value::from(3.0).labeled("w");
    assert_eq!(w.label().as_deref(), Some("w"));
    assert_eq!(w.data(), 3.0);
}

#[test]
fn test_set_data_on_leaf() -> Result<(), MicrogradError> {
    let v = Value::new(1.0);
    v.set_data(2.0)?;
    assert_eq!(v.data(), 2.0);
    Ok(())
}

#[test]
fn test_set_data_on_derived_value_is_rejected() {
    let a = Value::new(1.0);
    let b = (&a + 1.0).labeled("b");
    match b.set_data(10.0) {
        Err(MicrogradError::NonLeafMutation { label }) => assert_eq!(label.as_deref(), Some("b")),
        other => panic!("Expected NonLeafMutation, got {:?}", other),
    }
    assert_eq!(b.data(), 2.0);
}

#[test]
fn test_grad_setters() {
    let v = Value::new(1.0);
    v.set_grad(4.0);
    assert_eq!(v.grad(), 4.0);
    v.accumulate_grad(1.5);
    assert_eq!(v.grad(), 5.5);
    v.zero_grad();
    assert_eq!(v.grad(), 0.0);
}

#[test]
fn test_clone_shares_identity() {
    let a = Value::new(1.0);
    let alias = a.clone();
    alias.set_grad(3.0);
    assert_eq!(a.grad(), 3.0);
    assert_eq!(a, alias);
    assert_eq!(a.id(), alias.id());
}

#[test]
fn test_structurally_equal_leaves_are_distinct() {
    let a = Value::new(1.0);
    let b = Value::new(1.0);
    assert_ne!(a, b);

    let set: HashSet<Value> = [a.clone(), b.clone(), a.clone()].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_partial_cmp_data() {
    let a = Value::new(1.0);
    let b = Value::new(2.0);
    assert_eq!(a.partial_cmp_data(&b), Some(Ordering::Less));
    assert_eq!(b.partial_cmp_data(&a), Some(Ordering::Greater));
    assert_eq!(a.partial_cmp_data(&Value::new(1.0)), Some(Ordering::Equal));
    assert_eq!(a.partial_cmp_data(&Value::new(f64::NAN)), None);
}

#[test]
fn test_display_uses_two_decimals() {
    assert_eq!(Value::new(1.0).to_string(), "1.00");
    assert_eq!(Value::new(-0.126).to_string(), "-0.13");
    // -0.125 is an exact binary tie and rounds to even.
    assert_eq!(Value::new(-0.125).to_string(), "-0.12");
}

#[test]
fn test_debug_does_not_walk_operands() {
    let a = Value::with_label(1.0, "a");
    let b = &a * 2.0;
    let rendered = format!("{:?}", b);
    assert!(rendered.contains("Mul"));
    assert!(!rendered.contains("\"a\""));
}

#[test]
fn test_zero_grad_graph_resets_every_reachable_node() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    let c = &a * &b;
    let d = c.tanh();
    d.backward();
    assert_ne!(a.grad(), 0.0);

    d.zero_grad_graph();
    for node in [&a, &b, &c, &d] {
        assert_eq!(node.grad(), 0.0);
    }
}

use super::*;
use approx::assert_relative_eq;
use std::rc::Rc;

fn position(order: &[Value], node: &Value) -> usize {
    order
        .iter()
        .position(|v| v == node)
        .expect("node missing from topological order")
}

#[test]
fn test_topological_sort_puts_dependencies_first() {
    let a = Value::new(1.0);
    let b = Value::new(2.0);
    let c = &a * &b;
    let d = &c + &a;
    let e = d.tanh();

    let order = topological_sort(&e);
    assert_eq!(order.len(), 5);
    assert_eq!(order.last(), Some(&e));
    assert!(position(&order, &a) < position(&order, &c));
    assert!(position(&order, &b) < position(&order, &c));
    assert!(position(&order, &c) < position(&order, &d));
    assert!(position(&order, &a) < position(&order, &d));
    assert!(position(&order, &d) < position(&order, &e));
}

#[test]
fn test_topological_sort_visits_shared_node_once() {
    let a = Value::new(3.0);
    let b = &a + &a;
    let c = &b * &a;

    let order = topological_sort(&c);
    assert_eq!(order.len(), 3);
    assert_eq!(order.iter().filter(|v| **v == a).count(), 1);
}

#[test]
fn test_topological_sort_of_leaf() {
    let a = Value::new(3.0);
    let order = topological_sort(&a);
    assert_eq!(order, vec![a]);
}

#[test]
fn test_long_chain() {
    let x = Value::new(0.5);
    let mut y = x.clone();
    for _ in 0..200_000 {
        y = &y + 0.0;
    }
    // Leaves from the scalar lifts are reachable too.
    assert_eq!(topological_sort(&y).len(), 400_001);
    backward(&y);
    assert_relative_eq!(x.grad(), 1.0);

    drop(y);
    assert!(x.is_leaf());
    assert_eq!(Rc::strong_count(&x.node), 1);
}

#[test]
fn test_dropping_deep_chain_releases_nodes() {
    let x = Value::new(1.0);
    let mut y = x.tanh();
    for _ in 0..200_000 {
        y = y.tanh();
    }
    let weak = Rc::downgrade(&y.node);
    drop(y);
    assert!(weak.upgrade().is_none());
    assert_eq!(Rc::strong_count(&x.node), 1);
}

#[test]
fn test_dropping_root_keeps_shared_operands_alive() {
    let a = Value::with_label(2.0, "a");
    let shared = (&a * &a).labeled("shared");
    let root = shared.exp() + shared.tanh();
    drop(root);
    assert_eq!(shared.operands(), vec![a.clone(), a.clone()]);
    assert_eq!(shared.data(), 4.0);
    assert_eq!(Rc::strong_count(&shared.node), 1);
}

#[test]
fn test_backward_seeds_root_with_one() {
    let a = Value::new(2.0);
    let b = a.exp();
    b.set_grad(42.0);
    backward(&b);
    assert_eq!(b.grad(), 1.0);
    assert_relative_eq!(a.grad(), 2.0f64.exp());
}

#[test]
fn test_backward_on_leaf() {
    let a = Value::new(2.0);
    backward(&a);
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn test_backward_leaves_data_untouched() {
    let a = Value::new(2.0);
    let b = Value::new(-1.0);
    let c = (&a * &b).tanh();
    let before: Vec<f64> = topological_sort(&c).iter().map(Value::data).collect();
    backward(&c);
    let after: Vec<f64> = topological_sort(&c).iter().map(Value::data).collect();
    assert_eq!(before, after);
}

#[test]
fn test_unreachable_nodes_are_untouched() {
    let a = Value::new(2.0);
    let b = Value::new(5.0);
    let unrelated = &b * 3.0;
    let c = &a * 2.0;
    backward(&c);
    assert_relative_eq!(a.grad(), 2.0);
    assert_eq!(b.grad(), 0.0);
    assert_eq!(unrelated.grad(), 0.0);
}

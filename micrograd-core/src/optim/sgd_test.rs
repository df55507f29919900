#[cfg(test)]
mod tests {
    use crate::{
        error::MicrogradError,
        nn::{sse_loss, Mlp, Module},
        optim::optimizer_trait::Optimizer,
        optim::sgd::SgdOptimizer,
        value::Value,
    };
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sgd_basic_step() -> Result<(), MicrogradError> {
        let params = vec![Value::new(1.0), Value::new(2.0), Value::new(3.0)];
        let grads = [0.1, -0.2, 0.3];
        for (p, g) in params.iter().zip(grads) {
            p.set_grad(g);
        }
        let lr = 0.1;

        let mut optimizer = SgdOptimizer::new(params.clone(), lr)?;
        optimizer.step()?;

        for (i, p) in params.iter().enumerate() {
            let expected = (i as f64 + 1.0) - lr * grads[i];
            assert_relative_eq!(p.data(), expected, epsilon = 1e-12);
            // Gradients are left for the caller to clear.
            assert_eq!(p.grad(), grads[i]);
        }
        Ok(())
    }

    #[test]
    fn test_sgd_zero_grad() -> Result<(), MicrogradError> {
        let p = Value::new(1.0);
        p.set_grad(5.0);
        let mut optimizer = SgdOptimizer::new(vec![p.clone()], 0.5)?;
        optimizer.zero_grad();
        assert_eq!(p.grad(), 0.0);

        optimizer.step()?;
        assert_eq!(p.data(), 1.0);
        Ok(())
    }

    #[test]
    fn test_sgd_rejects_invalid_learning_rate() {
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let result = SgdOptimizer::new(vec![Value::new(1.0)], lr);
            assert!(
                matches!(result, Err(MicrogradError::InvalidLearningRate(_))),
                "lr = {} should be rejected",
                lr
            );
        }
    }

    #[test]
    fn test_sgd_rejects_derived_parameters() {
        let a = Value::new(1.0);
        let derived = (&a * 2.0).labeled("twice");
        match SgdOptimizer::new(vec![a, derived], 0.1) {
            Err(MicrogradError::NonLeafParameter { label }) => {
                assert_eq!(label.as_deref(), Some("twice"))
            }
            other => panic!("Expected NonLeafParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_sgd_steps_reduce_loss() -> Result<(), MicrogradError> {
        let mlp = Mlp::with_rng(2, &[3, 1], &mut StdRng::seed_from_u64(31))?;
        let xs = [[0.5, -1.0], [1.0, 1.0], [-0.5, 0.25]];
        let ys = [1.0, -1.0, 0.5];
        let mut optimizer = SgdOptimizer::new(mlp.parameters(), 0.05)?;

        let loss_of = |mlp: &Mlp| -> Result<Value, MicrogradError> {
            let mut outputs = Vec::with_capacity(xs.len());
            for x in &xs {
                outputs.extend(mlp.predict(x)?);
            }
            sse_loss(&outputs, &ys)
        };

        let initial = loss_of(&mlp)?.data();
        for _ in 0..20 {
            let loss = loss_of(&mlp)?;
            optimizer.zero_grad();
            loss.backward();
            optimizer.step()?;
        }
        let last = loss_of(&mlp)?.data();
        assert!(
            last < initial,
            "loss did not decrease: {} -> {}",
            initial,
            last
        );
        Ok(())
    }
}

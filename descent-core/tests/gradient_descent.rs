use descent_core::{
    test_functions::{Paraboloid, Rosenbrock},
    GradientDescent, NumericObjective, Objective,
};

#[test]
fn paraboloid_converges_to_origin() {
    // The classic smoke run: x² + y² from (0, 10), step 0.01.
    let solver = GradientDescent {
        step_size: 0.01,
        max_iters: 1_000_000,
        tol_grad: 1e-8,
        collect_trace: false,
    };

    let result = solver.minimize(&Paraboloid, vec![0.0, 10.0]).unwrap();

    assert!(result.converged);
    assert!(result.iters < 1_000_000);
    assert!(result.x[0].abs() < 1e-6);
    assert!(result.x[1].abs() < 1e-6);
    assert!(result.f < 1e-12);
}

#[test]
fn rosenbrock_minimization() {
    let obj = Rosenbrock { a: 1.0, b: 100.0 };
    let solver = GradientDescent {
        step_size: 1e-3,
        max_iters: 200_000,
        tol_grad: 1e-4,
        collect_trace: false,
    };

    let x0 = vec![-1.2, 1.0];
    let f0 = obj.value(&x0);
    let result = solver.minimize(&obj, x0).unwrap();

    // True minimizer is (1, 1).
    assert!(result.f < f0);
    assert!((result.x[0] - 1.0).abs() < 5e-2);
    assert!((result.x[1] - 1.0).abs() < 5e-2);
}

#[test]
fn finite_difference_gradient_drives_the_same_descent() {
    let solver = GradientDescent {
        step_size: 0.01,
        max_iters: 100_000,
        tol_grad: 1e-6,
        collect_trace: false,
    };

    // Only the value function is supplied, as in the original calling
    // convention; gradients come from central differences.
    let obj = NumericObjective::new(|x: &[f64]| x[0] * x[0] + x[1] * x[1]);
    let result = solver.minimize(&obj, vec![0.0, 10.0]).unwrap();

    assert!(result.converged);
    assert!(result.x[0].abs() < 1e-5);
    assert!(result.x[1].abs() < 1e-5);
}

#[test]
fn minimize_with_fn_accepts_closures() {
    let solver = GradientDescent {
        step_size: 0.1,
        max_iters: 1000,
        tol_grad: 1e-9,
        collect_trace: false,
    };

    let result = solver
        .minimize_with_fn(
            vec![0.0],
            |x| (x[0] - 3.0).powi(2),
            |x, grad| {
                grad[0] = 2.0 * (x[0] - 3.0);
            },
        )
        .unwrap();

    assert!(result.converged);
    assert!((result.x[0] - 3.0).abs() < 1e-6);
}

#[test]
fn respects_max_iters_and_step_size() {
    let value_fn = |x: &[f64]| {
        let d = x[0] - 3.0;
        d * d
    };
    let grad_fn = |x: &[f64], grad: &mut [f64]| {
        grad[0] = 2.0 * (x[0] - 3.0);
    };

    let short_small = GradientDescent {
        step_size: 0.01,
        max_iters: 1,
        tol_grad: 1e-12,
        collect_trace: false,
    }
    .minimize_with_fn(vec![0.0], value_fn, grad_fn)
    .unwrap();

    let short_large = GradientDescent {
        step_size: 0.1,
        max_iters: 1,
        tol_grad: 1e-12,
        collect_trace: false,
    }
    .minimize_with_fn(vec![0.0], value_fn, grad_fn)
    .unwrap();

    let long_run = GradientDescent {
        step_size: 0.1,
        max_iters: 200,
        tol_grad: 1e-9,
        collect_trace: false,
    }
    .minimize_with_fn(vec![0.0], value_fn, grad_fn)
    .unwrap();

    assert!(!short_small.converged);
    assert!(!short_large.converged);
    assert!(long_run.converged);
    assert_eq!(short_small.iters, 1);
    assert!(short_small.x[0] < short_large.x[0] && short_large.x[0] < 3.0);
    assert!(long_run.f < short_large.f);
}

#[test]
fn trace_records_every_executed_iteration() {
    let solver = GradientDescent {
        step_size: 0.1,
        max_iters: 10,
        tol_grad: 1e-12,
        collect_trace: true,
    };

    let result = solver.minimize(&Paraboloid, vec![5.0]).unwrap();

    assert!(!result.converged);
    let trace = result.trace.expect("trace requested");
    assert_eq!(trace.len(), 10);
    assert_eq!(trace[0].iter, 0);
    assert_eq!(trace[9].iter, 9);
    // Gradient norm shrinks monotonically on a well-conditioned quadratic.
    assert!(trace[9].grad_norm < trace[0].grad_norm);
    assert!(trace.iter().all(|row| row.step_size == 0.1));
}

#[test]
fn converged_run_includes_the_final_row() {
    let solver = GradientDescent {
        step_size: 0.4,
        max_iters: 1000,
        tol_grad: 1e-6,
        collect_trace: true,
    };

    let result = solver.minimize(&Paraboloid, vec![1.0]).unwrap();

    assert!(result.converged);
    let trace = result.trace.expect("trace requested");
    // One row per gradient evaluation, including the converged iteration.
    assert_eq!(trace.len(), result.iters + 1);
}

#[test]
fn result_serializes_without_trace_field_when_absent() {
    let solver = GradientDescent {
        step_size: 0.4,
        max_iters: 1000,
        tol_grad: 1e-6,
        collect_trace: false,
    };

    let result = solver.minimize(&Paraboloid, vec![1.0]).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert!(json.get("trace").is_none());
    assert_eq!(json["converged"], true);
}

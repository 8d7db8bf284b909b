use descent_core::{test_functions::Paraboloid, GradientDescent};

fn main() {
    let solver = GradientDescent {
        step_size: 0.01,
        max_iters: 1_000_000,
        tol_grad: 1e-8,
        collect_trace: false,
    };

    match solver.minimize(&Paraboloid, vec![0.0, 10.0]) {
        Ok(min) => println!(
            "converged={} x*={:?} f(x*)={:.3e}",
            min.converged, min.x, min.f
        ),
        Err(e) => eprintln!("error: {e}"),
    }
}

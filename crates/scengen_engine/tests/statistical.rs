//! Distributional acceptance tests.
//!
//! These run moderately sized Monte Carlo samples through the engine and
//! check them against closed-form laws: simulated Black-Scholes-Merton
//! terminal prices against the lognormal terminal distribution, and Gaussian
//! copula output against its target correlation. All sampling is seeded, so
//! the observed statistics are deterministic.

use scengen_engine::{Copula, GaussianCopula, ScenarioGenerator, ScenarioRng};
use scengen_models::distributions::normal_quantile;
use scengen_models::equity::BlackScholesMerton;
use statrs::distribution::ContinuousCDF;

/// One-sample Kolmogorov-Smirnov statistic of `samples` against `cdf`.
fn ks_statistic<F: Fn(f64) -> f64>(samples: &mut [f64], cdf: F) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).expect("samples are finite"));
    let n = samples.len() as f64;

    let mut d = 0.0_f64;
    for (i, &x) in samples.iter().enumerate() {
        let f = cdf(x);
        let above = (i + 1) as f64 / n - f;
        let below = f - i as f64 / n;
        d = d.max(above).max(below);
    }
    d
}

/// Asymptotic Kolmogorov p-value for statistic `d` over `n` samples.
fn ks_p_value(d: f64, n: usize) -> f64 {
    let sqrt_n = (n as f64).sqrt();
    let lambda = (sqrt_n + 0.12 + 0.11 / sqrt_n) * d;

    let mut p = 0.0;
    for j in 1..=100 {
        let sign = if j % 2 == 1 { 1.0 } else { -1.0 };
        let jf = j as f64;
        p += sign * (-2.0 * jf * jf * lambda * lambda).exp();
    }
    (2.0 * p).clamp(0.0, 1.0)
}

fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    cov / (var_x * var_y).sqrt()
}

#[test]
fn simulated_terminal_prices_match_lognormal_law() {
    let model = BlackScholesMerton::new(0.01, 0.02, 0.15, 100.0).unwrap();
    let mut generator =
        ScenarioGenerator::with_rng(1.0, 30.0, model, ScenarioRng::from_seed(2024)).unwrap();
    let distribution = generator.price_distribution().unwrap();

    // The exact log-space step makes every terminal value lognormal
    // regardless of the step size, so a single annual grid suffices.
    let mut terminals: Vec<f64> = (0..10_000)
        .map(|_| *generator.path().last().expect("path is non-empty"))
        .collect();

    let d = ks_statistic(&mut terminals, |x| distribution.cdf(x));
    let p = ks_p_value(d, terminals.len());
    assert!(
        p > 0.05,
        "KS test rejected the terminal distribution: D = {d}, p = {p}"
    );
}

#[test]
fn gaussian_copula_recovers_target_correlation() {
    let target = 0.7;
    let copula = GaussianCopula::from_flat(&[1.0, target, target, 1.0], 2).unwrap();
    let matrix = copula.sample_matrix(&mut ScenarioRng::from_seed(11), 20_000);

    // Map the uniform marginals back to normals; their Pearson correlation
    // estimates the copula parameter directly.
    let xs: Vec<f64> = matrix[0].iter().map(|&u| normal_quantile(u)).collect();
    let ys: Vec<f64> = matrix[1].iter().map(|&u| normal_quantile(u)).collect();

    let rho = pearson(&xs, &ys);
    assert!(
        (rho - target).abs() < 0.05,
        "sample correlation {rho} is not near {target}"
    );
}

#[test]
fn independent_draws_carry_no_correlation() {
    let copula = GaussianCopula::from_flat(&[1.0, 0.0, 0.0, 1.0], 2).unwrap();
    let matrix = copula.sample_matrix(&mut ScenarioRng::from_seed(17), 20_000);

    let xs: Vec<f64> = matrix[0].iter().map(|&u| normal_quantile(u)).collect();
    let ys: Vec<f64> = matrix[1].iter().map(|&u| normal_quantile(u)).collect();

    let rho = pearson(&xs, &ys);
    assert!(rho.abs() < 0.05, "sample correlation {rho} is not near zero");
}

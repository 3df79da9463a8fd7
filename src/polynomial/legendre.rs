//! Legendre polynomial evaluation.
//!
//! Legendre polynomials P_n(x) are orthogonal on [-1, 1] with weight 1.
//! They characterize the Gauss-Lobatto rules used by the reference element:
//! the interior nodes of the (N+1)-point rule are the roots of P'_N, and the
//! weights are w_j = 2 / (N(N+1) [P_N(x_j)]²).

/// Evaluate Legendre polynomial P_n(x) using the three-term recurrence.
///
/// P_0(x) = 1, P_1(x) = x,
/// (n+1) P_{n+1}(x) = (2n+1) x P_n(x) - n P_{n-1}(x)
pub fn legendre(n: usize, x: f64) -> f64 {
    if n == 0 {
        return 1.0;
    }

    let mut p_prev = 1.0;
    let mut p_curr = x;

    for k in 1..n {
        let p_next = ((2 * k + 1) as f64 * x * p_curr - k as f64 * p_prev) / (k + 1) as f64;
        p_prev = p_curr;
        p_curr = p_next;
    }

    p_curr
}

/// Evaluate the derivative P'_n(x).
///
/// Uses P'_n(x) = n (x P_n(x) - P_{n-1}(x)) / (x² - 1) away from the
/// endpoints, with the closed forms P'_n(±1) = (±1)^{n+1} n(n+1)/2.
pub fn legendre_derivative(n: usize, x: f64) -> f64 {
    if n == 0 {
        return 0.0;
    }

    if (x - 1.0).abs() < 1e-14 {
        return (n * (n + 1)) as f64 / 2.0;
    }
    if (x + 1.0).abs() < 1e-14 {
        let sign = if n % 2 == 0 { -1.0 } else { 1.0 };
        return sign * (n * (n + 1)) as f64 / 2.0;
    }

    let p_n = legendre(n, x);
    let p_n_minus_1 = legendre(n - 1, x);

    n as f64 * (x * p_n - p_n_minus_1) / (x * x - 1.0)
}

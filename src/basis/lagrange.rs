//! Barycentric Lagrange interpolation basis.
//!
//! Given distinct nodes x_0, ..., x_N, the i-th basis polynomial is
//! ℓ_i(x) = w_i Π_{j≠i} (x - x_j) with the barycentric weight
//! w_i = 1 / Π_{j≠i} (x_i - x_j).
//!
//! Values and derivatives are evaluated through the barycentric form, which
//! is numerically stable and needs no matrix inversion. By construction
//! ℓ_i(x_j) = δ_{ij}, so nodal values double as interpolation coefficients.

/// Lagrange basis over a fixed set of distinct nodes.
///
/// Immutable once built.
#[derive(Clone, Debug)]
pub struct LagrangeBasis {
    nodes: Vec<f64>,
    /// Barycentric weights, one per node.
    weights: Vec<f64>,
}

impl LagrangeBasis {
    /// Build the basis from a node set.
    ///
    /// The barycentric weights are accumulated pairwise in O(n²).
    ///
    /// # Panics
    /// If fewer than two nodes are given or any two nodes coincide.
    pub fn new(nodes: &[f64]) -> Self {
        assert!(nodes.len() > 1, "need at least two interpolation nodes");

        let n = nodes.len();
        let mut weights = vec![1.0; n];
        for i in 1..n {
            for j in 0..i {
                assert!(
                    nodes[i] != nodes[j],
                    "interpolation nodes must be distinct (nodes {} and {} are both {})",
                    j,
                    i,
                    nodes[i]
                );
                weights[j] *= nodes[j] - nodes[i];
                weights[i] *= nodes[i] - nodes[j];
            }
        }
        for w in &mut weights {
            *w = 1.0 / *w;
        }

        Self {
            nodes: nodes.to_vec(),
            weights,
        }
    }

    /// Number of nodes (= number of basis polynomials).
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Polynomial degree of the basis.
    pub fn degree(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Position of node i.
    pub fn node(&self, i: usize) -> f64 {
        self.nodes[i]
    }

    /// Barycentric weight of node i.
    pub fn barycentric_weight(&self, i: usize) -> f64 {
        self.weights[i]
    }

    /// Value of basis polynomial i at node j: the Kronecker delta.
    pub fn value_at_node(&self, i: usize, j: usize) -> f64 {
        if i == j {
            1.0
        } else {
            0.0
        }
    }

    /// Value of basis polynomial i at an arbitrary point x.
    ///
    /// Special-cased at x = x_i to avoid the 0/0 in the barycentric product.
    pub fn value(&self, i: usize, x: f64) -> f64 {
        if x == self.nodes[i] {
            return 1.0;
        }

        let mut val = self.weights[i];
        for &xj in &self.nodes {
            val *= x - xj;
        }
        val / (x - self.nodes[i])
    }

    /// First derivative of basis polynomial i at node j.
    ///
    /// For i ≠ j: ℓ'_i(x_j) = w_i Π_{k≠i,j} (x_j - x_k).
    /// For i = j the diagonal closed form Σ_{k≠i} 1/(x_i - x_k) applies.
    pub fn derivative_at_node(&self, i: usize, j: usize) -> f64 {
        if i == j {
            return self.derivative(i, self.nodes[j]);
        }

        let x = self.nodes[j];
        let mut dev = self.weights[i];
        for (k, &xk) in self.nodes.iter().enumerate() {
            if k != i && k != j {
                dev *= x - xk;
            }
        }
        dev
    }

    /// First derivative of basis polynomial i at an arbitrary point x.
    ///
    /// ℓ'_i(x) = ℓ_i(x) Σ_{j≠i} 1/(x - x_j); when x lands on a node the
    /// at-node formula takes over. At x = x_i the sum alone remains since
    /// ℓ_i(x_i) = 1.
    pub fn derivative(&self, i: usize, x: f64) -> f64 {
        let mut coeff = 0.0;
        for (j, &xj) in self.nodes.iter().enumerate() {
            if j != i {
                if x == xj {
                    return self.derivative_at_node(i, j);
                }
                coeff += 1.0 / (x - xj);
            }
        }
        coeff * self.value(i, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::gauss_lobatto_rule;

    fn equispaced(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| -1.0 + 2.0 * i as f64 / (n - 1) as f64)
            .collect()
    }

    #[test]
    fn kronecker_property() {
        let basis = LagrangeBasis::new(&equispaced(7));
        for i in 0..7 {
            for j in 0..7 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(basis.value_at_node(i, j), expected);
            }
        }
    }

    #[test]
    fn value_consistent_with_value_at_node() {
        // value(i, x_j) must agree with the Kronecker shortcut
        let nodes = equispaced(7);
        let basis = LagrangeBasis::new(&nodes);
        for i in 0..7 {
            for (j, &xj) in nodes.iter().enumerate() {
                let diff = basis.value(i, xj) - basis.value_at_node(i, j);
                assert!(
                    diff.abs() < 1e-12,
                    "basis {} at node {}: inconsistent values, diff {}",
                    i,
                    j,
                    diff
                );
            }
        }
    }

    #[test]
    fn derivative_consistent_with_derivative_at_node() {
        let nodes = equispaced(6);
        let basis = LagrangeBasis::new(&nodes);
        for i in 0..6 {
            for (j, &xj) in nodes.iter().enumerate() {
                let diff = basis.derivative(i, xj) - basis.derivative_at_node(i, j);
                assert!(
                    diff.abs() < 1e-11,
                    "basis {} at node {}: inconsistent derivatives, diff {}",
                    i,
                    j,
                    diff
                );
            }
        }
    }

    #[test]
    fn partition_of_unity() {
        // Σ_i ℓ_i(x) = 1 at arbitrary points
        let (nodes, _) = gauss_lobatto_rule(5).unwrap();
        let basis = LagrangeBasis::new(&nodes);
        for &x in &[-0.9, -0.37, 0.0, 0.12, 0.85] {
            let sum: f64 = (0..5).map(|i| basis.value(i, x)).sum();
            assert!((sum - 1.0).abs() < 1e-13, "at x={}: sum {}", x, sum);
        }
    }

    #[test]
    fn derivatives_sum_to_zero() {
        // differentiating the partition of unity: Σ_i ℓ'_i(x) = 0
        let (nodes, _) = gauss_lobatto_rule(6).unwrap();
        let basis = LagrangeBasis::new(&nodes);
        for j in 0..6 {
            let sum: f64 = (0..6).map(|i| basis.derivative_at_node(i, j)).sum();
            assert!(sum.abs() < 1e-12, "at node {}: sum {}", j, sum);
        }
    }

    #[test]
    fn diagonal_derivative_is_sum_of_reciprocal_gaps() {
        let nodes = [-1.0, -0.25, 0.5, 1.0];
        let basis = LagrangeBasis::new(&nodes);
        for i in 0..4 {
            let expected: f64 = nodes
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &xj)| 1.0 / (nodes[i] - xj))
                .sum();
            let got = basis.derivative_at_node(i, i);
            assert!(
                (got - expected).abs() < 1e-13,
                "diagonal entry {}: expected {}, got {}",
                i,
                expected,
                got
            );
        }
    }

    #[test]
    fn interpolates_polynomials_exactly() {
        // a degree-3 polynomial is reproduced by a 4-node basis
        let nodes = equispaced(4);
        let basis = LagrangeBasis::new(&nodes);
        let f = |x: f64| 2.0 * x * x * x - x + 0.5;

        for &x in &[-0.8, -0.1, 0.3, 0.9] {
            let interp: f64 = nodes
                .iter()
                .enumerate()
                .map(|(i, &xi)| f(xi) * basis.value(i, x))
                .sum();
            assert!((interp - f(x)).abs() < 1e-13);
        }
    }

    #[test]
    #[should_panic(expected = "distinct")]
    fn duplicate_nodes_panic() {
        LagrangeBasis::new(&[-1.0, 0.3, 0.3, 1.0]);
    }
}

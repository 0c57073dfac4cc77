//! Entropy sums over the contingency table.

use crate::table::ColwellTable;

/// Colwell's three predictability metrics, each normalised by `log2(s)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColwellStats {
    constancy: f64,
    contingency: f64,
    predictability: f64,
}

impl ColwellStats {
    /// Constancy `C = 1 - H(Y) / log2(s)`.
    pub fn constancy(&self) -> f64 {
        self.constancy
    }

    /// Contingency `M = (H(X) + H(Y) - H(XY)) / log2(s)`.
    pub fn contingency(&self) -> f64 {
        self.contingency
    }

    /// Predictability `P = C + M`, exactly.
    pub fn predictability(&self) -> f64 {
        self.predictability
    }

    /// Computes the metrics from a contingency table.
    pub(crate) fn from_table(table: &ColwellTable) -> Self {
        let z = f64::from(table.total());

        let hx = entropy(table.month_sums().iter().copied(), z);
        let hy = entropy(table.state_sums().iter().copied(), z);
        let hxy = entropy(table.cells(), z);

        let log_s = (table.n_states() as f64).log2();
        let constancy = 1.0 - hy / log_s;
        let contingency = (hx + hy - hxy) / log_s;

        Self {
            constancy,
            contingency,
            predictability: constancy + contingency,
        }
    }
}

/// Shannon entropy (base 2) of counts normalised by `z`; zero counts
/// contribute 0, not NaN.
fn entropy(counts: impl Iterator<Item = u32>, z: f64) -> f64 {
    -counts
        .filter(|&c| c > 0)
        .map(|c| {
            let p = f64::from(c) / z;
            p * p.log2()
        })
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn entropy_uniform() {
        // Four equal counts: H = log2(4) = 2.
        let h = entropy([5, 5, 5, 5].into_iter(), 20.0);
        assert_relative_eq!(h, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn entropy_single_mass() {
        let h = entropy([7].into_iter(), 7.0);
        assert_relative_eq!(h, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn entropy_skips_zeros() {
        let with_zeros = entropy([3, 0, 0, 1].into_iter(), 4.0);
        let without = entropy([3, 1].into_iter(), 4.0);
        assert_relative_eq!(with_zeros, without, epsilon = 1e-12);
        assert!(with_zeros.is_finite());
    }

    #[test]
    fn entropy_mixed() {
        // p = (1/2, 1/4, 1/4): H = 1.5 bits.
        let h = entropy([2, 1, 1].into_iter(), 4.0);
        assert_relative_eq!(h, 1.5, epsilon = 1e-12);
    }
}

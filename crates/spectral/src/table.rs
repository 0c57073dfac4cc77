//! Spectrum table: (frequency, power) rows with strictly increasing frequency.

/// An ordered power spectrum.
///
/// Frequencies are strictly increasing and powers are non-negative; both
/// invariants are guaranteed by the estimators that build the table.
#[derive(Debug, Clone)]
pub struct SpectrumTable {
    /// Strictly increasing frequencies (cycles per time unit).
    frequencies: Vec<f64>,
    /// Power at each frequency.
    powers: Vec<f64>,
}

impl SpectrumTable {
    pub(crate) fn new(frequencies: Vec<f64>, powers: Vec<f64>) -> Self {
        debug_assert_eq!(frequencies.len(), powers.len());
        debug_assert!(frequencies.windows(2).all(|w| w[0] < w[1]));
        Self {
            frequencies,
            powers,
        }
    }

    /// Returns the frequencies.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Returns the powers.
    pub fn powers(&self) -> &[f64] {
        &self.powers
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Iterates over (frequency, power) rows.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.powers.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let table = SpectrumTable::new(vec![0.1, 0.2], vec![4.0, 1.0]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.frequencies(), &[0.1, 0.2]);
        assert_eq!(table.powers(), &[4.0, 1.0]);
    }

    #[test]
    fn rows_iterator() {
        let table = SpectrumTable::new(vec![0.1, 0.2], vec![4.0, 1.0]);
        let rows: Vec<(f64, f64)> = table.rows().collect();
        assert_eq!(rows, vec![(0.1, 4.0), (0.2, 1.0)]);
    }

    #[test]
    fn empty_table() {
        let table = SpectrumTable::new(Vec::new(), Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}

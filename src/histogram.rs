//! Fixed-bin-count histogram.

use crate::error::{TableError, TableResult};

/// Bin count used by the distribution chart.
pub const DISTRIBUTION_BINS: usize = 30;

/// Equal-width histogram: `edges.len() == counts.len() + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bins the present values of `values` into `bins` equal-width bins
    /// spanning their minimum and maximum.
    ///
    /// Bins are half-open `[lo, hi)` except the last, which also takes the
    /// maximum. A single distinct value widens the range by 0.5 on each side;
    /// no values at all bins over `[0, 1]`.
    pub fn compute(values: &[Option<f64>], bins: usize) -> TableResult<Self> {
        if bins == 0 {
            return Err(TableError::InvalidBins);
        }

        let present: Vec<f64> = values.iter().flatten().copied().filter(|v| v.is_finite()).collect();

        let (mut lo, mut hi) = present
            .iter()
            .fold(None, |acc: Option<(f64, f64)>, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 1.0));

        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

        let mut counts = vec![0usize; bins];
        for v in present {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Ok(Self { edges, counts })
    }

    pub fn num_bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `(lower edge, upper edge, count)` for every bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(e, &c)| (e[0], e[1], c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_counts() {
        let values: Vec<Option<f64>> = (0..=10).map(|v| Some(v as f64)).collect();
        let hist = Histogram::compute(&values, 5).unwrap();
        assert_eq!(hist.edges, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        // The maximum lands in the last (closed) bin
        assert_eq!(hist.counts, vec![2, 2, 2, 2, 3]);
        assert_eq!(hist.total(), 11);
    }

    #[test]
    fn test_distribution_bin_count() {
        let values: Vec<Option<f64>> = (0..200).map(|v| Some((v as f64 * 0.37).sin())).collect();
        let hist = Histogram::compute(&values, DISTRIBUTION_BINS).unwrap();
        assert_eq!(hist.num_bins(), 30);
        assert_eq!(hist.edges.len(), 31);
        assert_eq!(hist.total(), 200);
    }

    #[test]
    fn test_missing_values_skipped() {
        let values = [Some(1.0), None, Some(2.0), None];
        let hist = Histogram::compute(&values, 2).unwrap();
        assert_eq!(hist.total(), 2);
    }

    #[test]
    fn test_single_value_range_widened() {
        let hist = Histogram::compute(&[Some(3.0), Some(3.0)], 2).unwrap();
        assert_eq!(hist.edges, vec![2.5, 3.0, 3.5]);
        assert_eq!(hist.counts, vec![0, 2]);
    }

    #[test]
    fn test_empty_input() {
        let hist = Histogram::compute(&[], 4).unwrap();
        assert_eq!(hist.edges.first(), Some(&0.0));
        assert_eq!(hist.edges.last(), Some(&1.0));
        assert_eq!(hist.total(), 0);
        assert_eq!(hist.max_count(), 0);
    }

    #[test]
    fn test_zero_bins_rejected() {
        assert_eq!(Histogram::compute(&[Some(1.0)], 0), Err(TableError::InvalidBins));
    }
}

use serde::Serialize;

/// Stem-and-leaf decomposition of a numeric sequence.
///
/// Buckets appear in first-seen order of their stem and keep leaves in
/// insertion order; consumers sort leaves ascending at read time via
/// [`StemLeafPlot::sorted_leaves`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StemLeafPlot {
    buckets: Vec<(i64, Vec<f64>)>,
}

impl StemLeafPlot {
    /// Group every value by its stem, in input order.
    ///
    /// stem = integer part of `value / 10` (truncation toward zero), leaf =
    /// `value % 10` with the dividend's sign. For negatives this differs from
    /// a classical stem-and-leaf plot (`-5` lands in stem `0` with leaf `-5`);
    /// that is the intended behavior, kept as-is.
    pub fn decompose(values: &[f64]) -> Self {
        let mut buckets: Vec<(i64, Vec<f64>)> = Vec::new();
        for &val in values {
            let stem = (val / 10.0).trunc() as i64;
            let leaf = val % 10.0;
            match buckets.iter_mut().find(|(key, _)| *key == stem) {
                Some((_, leaves)) => leaves.push(leaf),
                None => buckets.push((stem, vec![leaf])),
            }
        }
        Self { buckets }
    }

    /// Buckets as `(stem, leaves)` pairs in first-seen stem order; leaves in
    /// insertion order.
    pub fn buckets(&self) -> &[(i64, Vec<f64>)] {
        &self.buckets
    }

    /// Leaves of one bucket, sorted ascending for display.
    pub fn sorted_leaves(&self, stem: i64) -> Option<Vec<f64>> {
        self.buckets
            .iter()
            .find(|&&(key, _)| key == stem)
            .map(|(_, leaves)| {
                let mut sorted = leaves.clone();
                sorted.sort_by(f64::total_cmp);
                sorted
            })
    }

    /// Total number of leaves across all buckets.
    pub fn total_leaves(&self) -> usize {
        self.buckets.iter().map(|(_, leaves)| leaves.len()).sum()
    }
}

use crate::frequency::FrequencyTable;
use serde::Serialize;

/// One of the most frequent values in a dataset, with its occurrence count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeEntry {
    pub value: f64,
    pub count: usize,
}

/// Descriptive statistics of a numeric sequence.
///
/// Recomputed fresh on every invocation; `mean`, `median` and
/// `geometric_mean` are stored rounded to two decimals, the remaining
/// fields are exact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Vec<ModeEntry>,
    pub range: f64,
    pub geometric_mean: f64,
    pub largest: f64,
    pub smallest: f64,
    pub sum: f64,
}

impl Summary {
    pub fn describe(values: &[f64]) -> Self {
        let largest = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let smallest = values.iter().copied().fold(f64::INFINITY, f64::min);
        let sum = values.iter().sum();

        Self {
            count: values.len(),
            mean: compute_mean(values),
            median: compute_median(values),
            mode: compute_mode(values),
            range: largest - smallest,
            geometric_mean: compute_geometric_mean(values),
            largest,
            smallest,
            sum,
        }
    }
}

fn compute_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    round2(values.iter().sum::<f64>() / values.len() as f64)
}

fn compute_median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        round2((sorted[middle - 1] + sorted[middle]) / 2.0)
    } else {
        round2(sorted[middle])
    }
}

fn compute_mode(values: &[f64]) -> Vec<ModeEntry> {
    let tally = FrequencyTable::tally(values);
    let max_count = tally
        .entries()
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(0);

    tally
        .entries()
        .iter()
        .filter(|&&(_, count)| count == max_count)
        .map(|&(value, count)| ModeEntry { value, count })
        .collect()
}

/// Nth root of the product of all values.
///
/// Evaluated in log space: any negative value makes the fractional root
/// non-real and the result NaN, even when the full product happens to be
/// positive. Such inputs surface as NaN rather than an error.
fn compute_geometric_mean(values: &[f64]) -> f64 {
    let log_sum: f64 = values.iter().map(|&val| val.ln()).sum();
    round2((log_sum / values.len() as f64).exp())
}

fn round2(val: f64) -> f64 {
    (val * 100.0).round() / 100.0
}

use serde::Serialize;

/// Occurrence counts per distinct value.
///
/// Entries are kept in first-seen order of the distinct values, as an
/// explicit association list keyed by the numeric value itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    entries: Vec<(f64, usize)>,
}

impl FrequencyTable {
    /// Count occurrences of every distinct value in a single linear pass.
    pub fn tally(values: &[f64]) -> Self {
        let mut entries: Vec<(f64, usize)> = Vec::new();
        for &val in values {
            match entries.iter_mut().find(|(key, _)| *key == val) {
                Some((_, count)) => *count += 1,
                None => entries.push((val, 1)),
            }
        }
        Self { entries }
    }

    /// Entries as `(value, count)` pairs in first-seen order.
    pub fn entries(&self) -> &[(f64, usize)] {
        &self.entries
    }

    /// Total number of counted occurrences.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

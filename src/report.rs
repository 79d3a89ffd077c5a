use crate::frequency::FrequencyTable;
use crate::stats::Summary;
use crate::stemleaf::StemLeafPlot;
use anyhow::{Context, Result};
use serde::Serialize;

/// All results of one pipeline invocation.
///
/// The three components run independently on the same sequence; nothing is
/// cached or shared across invocations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub summary: Summary,
    pub stem_leaf: StemLeafPlot,
    pub frequency: FrequencyTable,
}

impl Report {
    pub fn build(values: &[f64]) -> Self {
        Self {
            summary: Summary::describe(values),
            stem_leaf: StemLeafPlot::decompose(values),
            frequency: FrequencyTable::tally(values),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize report")
    }
}

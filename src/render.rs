use crate::frequency::FrequencyTable;
use crate::stats::{ModeEntry, Summary};
use crate::stemleaf::StemLeafPlot;
use comfy_table::{ContentArrangement, Table, presets::ASCII_MARKDOWN};

/// Print the statistics summary as a label/value table.
pub fn print_summary(summary: &Summary) {
    let mut t = Table::new();
    t.load_preset(ASCII_MARKDOWN);
    t.set_content_arrangement(ContentArrangement::Dynamic);
    t.set_header(vec!["Statistic", "Value"]);
    t.add_row(vec!["Count".to_string(), summary.count.to_string()]);
    t.add_row(vec!["Mean".to_string(), format!("{:.2}", summary.mean)]);
    t.add_row(vec!["Median".to_string(), format!("{:.2}", summary.median)]);
    t.add_row(vec!["Mode".to_string(), format_mode(&summary.mode)]);
    t.add_row(vec!["Range".to_string(), summary.range.to_string()]);
    t.add_row(vec![
        "Geometric Mean".to_string(),
        format!("{:.2}", summary.geometric_mean),
    ]);
    t.add_row(vec!["Largest".to_string(), summary.largest.to_string()]);
    t.add_row(vec!["Smallest".to_string(), summary.smallest.to_string()]);
    t.add_row(vec!["Sum".to_string(), summary.sum.to_string()]);

    println!("Statistics Table");
    println!("{t}");
}

/// `"<value> (<count> times)"` per mode entry, comma-joined.
fn format_mode(mode: &[ModeEntry]) -> String {
    mode.iter()
        .map(|entry| format!("{} ({} times)", entry.value, entry.count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the stem-and-leaf plot, one row per stem, leaves sorted ascending.
pub fn print_stem_leaf(plot: &StemLeafPlot) {
    let mut t = Table::new();
    t.load_preset(ASCII_MARKDOWN);
    t.set_header(vec!["Stem", "Leaves"]);
    for &(stem, _) in plot.buckets() {
        let leaves = plot
            .sorted_leaves(stem)
            .unwrap_or_default()
            .iter()
            .map(|leaf| leaf.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        t.add_row(vec![format!("{stem} |"), leaves]);
    }

    println!("\nStem and Leaf Plot");
    println!("{t}");
}

/// Print the frequency table, one row per distinct value.
pub fn print_frequency(table: &FrequencyTable) {
    let mut t = Table::new();
    t.load_preset(ASCII_MARKDOWN);
    t.set_header(vec!["Data", "Frequency"]);
    for &(value, count) in table.entries() {
        t.add_row(vec![value.to_string(), count.to_string()]);
    }

    println!("\nFrequency Table");
    println!("{t}");
}

/// Print a bar chart of the frequency distribution.
///
/// One bar per distinct value in table order, bar length equal to the count;
/// the axis starts at zero. Rewritten wholesale on every invocation, nothing
/// is retained between renders.
pub fn print_frequency_chart(table: &FrequencyTable) {
    println!("\nFrequency Chart");
    for &(value, count) in table.entries() {
        println!("{value:>12} | {} {count}", "#".repeat(count));
    }
}

//! Plain-text rendering of charts and lookup tables.

use std::fmt::Write;

use storativity_core::calculations::{aquifer_compressibility_note, water_compressibility_note};
use storativity_core::materials::TableDisplay;
use storativity_core::{BarChart, StorativityResult, StorativityTables};

/// Characters available for the longest bar
pub const BAR_WIDTH: usize = 56;

const LABEL_WIDTH: usize = 12;

/// Horizontal bar chart on the chart's log axis.
pub fn chart(chart: &BarChart) -> String {
    let mut out = String::new();
    let rule = "═".repeat(LABEL_WIDTH + BAR_WIDTH + 14);

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "  {}", chart.title);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "  {} (log scale)", chart.y_title);
    let _ = writeln!(out);

    for (name, value, fraction) in chart.bars() {
        let len = (fraction * BAR_WIDTH as f64).round() as usize;
        let _ = writeln!(
            out,
            "{name:>LABEL_WIDTH$} │{bar:<BAR_WIDTH$} {value:.3e}",
            bar = "█".repeat(len),
        );
    }

    let _ = writeln!(out, "{:>LABEL_WIDTH$} └{}", "", "─".repeat(BAR_WIDTH));
    let _ = writeln!(out, "{:>LABEL_WIDTH$}  {}", "", axis_ticks(chart));
    let _ = writeln!(out, "{:>LABEL_WIDTH$}  {}", "", chart.x_title);
    out
}

/// Tick labels spread across the bar width, one per decade
fn axis_ticks(chart: &BarChart) -> String {
    let ticks = chart.y_axis.ticks();
    let mut line = vec![' '; BAR_WIDTH + 4];
    let steps = ticks.len().saturating_sub(1).max(1);
    for (i, tick) in ticks.iter().enumerate() {
        let pos = (i * BAR_WIDTH / steps).min(line.len() - tick.len());
        for (j, ch) in tick.chars().enumerate() {
            line[pos + j] = ch;
        }
    }
    line.into_iter().collect::<String>().trim_end().to_string()
}

/// Chart followed by the beta and Sa notes.
pub fn result(result: &StorativityResult) -> String {
    let mut out = chart(&BarChart::from_result(result));
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", water_compressibility_note());
    let _ = writeln!(out, "  {}", aquifer_compressibility_note(result));
    out
}

/// A lookup table with padded columns.
pub fn table(display: &TableDisplay) -> String {
    let widths = display.column_widths();
    let mut out = String::new();

    let header = pad_row(&display.headers, &widths);
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{}", "─".repeat(header.chars().count()));
    for row in &display.rows {
        let _ = writeln!(out, "{}", pad_row(row, &widths));
    }
    out
}

/// Both lookup tables, alpha first.
pub fn tables(tables: &StorativityTables) -> String {
    format!("{}\n{}", table(&tables.alpha.display()), table(&tables.porosity.display()))
}

fn pad_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

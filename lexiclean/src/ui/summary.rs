// lexiclean/src/ui/summary.rs
//! Human-readable rendering of [`TextStatistics`].

use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::io::Write;

use lexiclean_core::{SegmentPoint, TextStatistics};

/// How many of the most frequent replacements the summary lists.
pub const TOP_REPLACEMENTS: usize = 10;

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One bar per segment, scaled to the busiest segment.
pub fn density_sparkline(points: &[SegmentPoint]) -> String {
    let max = points
        .iter()
        .map(|p| p.inappropriate_word_count)
        .max()
        .unwrap_or(0);

    points
        .iter()
        .map(|p| {
            if max == 0 {
                BARS[0]
            } else {
                BARS[p.inappropriate_word_count * (BARS.len() - 1) / max]
            }
        })
        .collect()
}

fn new_table(supports_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if !supports_color {
        table.force_no_tty();
    }
    table
}

fn heading(text: &str, supports_color: bool) -> String {
    if supports_color {
        format!("{}", text.bold().cyan())
    } else {
        text.to_string()
    }
}

/// Writes the statistics table, the most frequent replacements and the
/// replacement density across the text.
pub fn print_summary<W: Write>(
    stats: &TextStatistics,
    writer: &mut W,
    supports_color: bool,
) -> Result<()> {
    writeln!(writer, "{}", heading("Text Statistics", supports_color))?;

    let mut table = new_table(supports_color);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Words".to_string(), stats.total_words.to_string()]);
    table.add_row(vec!["Characters".to_string(), stats.total_characters.to_string()]);
    table.add_row(vec!["Sentences".to_string(), stats.sentence_count.to_string()]);
    table.add_row(vec!["Paragraphs".to_string(), stats.paragraph_count.to_string()]);
    table.add_row(vec!["Replaced words".to_string(), stats.replaced_words_count.to_string()]);
    table.add_row(vec![
        "Reading time (min)".to_string(),
        format!("{:.2}", stats.reading_time_minutes),
    ]);
    table.add_row(vec![
        "Readability (Flesch)".to_string(),
        format!("{:.2}", stats.readability_score),
    ]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    writeln!(writer, "{table}")?;

    if stats.replacement_frequency.is_empty() {
        writeln!(writer, "No replacements made.")?;
        return Ok(());
    }

    writeln!(writer, "{}", heading("Most Replaced Words", supports_color))?;
    let mut top = new_table(supports_color);
    top.set_header(vec!["Word", "Count"]);
    for (word, count) in stats.top_replacements(TOP_REPLACEMENTS) {
        top.add_row(vec![word.to_string(), count.to_string()]);
    }
    writeln!(writer, "{top}")?;

    writeln!(
        writer,
        "Density: {}",
        density_sparkline(&stats.graph_data)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(segment_index: usize, count: usize) -> SegmentPoint {
        SegmentPoint {
            segment_index,
            inappropriate_word_count: count,
            percentage_complete: 0.0,
        }
    }

    #[test]
    fn test_sparkline_scales_to_max() {
        let points = [point(0, 0), point(1, 2), point(2, 4)];
        assert_eq!(density_sparkline(&points), "▁▄█");
    }

    #[test]
    fn test_sparkline_all_zero() {
        let points = [point(0, 0), point(1, 0)];
        assert_eq!(density_sparkline(&points), "▁▁");
        assert_eq!(density_sparkline(&[]), "");
    }

    #[test]
    fn test_summary_without_replacements() {
        let stats = TextStatistics {
            total_words: 3,
            sentence_count: 1,
            paragraph_count: 1,
            ..TextStatistics::default()
        };
        let mut out = Vec::new();
        print_summary(&stats, &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Text Statistics"));
        assert!(text.contains("Paragraphs"));
        assert!(text.contains("No replacements made."));
        assert!(!text.contains("Most Replaced Words"));
    }
}

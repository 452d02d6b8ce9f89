//! Line scanner for benchmark logs.
//!
//! A log is free text with embedded tables:
//!
//! ```text
//! Griffin (2:1) r = 12                                   <- title
//! Height  Tree  Gadget  Constraint  Witness  Key  Proof  Verify
//! 2       0.41  0.02    0.01        0.03     9.8  21.4   1.2
//! 4       0.83  0.05    0.02        0.06     19.1 40.2   1.2
//!                                                        <- end of section
//! ```
//!
//! `/*` ... `*/` blocks are skipped wholesale.

use log::{debug, warn};

use super::error::ParseError;
use super::model::{DataTable, LogDocument, Section};

const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";
const HEADER: &str = "Height";

/// Parse a whole log into its sections, in file order.
pub fn parse_log(text: &str) -> Result<LogDocument, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    let mut sections = Vec::new();

    // Closing line of the most recent comment block. It never serves as a title.
    let mut comment_close: Option<usize> = None;
    let mut i = 0;

    while i < lines.len() {
        if lines[i].starts_with(COMMENT_OPEN) {
            let open = i;
            while i < lines.len() && !lines[i].starts_with(COMMENT_CLOSE) {
                i += 1;
            }
            if i == lines.len() {
                warn!(
                    "comment block opened on line {} is never closed, ignoring the rest of the log",
                    open + 1
                );
                break;
            }
            comment_close = Some(i);
            i += 1;
            continue;
        }

        if lines[i].starts_with(HEADER) {
            // The line that ended the data rows is examined again on the next pass.
            let (section, next) = parse_section(&lines, i, comment_close, sections.len())?;
            sections.push(section);
            i = next;
            continue;
        }

        i += 1;
    }

    Ok(LogDocument { sections })
}

/// Parse the section whose header sits at `header`. Returns the section and
/// the index of the first line after its data rows.
fn parse_section(
    lines: &[&str],
    header: usize,
    comment_close: Option<usize>,
    index: usize,
) -> Result<(Section, usize), ParseError> {
    let title = match header.checked_sub(1) {
        Some(prev) if Some(prev) != comment_close => lines[prev].trim_end().to_string(),
        _ => {
            let fallback = format!("section {}", index + 1);
            warn!(
                "header on line {} has no title line, using '{fallback}'",
                header + 1
            );
            fallback
        }
    };

    let metrics: Vec<String> = lines[header]
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let mut values = Vec::new();
    let mut i = header + 1;
    while i < lines.len() && is_data_row(lines[i]) {
        for token in lines[i].split_whitespace() {
            let value = token
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber {
                    line: i + 1,
                    token: token.to_string(),
                })?;
            values.push(value);
        }
        i += 1;
    }

    let table = DataTable::from_flat(&values, metrics.len()).map_err(|e| {
        ParseError::MalformedSection {
            title: title.clone(),
            line: header + 1,
            values: e.values,
            metrics: e.width,
        }
    })?;

    let section = Section {
        title,
        metrics,
        header_line: header + 1,
        table,
    };
    debug!(
        "section '{}' (line {}): {} rows x {} metrics {:?}",
        section.title,
        section.header_line,
        section.table.rows(),
        section.table.metrics(),
        section.metrics
    );

    Ok((section, i))
}

fn is_data_row(line: &str) -> bool {
    line.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotConfig;
    use pretty_assertions::assert_eq;

    const BENCHMARK_LOG: &str = "\
Merkle Tree Benchmark
Prime:\t52435875175126190479447740508185965837690552500527637822603658699938581184513
d:\t5
Minimum Merkle Tree Height:\t2
Maximum Merkle Tree Height:\t4

Griffin (2:1) r = 12
Height\tTree\tGadget\tConstraint\tWitness\tKey\tProof\tVerify
2\t0.41\t0.02\t0.01\t0.03\t9.8\t21.4\t1.2
4\t0.83\t0.05\t0.02\t0.06\t19.1\t40.2\t1.3

Poseidon (3:1) rf = 8 rp = 57
Height\tTree\tGadget\tConstraint\tWitness\tKey\tProof\tVerify
2\t0.40\t0.03\t0.02\t0.04\t12.0\t25.5\t1.1
4\t0.81\t0.06\t0.04\t0.08\t23.7\t48.9\t1.2
";

    fn series(text: &str) -> Vec<(String, Vec<[f64; 2]>)> {
        parse_log(text)
            .unwrap()
            .series(&PlotConfig::default())
            .into_iter()
            .map(|s| (s.label, s.points))
            .collect()
    }

    #[test]
    fn log_without_sections_is_empty() {
        let doc = parse_log("Merkle Tree Benchmark\nd:\t5\n\nno tables here\n").unwrap();
        assert!(doc.is_empty());
        assert!(doc.series(&PlotConfig::default()).is_empty());
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(parse_log("").unwrap().is_empty());
    }

    #[test]
    fn benchmark_log_yields_one_series_per_section() {
        assert_eq!(
            series(BENCHMARK_LOG),
            vec![
                (
                    "Griffin (2:1) r = 12".to_string(),
                    vec![[2.0, 21.4], [4.0, 40.2]]
                ),
                (
                    "Poseidon (3:1) rf = 8 rp = 57".to_string(),
                    vec![[2.0, 25.5], [4.0, 48.9]]
                ),
            ]
        );
    }

    #[test]
    fn sections_record_metrics_and_header_line() {
        let doc = parse_log(BENCHMARK_LOG).unwrap();
        assert_eq!(doc.len(), 2);
        let first = &doc.sections[0];
        assert_eq!(first.header_line, 8);
        assert_eq!(first.metrics.len(), 8);
        assert_eq!(first.metrics[6], "Proof");
        assert_eq!(first.table.rows(), 2);
        assert_eq!(doc.sections[1].header_line, 13);
    }

    #[test]
    fn eight_metric_example() {
        let text = "Example\nHeight A B C D E F G\n0 1 2 3 4 5 6 7\n1 2 3 4 5 6 7 8\n";
        assert_eq!(
            series(text),
            vec![("Example".to_string(), vec![[0.0, 6.0], [1.0, 7.0]])]
        );
    }

    #[test]
    fn comment_block_contributes_nothing() {
        let text = "\
Title
/*
Height X Y
1 2 3
*/
Height A B C D E F G
0 1 2 3 4 5 6 7
";
        let doc = parse_log(text).unwrap();
        assert_eq!(doc.len(), 1);
        let section = &doc.sections[0];
        assert_eq!(section.title, "section 1");
        assert_eq!(section.metrics[1], "A");
        assert_eq!(section.table.rows(), 1);
        assert_eq!(section.table.get(0, 6), Some(6.0));
    }

    #[test]
    fn comment_block_before_titled_section_is_skipped() {
        let text = "\
/* run on a quiet machine
   numbers in ms */
*/
Griffin
Height A B C D E F G
3 1 2 3 4 5 6 7
";
        let doc = parse_log(text).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.sections[0].title, "Griffin");
    }

    #[test]
    fn unterminated_comment_swallows_the_rest() {
        let text = "\
A
Height A B C D E F G
0 1 2 3 4 5 6 7
/*
B
Height A B C D E F G
0 1 2 3 4 5 6 7
";
        let doc = parse_log(text).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.sections[0].title, "A");
    }

    #[test]
    fn header_on_first_line_gets_fallback_title() {
        let doc = parse_log("Height A B C D E F G\n0 1 2 3 4 5 6 7\n").unwrap();
        assert_eq!(doc.sections[0].title, "section 1");
    }

    #[test]
    fn data_rows_end_at_first_non_digit_line() {
        let text = "T\nHeight A\n1 2\n3 4\n-5 6\n7 8\n";
        let doc = parse_log(text).unwrap();
        let section = &doc.sections[0];
        assert_eq!(section.table.rows(), 2);
        assert_eq!(section.table.column(0), Some(&[1.0, 3.0][..]));
    }

    #[test]
    fn header_directly_after_data_starts_new_section() {
        let text = "T\nHeight A\n1 2\nHeight B\n3 4\n";
        let doc = parse_log(text).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.sections[1].title, "1 2");
        assert_eq!(doc.sections[1].metrics, vec!["Height", "B"]);
    }

    #[test]
    fn section_without_rows_is_kept() {
        let doc = parse_log("T\nHeight A B C D E F G\n\n").unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.sections[0].table.rows(), 0);
        let series = doc.series(&PlotConfig::default());
        assert_eq!(series.len(), 1);
        assert!(series[0].points.is_empty());
    }

    #[test]
    fn ragged_rows_fail_without_truncation() {
        let text = "Broken\nHeight A B C D E F G\n0 1 2 3 4 5 6 7\n1 2 3 4 5 6 7\n";
        let err = parse_log(text).unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedSection {
                title: "Broken".to_string(),
                line: 2,
                values: 15,
                metrics: 8,
            }
        );
    }

    #[test]
    fn ragged_rows_that_happen_to_divide_are_accepted() {
        // Only the total count is checked, rows are not validated one by one.
        let text = "T\nHeight A B\n1 2\n3 4 5 6\n";
        let doc = parse_log(text).unwrap();
        let table = &doc.sections[0].table;
        assert_eq!(table.rows(), 2);
        assert_eq!(table.column(0), Some(&[1.0, 4.0][..]));
        assert_eq!(table.column(1), Some(&[2.0, 5.0][..]));
        assert_eq!(table.column(2), Some(&[3.0, 6.0][..]));
    }

    #[test]
    fn non_numeric_token_is_reported_with_line() {
        let err = parse_log("T\nHeight A\n1 x2\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                line: 3,
                token: "x2".to_string(),
            }
        );
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let text = "Title \r\nHeight A B C D E F G\r\n0 1 2 3 4 5 6 7\r\n";
        let doc = parse_log(text).unwrap();
        assert_eq!(doc.sections[0].title, "Title");
        assert_eq!(doc.sections[0].table.get(0, 7), Some(7.0));
    }

    #[test]
    fn parsing_is_repeatable() {
        let config = PlotConfig::default();
        let first = parse_log(BENCHMARK_LOG).unwrap().series(&config);
        let second = parse_log(BENCHMARK_LOG).unwrap().series(&config);
        assert_eq!(first, second);
    }
}

//! CSV Output
//!
//! One row per result in declared order, prefixed by a marker line so the
//! block can be cut out of mixed terminal output.

use xbench_core::BenchmarkResult;

/// Marker line preceding the CSV block
pub const CSV_MARKER: &str = "--- CSV Output ---";

/// CSV column names
pub const CSV_HEADER: &str = "name,avg_ms,min_ms,max_ms,stddev_ms,iterations,per_iter_us";

/// Generate the CSV block (leading blank line, marker, header, rows)
pub fn generate_csv_report(results: &[BenchmarkResult]) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(CSV_MARKER);
    output.push('\n');
    output.push_str(CSV_HEADER);
    output.push('\n');

    for result in results {
        let stats = result.summary();
        output.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            escape_field(result.name()),
            stats.mean,
            stats.min,
            stats.max,
            stats.std_dev,
            result.iterations(),
            stats.per_iteration_cost(result.iterations()),
        ));
    }

    output
}

/// Quote a field if it contains a delimiter, quote or newline
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_rows() {
        let results = vec![
            BenchmarkResult::from_samples("Foreach Loop (10k)", vec![2.0, 2.0], 10_000),
            BenchmarkResult::from_samples("Text Operations (1k)", vec![1.0, 3.0], 1000),
        ];
        let csv = generate_csv_report(&results);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], CSV_MARKER);
        assert_eq!(lines[2], CSV_HEADER);
        assert_eq!(lines[3], "Foreach Loop (10k),2,2,2,0,10000,0.2");
        assert!(lines[4].starts_with("Text Operations (1k),2,1,3,1.4142135623730951,1000,2"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}

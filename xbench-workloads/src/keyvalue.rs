//! `.key{value}` Text Objects
//!
//! Values are stored inline as `.name{test}.value{42}`. A lookup finds the
//! marker `.key{` and returns everything up to the matching unnested `}`.
//! Nested braces inside a value are kept verbatim.
//!
//! Lookups are case-sensitive first. Only when the exact marker does not
//! occur anywhere in the text is a second, ASCII case-insensitive pass made;
//! an exact match elsewhere always wins over a case-folded one.

use std::hint::black_box;

/// Lookups per key performed by [`bench_keyvalue`]
pub const KEYVALUE_ITERATIONS: u64 = 10_000;

/// Text object scanned by [`bench_keyvalue`]
pub const SAMPLE_OBJECT: &str = ".name{test}.value{42}.x{1.5}.y{2.5}.z{3.5}";

/// Linear scanner over one `.key{value}` text object
#[derive(Debug, Clone, Copy)]
pub struct KvScanner<'a> {
    source: &'a str,
}

impl<'a> KvScanner<'a> {
    /// Scanner over `source`
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Value stored under `key`, or `None` if the key does not occur
    pub fn value(&self, key: &str) -> Option<&'a str> {
        let marker = format!(".{key}{{");
        let idx = self
            .find_exact(&marker)
            .or_else(|| self.find_ignore_case(&marker))?;
        let start = idx + marker.len();
        Some(&self.source[start..self.value_end(start)])
    }

    /// Value stored under `key`, or `""` if the key does not occur
    pub fn value_or_empty(&self, key: &str) -> &'a str {
        self.value(key).unwrap_or_default()
    }

    fn find_exact(&self, marker: &str) -> Option<usize> {
        self.source.find(marker)
    }

    /// Secondary pass; ASCII folding keeps byte offsets aligned with `source`
    fn find_ignore_case(&self, marker: &str) -> Option<usize> {
        self.source
            .to_ascii_lowercase()
            .find(&marker.to_ascii_lowercase())
    }

    /// Byte offset of the `}` closing the value that starts at `start`,
    /// or the end of input if it is never closed
    fn value_end(&self, start: usize) -> usize {
        let mut depth = 0usize;
        for (offset, byte) in self.source.as_bytes()[start..].iter().enumerate() {
            match byte {
                b'{' => depth += 1,
                b'}' if depth == 0 => return start + offset,
                b'}' => depth -= 1,
                _ => {}
            }
        }
        self.source.len()
    }
}

/// Look up five keys of [`SAMPLE_OBJECT`] per iteration
pub fn bench_keyvalue() -> u64 {
    let scanner = KvScanner::new(black_box(SAMPLE_OBJECT));
    let mut result = 0;
    for _ in 0..KEYVALUE_ITERATIONS {
        let _ = black_box(scanner.value_or_empty("name"));
        let _ = black_box(scanner.value_or_empty("value"));
        let _ = black_box(scanner.value_or_empty("x"));
        let _ = black_box(scanner.value_or_empty("y"));
        let _ = black_box(scanner.value_or_empty("z"));
        result += 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_lookup() {
        let scanner = KvScanner::new(SAMPLE_OBJECT);
        assert_eq!(scanner.value("name"), Some("test"));
        assert_eq!(scanner.value("value"), Some("42"));
        assert_eq!(scanner.value("z"), Some("3.5"));
    }

    #[test]
    fn test_missing_key() {
        let scanner = KvScanner::new(SAMPLE_OBJECT);
        assert_eq!(scanner.value("w"), None);
        assert_eq!(scanner.value_or_empty("w"), "");
    }

    #[test]
    fn test_nested_braces_kept() {
        let scanner = KvScanner::new(".pos{.x{1}.y{2}}.tag{a}");
        assert_eq!(scanner.value("pos"), Some(".x{1}.y{2}"));
        assert_eq!(scanner.value("tag"), Some("a"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        // ".x{" first appears inside the nested value
        let scanner = KvScanner::new(".pos{.x{1}}.x{9}");
        assert_eq!(scanner.value("x"), Some("1"));
    }

    #[test]
    fn test_unterminated_value_runs_to_end() {
        let scanner = KvScanner::new(".name{abc{def}");
        assert_eq!(scanner.value("name"), Some("abc{def}"));
    }

    #[test]
    fn test_empty_value() {
        let scanner = KvScanner::new(".empty{}.next{1}");
        assert_eq!(scanner.value("empty"), Some(""));
    }

    #[test]
    fn test_case_insensitive_fallback() {
        let scanner = KvScanner::new(".Name{Alice}.AGE{30}");
        assert_eq!(scanner.value("name"), Some("Alice"));
        assert_eq!(scanner.value("age"), Some("30"));
        assert_eq!(scanner.value("NAME"), Some("Alice"));
    }

    #[test]
    fn test_exact_match_preferred_over_folded() {
        let scanner = KvScanner::new(".Name{first}.name{second}");
        assert_eq!(scanner.value("name"), Some("second"));
        assert_eq!(scanner.value("Name"), Some("first"));
        // Neither spelling matches exactly, so the first folded match is used
        assert_eq!(scanner.value("NAME"), Some("first"));
    }

    #[test]
    fn test_non_ascii_values() {
        let scanner = KvScanner::new(".Ville{Zürich}.note{ç{a}}");
        assert_eq!(scanner.value("ville"), Some("Zürich"));
        assert_eq!(scanner.value("note"), Some("ç{a}"));
    }

    #[test]
    fn test_bench_keyvalue_count() {
        assert_eq!(bench_keyvalue(), KEYVALUE_ITERATIONS);
    }
}

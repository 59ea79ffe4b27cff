/// Decoded document text split into trimmed, non-empty lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentText {
    raw: String,
    lines: Vec<String>,
}

impl DocumentText {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let lines = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();

        Self {
            raw: raw.to_string(),
            lines,
        }
    }

    /// The text as decoded, including blank lines.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The first `n` non-empty lines, where identity fields usually sit.
    #[must_use]
    pub fn header_window(&self, n: usize) -> &[String] {
        &self.lines[..n.min(self.lines.len())]
    }

    /// Length of the text once surrounding whitespace is removed.
    #[must_use]
    pub fn trimmed_len(&self) -> usize {
        self.raw.trim().chars().count()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_trimmed_and_non_empty() {
        let doc = DocumentText::new("  Jane Doe  \n\n\t\nSoftware Engineer\r\n  \nPune");
        assert_eq!(doc.lines(), ["Jane Doe", "Software Engineer", "Pune"]);
        assert!(!doc.is_blank());
    }

    #[test]
    fn test_header_window_clamps() {
        let doc = DocumentText::new("a\nb\nc");
        assert_eq!(doc.header_window(2), ["a", "b"]);
        assert_eq!(doc.header_window(10).len(), 3);
        assert!(doc.header_window(0).is_empty());
    }

    #[test]
    fn test_trimmed_len_counts_chars() {
        let doc = DocumentText::new("   résumé   ");
        assert_eq!(doc.trimmed_len(), 6);
        assert!(DocumentText::new(" \n \n").is_blank());
    }
}

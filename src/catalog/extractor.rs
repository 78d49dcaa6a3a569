use std::sync::LazyLock;

use regex::Regex;

use crate::models::{DocumentId, Occurrence};

/// A maximal run of label body characters; must agree with `is_label_char`.
static LABEL_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Alphabetic}\p{N}_/-]+").expect("label body pattern is valid")
});

/// Returns true for characters that may appear in a label body.
///
/// Letters here are the Unicode `Alphabetic` property, which includes the
/// combining vowel signs of Indic and Southeast Asian scripts.
pub fn is_label_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == '/'
}

/// Scans one document for label mentions.
///
/// Inline labels are a marker followed by one or more label characters, where
/// the marker sits at the start of the line or after a non-label character.
/// Front-matter labels come pre-parsed from the caller and yield exactly one
/// occurrence each.
#[derive(Debug, Clone, Copy)]
pub struct OccurrenceExtractor {
    marker: char,
}

impl OccurrenceExtractor {
    pub fn new(marker: char) -> Self {
        Self { marker }
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    /// Extracts every label occurrence from a document.
    ///
    /// Front-matter occurrences come first, followed by inline occurrences in
    /// line order. A label present in both places yields two occurrences.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagcat::{DocumentId, OccurrenceExtractor};
    ///
    /// let extractor = OccurrenceExtractor::new('#');
    /// let found = extractor.extract(&DocumentId::from("a.md"), "ship #todo and #done", &[]);
    /// let labels: Vec<&str> = found.iter().map(|(label, _)| label.as_str()).collect();
    /// assert_eq!(labels, vec!["#todo", "#done"]);
    /// ```
    pub fn extract(
        &self,
        document: &DocumentId,
        text: &str,
        front_matter_tags: &[String],
    ) -> Vec<(String, Occurrence)> {
        let lines: Vec<&str> = text.lines().collect();

        let mut found = self.extract_front_matter(document, &lines, front_matter_tags);
        for (line_number, line) in lines.iter().enumerate() {
            found.extend(self.extract_inline(document, line_number, line));
        }
        found
    }

    fn extract_front_matter(
        &self,
        document: &DocumentId,
        lines: &[&str],
        tags: &[String],
    ) -> Vec<(String, Occurrence)> {
        tags.iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(|tag| {
                let label = if tag.starts_with(self.marker) {
                    tag.to_string()
                } else {
                    format!("{}{tag}", self.marker)
                };

                let (line, context) = lines
                    .iter()
                    .enumerate()
                    .find(|(_, line)| line.contains(tag))
                    .map_or((0, ""), |(number, line)| (number, *line));

                let occurrence =
                    Occurrence::front_matter(document.clone(), line, context, tag.chars().count());
                (label, occurrence)
            })
            .collect()
    }

    fn extract_inline(
        &self,
        document: &DocumentId,
        line_number: usize,
        line: &str,
    ) -> Vec<(String, Occurrence)> {
        let mut found = Vec::new();

        for body in LABEL_BODY.find_iter(line) {
            let before = &line[..body.start()];
            let Some(marker_at) = before.strip_suffix(self.marker).map(str::len) else {
                continue;
            };

            // The marker itself must be at line start or follow a non-label char
            let preceded_by_label = line[..marker_at]
                .chars()
                .next_back()
                .is_some_and(is_label_char);
            if preceded_by_label {
                continue;
            }

            let label = &line[marker_at..body.end()];
            let start = line[..marker_at].chars().count();
            let end = start + label.chars().count();

            found.push((
                label.to_string(),
                Occurrence::inline(document.clone(), line_number, line, start, end),
            ));
        }

        found
    }
}

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::config::NormalizationRules;

/// Maps raw labels to their canonical comparison form.
///
/// Normalization is pure and total: every input, including the empty string,
/// has a defined output. Labels that share a canonical form stay separate
/// catalog entries; the canonical form only feeds similarity scoring.
pub struct LabelNormalizer;

impl LabelNormalizer {
    /// Normalizes a single label under the given rules.
    ///
    /// # Normalization rules
    ///
    /// Each enabled rule runs in this fixed order:
    ///
    /// - Case folding: lowercase
    /// - Diacritic stripping: canonical decomposition, drop combining marks, recompose
    /// - Underscore folding: `_` becomes `-`
    /// - Punctuation stripping: keep only word characters, whitespace, `-` and `/`
    ///
    /// # Examples
    ///
    /// ```
    /// use tagcat::{LabelNormalizer, NormalizationRules};
    ///
    /// let rules = NormalizationRules::default();
    /// assert_eq!(LabelNormalizer::normalize("#Café_Notes", &rules), "cafe-notes");
    /// assert_eq!(LabelNormalizer::normalize("#proj/Back_End", &rules), "proj/back-end");
    /// assert_eq!(LabelNormalizer::normalize("", &rules), "");
    /// ```
    #[must_use]
    pub fn normalize(label: &str, rules: &NormalizationRules) -> String {
        let mut normalized = label.to_string();

        if rules.case_folding {
            normalized = normalized.to_lowercase();
        }

        if rules.remove_diacritics {
            normalized = normalized
                .nfd()
                .filter(|c| !is_combining_mark(*c))
                .nfc()
                .collect();
        }

        if rules.underscores_to_dashes {
            normalized = normalized.replace('_', "-");
        }

        if rules.strip_punctuation {
            normalized.retain(|c| {
                c.is_alphanumeric() || c == '_' || c.is_whitespace() || c == '-' || c == '/'
            });
        }

        normalized
    }
}

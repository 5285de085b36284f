//! Feature extraction and noise filtering for heading classification.

/// Fixed-shape feature record consumed by the heading classifier.
///
/// Field order matches the feature order the trained model expects:
/// font size, boldness flag, capitalization ratio, word count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    /// Effective font size in points
    pub font_size: f32,
    /// 1 if the font name contains "Bold", else 0
    pub bold: u32,
    /// Uppercase characters / total characters, in [0, 1]
    pub caps_ratio: f32,
    /// Whitespace-delimited token count
    pub word_count: u32,
}

impl FeatureVector {
    /// Extract features from a text run and its font attributes.
    ///
    /// Pure function: no error conditions.
    pub fn extract(text: &str, font_size: f32, font_name: &str) -> Self {
        let char_count = text.chars().count();
        let upper_count = text.chars().filter(|c| c.is_uppercase()).count();

        Self {
            font_size,
            bold: u32::from(font_name.contains("Bold")),
            caps_ratio: upper_count as f32 / char_count.max(1) as f32,
            word_count: text.split_whitespace().count() as u32,
        }
    }

    /// The features in model input order.
    pub fn to_array(self) -> [f32; 4] {
        [
            self.font_size,
            self.bold as f32,
            self.caps_ratio,
            self.word_count as f32,
        ]
    }
}

/// Check whether a trimmed text run is non-heading noise.
///
/// Filters out page numbers, ellipses, and footer fragments before the
/// classifier ever sees them: runs shorter than 3 characters, all
/// whitespace, all punctuation, starting with "page" (case-insensitive),
/// containing more than 5 dots, or ending with "of" (case-insensitive).
pub fn is_noise(text: &str) -> bool {
    if text.chars().count() < 3 || text.trim().is_empty() {
        return true;
    }

    if text.chars().all(|c| c.is_ascii_punctuation()) {
        return true;
    }

    let lower = text.to_lowercase();
    if lower.starts_with("page") || lower.ends_with("of") {
        return true;
    }

    text.matches('.').count() > 5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bold_all_caps() {
        let features = FeatureVector::extract("INTRODUCTION", 18.0, "Helvetica-Bold");
        assert_eq!(features.font_size, 18.0);
        assert_eq!(features.bold, 1);
        assert_eq!(features.caps_ratio, 1.0);
        assert_eq!(features.word_count, 1);
    }

    #[test]
    fn test_extract_regular_text() {
        let features = FeatureVector::extract("Quick brown fox", 11.0, "Times-Roman");
        assert_eq!(features.bold, 0);
        assert_eq!(features.word_count, 3);
        // Only the leading 'Q' is uppercase
        assert!((features.caps_ratio - 1.0 / 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_extract_empty_text() {
        // No division by zero; everything collapses to zero
        let features = FeatureVector::extract("", 10.0, "Helvetica");
        assert_eq!(features.caps_ratio, 0.0);
        assert_eq!(features.word_count, 0);
    }

    #[test]
    fn test_caps_ratio_bounds() {
        for text in ["abc", "ABC", "AbC", "a1B2", "...", "Ä ö Ü"] {
            let f = FeatureVector::extract(text, 12.0, "Helvetica");
            assert!((0.0..=1.0).contains(&f.caps_ratio), "text: {text:?}");
        }
    }

    #[test]
    fn test_bold_is_case_sensitive() {
        assert_eq!(FeatureVector::extract("x", 10.0, "Arial-bold").bold, 0);
        assert_eq!(FeatureVector::extract("x", 10.0, "Arial-BoldMT").bold, 1);
    }

    #[test]
    fn test_to_array_order() {
        let features = FeatureVector::extract("TWO words", 14.5, "Helvetica-Bold");
        let arr = features.to_array();
        assert_eq!(arr[0], 14.5);
        assert_eq!(arr[1], 1.0);
        assert!((arr[2] - 3.0 / 9.0).abs() < 1e-6);
        assert_eq!(arr[3], 2.0);
    }

    #[test]
    fn test_noise_short_text() {
        assert!(is_noise(""));
        assert!(is_noise("ab"));
        assert!(!is_noise("abc"));
    }

    #[test]
    fn test_noise_punctuation() {
        assert!(is_noise("...."));
        assert!(is_noise("---"));
        assert!(!is_noise("a.b"));
    }

    #[test]
    fn test_noise_page_prefix() {
        assert!(is_noise("Page 12"));
        assert!(is_noise("page 3 of 10"));
        // The prefix rule is deliberately blunt
        assert!(is_noise("Pagination strategies"));
        assert!(!is_noise("Product overview"));
    }

    #[test]
    fn test_noise_trailing_of() {
        assert!(is_noise("3 of"));
        assert!(is_noise("Table of"));
        assert!(!is_noise("Officers"));
    }

    #[test]
    fn test_noise_dot_leaders() {
        assert!(is_noise("Contents......4"));
        assert!(!is_noise("Section 1.2.3"));
    }
}

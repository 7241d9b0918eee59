use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fallback stem for captions that slugify to nothing (empty input, or
/// scripts with no ASCII decomposition).
pub const DEFAULT_STEM: &str = "snapbooth";

/// Convert a caption to an ASCII-safe file stem
/// - Strips diacritics via Unicode NFD decomposition
/// - Replaces spaces and non-alphanumeric with underscores
/// - Collapses multiple underscores
/// - Trims leading/trailing underscores
pub fn slugify(input: &str) -> String {
    // Pre-allocate with input length as estimate
    let mut result = String::with_capacity(input.len());
    let mut last_was_underscore = false;

    // Single pass through NFD-normalized characters
    for ch in input.nfd() {
        // Skip combining marks (diacritics)
        if is_combining_mark(ch) {
            continue;
        }

        // Handle spaces and valid characters
        if ch.is_whitespace() {
            if !last_was_underscore && !result.is_empty() {
                result.push('_');
                last_was_underscore = true;
            }
        } else if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.') {
            result.push(ch);
            last_was_underscore = false;
        } else if !ch.is_control() {
            // Replace other characters with underscore
            if !last_was_underscore && !result.is_empty() {
                result.push('_');
                last_was_underscore = true;
            }
        }
        // Skip control characters entirely
    }

    // Trim trailing underscore if present
    if result.ends_with('_') {
        result.pop();
    }

    result
}

/// Slugify a caption for use as a saved-photo file stem, falling back to
/// [`DEFAULT_STEM`] when nothing survives.
pub fn caption_stem(caption: &str) -> String {
    let slug = slugify(caption);
    if slug.is_empty() {
        DEFAULT_STEM.to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_to_underscores() {
        assert_eq!(slugify("Hello World"), "Hello_World");
        assert_eq!(slugify("  multiple   spaces  "), "multiple_spaces");
    }

    #[test]
    fn test_diacritics() {
        assert_eq!(slugify("café"), "cafe");
        assert_eq!(slugify("naïve"), "naive");
    }

    #[test]
    fn test_special_characters() {
        assert_eq!(slugify("best day (ever) – 2024"), "best_day_ever_2024");
        assert_eq!(slugify("photo#1@booth"), "photo_1_booth");
    }

    #[test]
    fn test_collapse_underscores() {
        assert_eq!(slugify("a___b"), "a_b");
        assert_eq!(slugify("___start"), "start");
        assert_eq!(slugify("end___"), "end");
    }

    #[test]
    fn test_caption_stem_fallback() {
        assert_eq!(caption_stem(""), DEFAULT_STEM);
        // Hangul has no ASCII decomposition; the stem falls back
        assert_eq!(caption_stem("안녕"), DEFAULT_STEM);
        assert_eq!(caption_stem("Hello"), "Hello");
    }
}

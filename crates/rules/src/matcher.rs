//! Match/unmatch test shared by the filter engine and the diagram processor.
//!
//! A pattern is compiled as a case-insensitive regex; if it does not compile,
//! the test degrades to a case-insensitive substring containment scan. Both
//! modes report the matched span so the diagram path can slice the matched
//! substring out of the original content.

use regex::RegexBuilder;
use tracing::warn;

/// Byte span of a match within the tested text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    /// Slice the matched substring out of the text the span came from.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// A pre-compiled match test.
#[derive(Debug, Clone)]
pub struct MatchTest {
    mode: Mode,
}

#[derive(Debug, Clone)]
enum Mode {
    Regex(regex::Regex),
    Substring(String),
}

impl MatchTest {
    /// Compile a pattern, degrading to substring containment when the
    /// pattern is not a valid regex.
    pub fn new(pattern: &str) -> MatchTest {
        let mode = match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(re) => Mode::Regex(re),
            Err(error) => {
                warn!(pattern = %pattern, error = %error,
                    "pattern is not a valid regex, using substring containment");
                Mode::Substring(pattern.to_string())
            }
        };
        MatchTest { mode }
    }

    /// Whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// First match of the pattern in `text`, if any.
    pub fn find(&self, text: &str) -> Option<MatchSpan> {
        match &self.mode {
            Mode::Regex(re) => re.find(text).map(|m| MatchSpan {
                start: m.start(),
                end: m.end(),
            }),
            Mode::Substring(needle) => find_ignore_ascii_case(text, needle),
        }
    }
}

/// Case-insensitive substring scan over the original bytes.
///
/// Comparing in place (instead of lowercasing a copy) keeps the returned
/// offsets valid for slicing the original text.
fn find_ignore_ascii_case(text: &str, needle: &str) -> Option<MatchSpan> {
    if needle.is_empty() || needle.len() > text.len() {
        return None;
    }
    let text_bytes = text.as_bytes();
    let needle_bytes = needle.as_bytes();
    (0..=text_bytes.len() - needle_bytes.len())
        .filter(|&start| text.is_char_boundary(start))
        .find(|&start| {
            text_bytes[start..start + needle_bytes.len()].eq_ignore_ascii_case(needle_bytes)
        })
        .map(|start| MatchSpan {
            start,
            end: start + needle_bytes.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regex_match_is_case_insensitive() {
        let test = MatchTest::new("session\\s+started");
        assert!(test.is_match("User Session Started at 08:00"));
        assert!(!test.is_match("session stopped"));
    }

    #[test]
    fn invalid_regex_degrades_to_substring() {
        // Unbalanced bracket: not a valid regex, but a legitimate literal.
        let test = MatchTest::new("[Session");
        assert!(test.is_match("start [session 42]"));
        assert!(!test.is_match("start session 42"));
    }

    #[test]
    fn substring_mode_ignores_case() {
        let test = MatchTest::new("[ERROR]");
        let span = test.find("12:00 [error] disk full").unwrap();
        assert_eq!(span.slice("12:00 [error] disk full"), "[error]");
    }

    #[test]
    fn find_reports_regex_span() {
        let test = MatchTest::new("SessionId=");
        let content = "Connected to SessionId=12345";
        let span = test.find(content).unwrap();
        assert_eq!(span.slice(content), "SessionId=");
        assert_eq!(&content[span.end..], "12345");
    }

    #[test]
    fn empty_pattern_never_matches_in_substring_mode() {
        assert_eq!(find_ignore_ascii_case("anything", ""), None);
    }

    #[test]
    fn needle_longer_than_text_does_not_match() {
        let test = MatchTest::new("[longer than text");
        assert!(!test.is_match("[long"));
    }
}

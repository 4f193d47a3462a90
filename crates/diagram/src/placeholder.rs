//! Template placeholder resolver for diagram action text.
//!
//! Placeholders splice substrings of the matched record text into the
//! action's output text:
//! - `{afterMatch}`: content following the first occurrence of the match
//! - `{afterMatch:untilSpace}`: as above, truncated at the first space
//! - `{afterMatch:until:X}`: as above, truncated at literal character `X`
//! - `{beforeMatch}`: content preceding the first occurrence of the match
//! - `{extract:<regex>}`: first capture group of the first match (whole
//!   match when the regex has no group)
//!
//! Each placeholder resolves independently against the original content;
//! anything unresolved becomes the empty string, never literal `{...}` text.

use regex::Regex;
use tracing::warn;

/// Resolve all placeholders in `template` against `content`, where
/// `matched` is the substring the rule's match test found in `content`.
pub fn resolve(template: &str, content: &str, matched: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        match find_close(&rest[open..]) {
            Some(close) => {
                let token = &rest[open + 1..open + close];
                out.push_str(&resolve_token(token, content, matched));
                rest = &rest[open + close + 1..];
            }
            None => {
                // Unterminated brace: keep the tail literally.
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Offset of the matching `}` in a string starting with `{`.
///
/// Tracks nesting depth so regex repetition counts like `\d{2,4}` inside
/// `{extract:...}` do not terminate the token early.
fn find_close(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn resolve_token(token: &str, content: &str, matched: &str) -> String {
    if token == "afterMatch" {
        return after_match(content, matched).to_string();
    }
    if token == "afterMatch:untilSpace" {
        return until_char(after_match(content, matched), ' ').to_string();
    }
    if let Some(delim) = token.strip_prefix("afterMatch:until:") {
        return match delim.chars().next() {
            Some(c) => until_char(after_match(content, matched), c).to_string(),
            None => after_match(content, matched).to_string(),
        };
    }
    if token == "beforeMatch" {
        return before_match(content, matched).to_string();
    }
    if let Some(pattern) = token.strip_prefix("extract:") {
        return extract(pattern, content);
    }
    // Unknown placeholder resolves to empty rather than leaking into output.
    String::new()
}

/// Content following the first occurrence of `matched`; empty when absent.
fn after_match<'a>(content: &'a str, matched: &str) -> &'a str {
    if matched.is_empty() {
        return "";
    }
    match content.find(matched) {
        Some(pos) => &content[pos + matched.len()..],
        None => "",
    }
}

/// Content preceding the first occurrence of `matched`; empty when absent.
fn before_match<'a>(content: &'a str, matched: &str) -> &'a str {
    if matched.is_empty() {
        return "";
    }
    match content.find(matched) {
        Some(pos) => &content[..pos],
        None => "",
    }
}

/// Truncate at the first occurrence of `delim` (full input when absent).
fn until_char(s: &str, delim: char) -> &str {
    match s.find(delim) {
        Some(pos) => &s[..pos],
        None => s,
    }
}

/// First capture group (or whole match) of `pattern` against `content`.
fn extract(pattern: &str, content: &str) -> String {
    let re = match Regex::new(pattern) {
        Ok(re) => re,
        Err(error) => {
            warn!(pattern = %pattern, error = %error, "invalid extract placeholder regex");
            return String::new();
        }
    };
    match re.captures(content) {
        Some(caps) => caps
            .get(1)
            .or_else(|| caps.get(0))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn after_match_takes_remainder() {
        let out = resolve("{afterMatch}", "Connected to SessionId=12345", "SessionId=");
        assert_eq!(out, "12345");
    }

    #[test]
    fn after_match_until_space() {
        let out = resolve(
            "{afterMatch:untilSpace}",
            "Connected to SessionId=12345 with user",
            "SessionId=",
        );
        assert_eq!(out, "12345");
    }

    #[test]
    fn after_match_until_literal_char() {
        let out = resolve("{afterMatch:until:,}", "Time=500, SessionId=1", "Time=");
        assert_eq!(out, "500");
    }

    #[test]
    fn before_match_takes_prefix() {
        let out = resolve("{beforeMatch}", "User connected", "connected");
        assert_eq!(out, "User ");
    }

    #[test]
    fn extract_first_capture_group() {
        let out = resolve("{extract:user=(\\w+)}", "login user=alice ok", "login");
        assert_eq!(out, "alice");
    }

    #[test]
    fn extract_without_group_uses_whole_match() {
        let out = resolve("{extract:\\d+ms}", "took 120ms total", "took");
        assert_eq!(out, "120ms");
    }

    #[test]
    fn extract_with_repetition_braces() {
        let out = resolve("{extract:(\\d{4}-\\d{2}-\\d{2})}", "at 2025-06-14 noon", "at");
        assert_eq!(out, "2025-06-14");
    }

    #[test]
    fn unresolved_placeholders_become_empty() {
        assert_eq!(resolve("{afterMatch}", "no such needle", "missing"), "");
        assert_eq!(resolve("{bogus}", "content", "content"), "");
        assert_eq!(resolve("{extract:[bad}", "content", "content"), "");
        assert_eq!(resolve("{extract:zzz}", "content", "content"), "");
    }

    #[test]
    fn mixed_template_with_literal_text() {
        let out = resolve(
            "session {afterMatch:untilSpace} from {extract:host=(\\S+)}",
            "open id=42 host=db01 ok",
            "id=",
        );
        assert_eq!(out, "session 42 from db01");
    }

    #[test]
    fn multiple_placeholders_resolve_independently() {
        let out = resolve(
            "{beforeMatch}|{afterMatch}",
            "left MID right",
            "MID",
        );
        assert_eq!(out, "left | right");
    }

    #[test]
    fn unterminated_brace_kept_literally() {
        assert_eq!(resolve("text {afterMatch", "a b", "a"), "text {afterMatch");
    }

    #[test]
    fn template_without_placeholders_passes_through() {
        assert_eq!(resolve("plain text", "content", "c"), "plain text");
    }
}

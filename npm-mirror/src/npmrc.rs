//! Editing the `registry=` directive of an `.npmrc` file.
//!
//! The file is handled as plain text. Only the directive line is touched;
//! every other line keeps its bytes.

use once_cell::sync::Lazy;
use regex::Regex;

/// `registry=<value>` at the start of a line, with `\n` or `\r\n` endings
static REGISTRY_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mR)^registry=(.+)")
        .expect("registry directive regex should compile - this is a static pattern")
});

/// A `registry=` line found in `.npmrc` text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Byte offset of the start of the line
    pub offset: usize,
    /// The configured URL, trimmed
    pub value: String,
}

/// Find the first `registry=` directive
pub fn find_directive(text: &str) -> Option<Directive> {
    let captures = REGISTRY_DIRECTIVE.captures(text)?;
    let line = captures.get(0)?;
    let value = captures.get(1)?;
    Some(Directive {
        offset: line.start(),
        value: value.as_str().trim().to_string(),
    })
}

/// Remove the line starting at `offset`, including its terminator.
///
/// Whitespace following the removed line is trimmed so no blank line is left
/// in its place. When the line is the last one, trailing whitespace of the
/// preceding text is trimmed instead.
pub fn delete_line(text: &str, offset: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    match text[offset..].find('\n') {
        Some(newline) => {
            let rest = &text[offset + newline + 1..];
            format!("{}{}", &text[..offset], rest.trim_start())
        }
        None => text[..offset].trim_end().to_string(),
    }
}

/// Line separator already used by the file
fn line_ending(text: &str) -> &'static str {
    if text.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Append `registry=<url>` as a new last line
pub fn append_directive(text: &str, url: &str) -> String {
    let nl = line_ending(text);
    let line = format!("registry={}{}", url, nl);
    let existing = text.trim_end();
    if existing.is_empty() {
        line
    } else {
        format!("{}{}{}", existing, nl, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://registry.npmmirror.com";

    #[test]
    fn test_find_directive_trims_value() {
        let text = "save-exact=true\nregistry= https://mirror.example  \nfund=false\n";
        let directive = find_directive(text).unwrap();
        assert_eq!(directive.offset, "save-exact=true\n".len());
        assert_eq!(directive.value, "https://mirror.example");
    }

    #[test]
    fn test_find_directive_is_anchored_to_line_start() {
        assert!(find_directive("@scope:registry=https://npm.pkg.github.com\n").is_none());
        assert!(find_directive("  registry=https://mirror.example\n").is_none());
        assert!(find_directive("registry=\n").is_none());
    }

    #[test]
    fn test_find_directive_with_crlf() {
        let text = "fund=false\r\nregistry=https://mirror.example\r\n";
        let directive = find_directive(text).unwrap();
        assert_eq!(directive.offset, "fund=false\r\n".len());
        assert_eq!(directive.value, "https://mirror.example");
    }

    #[test]
    fn test_delete_middle_line_keeps_neighbours() {
        let text = format!("a=1\nregistry={}\nb=2\n", URL);
        let offset = find_directive(&text).unwrap().offset;
        assert_eq!(delete_line(&text, offset), "a=1\nb=2\n");
    }

    #[test]
    fn test_delete_first_line_leaves_no_blank_line() {
        let text = format!("registry={}\n\nb=2\n", URL);
        assert_eq!(delete_line(&text, 0), "b=2\n");
    }

    #[test]
    fn test_delete_last_line_without_newline() {
        let text = format!("a=1\n\nregistry={}", URL);
        let offset = find_directive(&text).unwrap().offset;
        assert_eq!(delete_line(&text, offset), "a=1");
    }

    #[test]
    fn test_delete_only_line_yields_empty() {
        let text = format!("registry={}\n", URL);
        assert_eq!(delete_line(&text, 0), "");
    }

    #[test]
    fn test_delete_crlf_line() {
        let text = format!("a=1\r\nregistry={}\r\nb=2\r\n", URL);
        let offset = find_directive(&text).unwrap().offset;
        assert_eq!(delete_line(&text, offset), "a=1\r\nb=2\r\n");
    }

    #[test]
    fn test_delete_line_on_empty_text() {
        assert_eq!(delete_line("", 0), "");
    }

    #[test]
    fn test_append_to_empty_text() {
        assert_eq!(append_directive("", URL), format!("registry={}\n", URL));
        assert_eq!(append_directive(" \n\n", URL), format!("registry={}\n", URL));
    }

    #[test]
    fn test_append_after_trimmed_content() {
        assert_eq!(
            append_directive("a=1\n\n\n", URL),
            format!("a=1\nregistry={}\n", URL)
        );
        assert_eq!(append_directive("a=1", URL), format!("a=1\nregistry={}\n", URL));
    }

    #[test]
    fn test_append_keeps_crlf_style() {
        assert_eq!(
            append_directive("a=1\r\n", URL),
            format!("a=1\r\nregistry={}\r\n", URL)
        );
    }

    #[test]
    fn test_append_then_delete_round_trip() {
        let original = "a=1\r\nb=2\r\n";
        let appended = append_directive(original, URL);
        let offset = find_directive(&appended).unwrap().offset;
        assert_eq!(delete_line(&appended, offset), original);
    }
}

//! PII redaction for log lines that may carry raw database error text.
//!
//! Raw `DbErr` messages can embed member emails (unique-constraint details)
//! or opaque external-system tokens. Everything logged through `Redacted`
//! gets masked before it reaches the subscriber.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// Vetted literals; construction cannot fail.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
});

static BASE64_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9+/]{16,}={0,2}\b").unwrap()
});

static HEX_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Fa-f0-9]{16,}\b").unwrap()
});

/// Redacts sensitive information from a string.
///
/// Masks emails (keeps first character of the local part and the full
/// domain) and opaque base64-like or hex runs of 16+ characters.
/// Order: emails first, then tokens, to avoid double-processing.
pub fn redact(input: &str) -> String {
    let email_redacted = EMAIL.replace_all(input, |caps: &regex::Captures| {
        let full_match = &caps[0];
        match full_match.find('@') {
            Some(at_pos) if at_pos > 0 => {
                format!("{}***{}", &full_match[..1], &full_match[at_pos..])
            }
            _ => full_match.to_string(),
        }
    });

    let base64_redacted = BASE64_TOKEN.replace_all(&email_redacted, "[REDACTED_TOKEN]");

    HEX_TOKEN
        .replace_all(&base64_redacted, "[REDACTED_TOKEN]")
        .to_string()
}

/// A wrapper that automatically redacts sensitive strings when displayed.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

// Debug must redact too; a `{:?}` in a log line is not an escape hatch.
impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_keep_first_char_and_domain() {
        assert_eq!(redact("coach@kcvoorwaarts.be"), "c***@kcvoorwaarts.be");
        assert_eq!(redact("a@club.test"), "a***@club.test");
        assert_eq!(
            redact("duplicate key value: player@example.com"),
            "duplicate key value: p***@example.com"
        );
    }

    #[test]
    fn opaque_tokens_are_masked() {
        assert_eq!(
            redact("twizzit token a1b2c3d4e5f678901234567890123456"),
            "twizzit token [REDACTED_TOKEN]"
        );
        // Short runs are left untouched
        assert_eq!(redact("TWZ-1234"), "TWZ-1234");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(redact("roster rejected for game 7"), "roster rejected for game 7");
        assert_eq!(redact(""), "");
    }

    #[test]
    fn redacted_wrapper_masks_display_and_debug() {
        let wrapped = Redacted("coach@kcvoorwaarts.be");
        assert_eq!(format!("{wrapped}"), "c***@kcvoorwaarts.be");
        assert_eq!(format!("{wrapped:?}"), "c***@kcvoorwaarts.be");
    }
}

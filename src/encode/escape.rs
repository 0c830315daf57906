//! Text escaping for marker labels
//!
//! Commas separate marker fields, so a literal comma in a label is written as
//! `\,` before the label is form-encoded (space as `+`, everything outside
//! `A-Za-z0-9_.-~` as `%XX`).

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Bytes that are percent-encoded. Space is left alone here and turned into `+` afterwards.
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b' ')
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Escape commas, then form-encode the result.
pub fn escape_text(text: &str) -> String {
    let escaped = text.replace(',', "\\,");
    // '+' is in FORM, so every '+' in the output stands for a space
    utf8_percent_encode(&escaped, FORM)
        .to_string()
        .replace(' ', "+")
}

/// Inverse of [`escape_text`].
///
/// Returns `None` when the decoded bytes are not valid UTF-8.
pub fn unescape_text(encoded: &str) -> Option<String> {
    let spaced = encoded.replace('+', " ");
    let decoded: Cow<'_, str> = percent_decode_str(&spaced).decode_utf8().ok()?;
    Some(decoded.replace("\\,", ","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_gets_backslash_before_encoding() {
        assert_eq!(escape_text("hi, world"), "hi%5C%2C+world");
    }

    #[test]
    fn plain_words_pass_through() {
        assert_eq!(escape_text("hello"), "hello");
        assert_eq!(escape_text("a_b.c-d~e"), "a_b.c-d~e");
        assert_eq!(escape_text(""), "");
    }

    #[test]
    fn reserved_characters_are_encoded() {
        assert_eq!(escape_text("hello, world!"), "hello%5C%2C+world%21");
        assert_eq!(escape_text("a|b&c=d"), "a%7Cb%26c%3Dd");
        assert_eq!(escape_text("1+1"), "1%2B1");
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(escape_text("é"), "%C3%A9");
    }

    #[test]
    fn round_trips() {
        for s in ["hi, world", "hello, world!", ",,", "1 + 1 = 2", "a\\b", "naïve, café", ""] {
            let encoded = escape_text(s);
            assert_eq!(unescape_text(&encoded).as_deref(), Some(s), "via {encoded:?}");
        }
    }

    #[test]
    fn unescape_rejects_invalid_utf8() {
        assert_eq!(unescape_text("%FF"), None);
    }
}

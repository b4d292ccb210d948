//! Text normalization - display cleaning and comparison keys
//!
//! Two kinds of output come out of this module:
//!
//! - **Display text** ([`clean_field`], [`clean_text`]): what the cleaner
//!   writes. Only cosmetic damage is repaired (line endings, invisible
//!   spaces, curly quotes, stray padding).
//! - **Comparison keys** ([`term_key`], [`validation_key`]): never displayed,
//!   only compared to decide whether two terms denote the same entry.
//!
//! # Two keys
//!
//! The cleaner and the validator do not use the same key. [`term_key`] turns
//! zero-width characters into spaces before comparing; [`validation_key`]
//! leaves them in place, so `"no\u{200B}cap"` and `"no cap"` are one entry to
//! the cleaner but two distinct terms to the validator.

use std::borrow::Cow;

use serde_json::Value;

/// Characters treated as invisible whitespace and replaced by a plain space.
///
/// NO-BREAK SPACE, ZERO WIDTH SPACE, WORD JOINER, ZWNJ, ZWJ and a BOM that
/// ended up inside the text.
pub const INVISIBLE_WHITESPACE: [char; 6] = [
    '\u{00A0}', '\u{200B}', '\u{2060}', '\u{200C}', '\u{200D}', '\u{FEFF}',
];

const LEFT_SINGLE_QUOTE: char = '\u{2018}';
const RIGHT_SINGLE_QUOTE: char = '\u{2019}';
const LEFT_DOUBLE_QUOTE: char = '\u{201C}';
const RIGHT_DOUBLE_QUOTE: char = '\u{201D}';

// ── Character classes ─────────────────────────────────────

/// Whitespace for trimming and collapsing: Unicode `White_Space` minus NEL
/// (U+0085), plus BOM. This is the set JavaScript's `\s` and `trim` use,
/// which the dataset's other tooling relies on.
pub fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

fn is_invisible(c: char) -> bool {
    INVISIBLE_WHITESPACE.contains(&c)
}

/// Trim leading and trailing whitespace (see [`is_space`])
pub fn trim_space(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Length in UTF-16 code units, the unit every length limit and the
/// cleaner's tie-break are expressed in. Characters outside the BMP (most
/// emoji) count as two.
pub fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Trim, then collapse every internal whitespace run into one space
pub fn collapse_whitespace(s: &str) -> String {
    s.split(is_space)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn straighten_single_quotes(s: &str) -> String {
    s.replace([LEFT_SINGLE_QUOTE, RIGHT_SINGLE_QUOTE], "'")
}

// ── Comparison keys ───────────────────────────────────────

/// Cleaner de-duplication key for a term.
///
/// Invisible whitespace → space, lowercase, trim, collapse whitespace runs,
/// curly single quotes → `'`.
pub fn term_key(term: &str) -> String {
    let visible: String = term
        .chars()
        .map(|c| if is_invisible(c) { ' ' } else { c })
        .collect();
    straighten_single_quotes(&collapse_whitespace(&visible.to_lowercase()))
}

/// Validator uniqueness key for a term.
///
/// Same as [`term_key`] minus the invisible-whitespace replacement.
pub fn validation_key(term: &str) -> String {
    straighten_single_quotes(&collapse_whitespace(&term.to_lowercase()))
}

// ── Display cleaning ──────────────────────────────────────

/// Text of a raw field before cleaning.
///
/// Absent and null read as empty. Everything else is stringified the way
/// the dataset's JavaScript tooling does it: arrays join their elements with
/// `,` (null elements empty), objects become `[object Object]`.
pub fn field_text(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(Value::Null) | None => Cow::Borrowed(""),
        Some(other) => Cow::Owned(stringify(other)),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Integral floats print without a fraction (`1.0` → `1`)
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

/// Whether a value is JavaScript-falsy: null, `false`, `0` or `""`
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Clean a raw field value for display
pub fn clean_field(value: Option<&Value>) -> String {
    clean_text(&field_text(value))
}

/// Clean display text.
///
/// In order: drop `\r`, invisible whitespace → space, drop spaces and tabs
/// right before a newline, straighten curly quotes, trim.
pub fn clean_text(text: &str) -> String {
    let mapped: String = text
        .chars()
        .filter(|&c| c != '\r')
        .map(|c| match c {
            c if is_invisible(c) => ' ',
            LEFT_SINGLE_QUOTE | RIGHT_SINGLE_QUOTE => '\'',
            LEFT_DOUBLE_QUOTE | RIGHT_DOUBLE_QUOTE => '"',
            c => c,
        })
        .collect();

    let mut lines: Vec<&str> = mapped.split('\n').collect();
    let last = lines.len() - 1;
    for line in &mut lines[..last] {
        *line = line.trim_end_matches([' ', '\t']);
    }

    trim_space(&lines.join("\n")).to_string()
}

// ── Tests ─────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_term_key_case_and_padding() {
        assert_eq!(term_key("YOLO"), "yolo");
        assert_eq!(term_key("  yolo "), "yolo");
        assert_eq!(term_key("No   Cap"), "no cap");
        assert_eq!(term_key("no\tcap\n"), "no cap");
    }

    #[test]
    fn test_term_key_invisible_whitespace() {
        assert_eq!(term_key("no\u{00A0}cap"), "no cap");
        assert_eq!(term_key("no\u{200B}cap"), "no cap");
        assert_eq!(term_key("\u{FEFF}bussin"), "bussin");
        assert_eq!(term_key("main\u{200D}\u{200C}character"), "main character");
    }

    #[test]
    fn test_term_key_curly_quotes() {
        assert_eq!(term_key("it\u{2019}s giving"), "it's giving");
        assert_eq!(term_key("\u{2018}sup"), "'sup");
    }

    #[test]
    fn test_validation_key_keeps_zero_width_characters() {
        assert_eq!(validation_key("Rizz "), "rizz");
        assert_eq!(validation_key("It\u{2019}s  Giving"), "it's giving");
        assert_eq!(validation_key("no\u{200B}cap"), "no\u{200B}cap");
        assert_ne!(validation_key("no\u{200B}cap"), term_key("no\u{200B}cap"));
    }

    #[test]
    fn test_validation_key_collapses_no_break_space() {
        // NBSP is Unicode whitespace, so both keys agree on it
        assert_eq!(validation_key("no\u{00A0}cap"), "no cap");
    }

    #[test]
    fn test_clean_text_line_endings() {
        assert_eq!(clean_text("line one  \r\nline two\t\r\n"), "line one\nline two");
        assert_eq!(clean_text("a \t \nb"), "a\nb");
    }

    #[test]
    fn test_clean_text_keeps_inner_spacing() {
        // Only padding before a newline is removed, not internal runs
        assert_eq!(clean_text("  no   cap  "), "no   cap");
    }

    #[test]
    fn test_clean_text_invisible_before_newline() {
        assert_eq!(clean_text("slay\u{00A0}\nqueen"), "slay\nqueen");
    }

    #[test]
    fn test_clean_text_quotes() {
        assert_eq!(
            clean_text("\u{201C}it\u{2019}s giving\u{201D}"),
            "\"it's giving\""
        );
    }

    #[test]
    fn test_clean_text_is_idempotent() {
        let once = clean_text(" \u{FEFF}low-key\u{2019}s  \r\n vibe \u{200B}");
        assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn test_clean_field_coercion() {
        assert_eq!(clean_field(None), "");
        assert_eq!(clean_field(Some(&Value::Null)), "");
        assert_eq!(clean_field(Some(&json!(" fr "))), "fr");
        assert_eq!(clean_field(Some(&json!(42))), "42");
        assert_eq!(clean_field(Some(&json!(2.0))), "2");
        assert_eq!(clean_field(Some(&json!(1.5))), "1.5");
        assert_eq!(clean_field(Some(&json!(true))), "true");
        assert_eq!(clean_field(Some(&json!(false))), "false");
    }

    #[test]
    fn test_clean_field_arrays_and_objects() {
        assert_eq!(clean_field(Some(&json!(["rizz"]))), "rizz");
        assert_eq!(clean_field(Some(&json!(["no", "cap"]))), "no,cap");
        assert_eq!(clean_field(Some(&json!(["a", null, ["b", 1]]))), "a,,b,1");
        assert_eq!(clean_field(Some(&json!([]))), "");
        assert_eq!(clean_field(Some(&json!({"x": 1}))), "[object Object]");
    }

    #[test]
    fn test_is_falsy() {
        assert!(is_falsy(&Value::Null));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!(0.0)));
        assert!(is_falsy(&json!("")));
        assert!(!is_falsy(&json!(" ")));
        assert!(!is_falsy(&json!(1)));
        assert!(!is_falsy(&json!([])));
        assert!(!is_falsy(&json!({})));
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert!(!is_space('\u{0085}'));
        assert!(is_space('\u{00A0}'));
        assert!(is_space('\u{FEFF}'));
        assert_eq!(trim_space("rizz\u{0085}"), "rizz\u{0085}");
        assert_eq!(collapse_whitespace("a\u{0085}b"), "a\u{0085}b");
    }

    #[test]
    fn test_trim_space_and_text_len() {
        assert_eq!(trim_space("\u{FEFF} sus \n"), "sus");
        assert_eq!(text_len("bussin"), 6);
        assert_eq!(text_len("é"), 1);
        assert_eq!(text_len("💀💀"), 4);
    }
}

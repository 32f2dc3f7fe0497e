//! Source Text Helpers
//!
//! String-level utilities shared by the emitters: literal quoting, line
//! prefixing, number recognition and blank-line normalization.

use once_cell::sync::Lazy;
use regex::Regex;

/// One level of Java indentation.
pub const INDENT: &str = "    ";

/// Marker placed in front of every comment line.
pub const COMMENT_PREFIX: &str = "// ";

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*-?\d+(\.\d+)?\s*$").unwrap());
static STRING_LITERAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^"(?:[^"\\]|\\.)*"$"#).unwrap());
static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Quote `input` as a Java string literal.
pub fn quote_string(input: &str) -> String {
    let mut quoted = String::with_capacity(input.len() + 2);
    quoted.push('"');
    for ch in input.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if (c as u32) < 0x20 => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Prefix every line of `text` with `prefix`. A trailing newline does not
/// start a new line, so `"a\nb\n"` becomes `"> a\n> b\n"`.
pub fn prefix_lines(text: &str, prefix: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let (body, trailing) = match text.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (text, ""),
    };
    let mut out = String::with_capacity(text.len() + prefix.len() * 4);
    for (i, line) in body.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(prefix);
        out.push_str(line);
    }
    out.push_str(trailing);
    out
}

/// Like [`prefix_lines`] but leaves empty lines empty.
pub fn indent_block(text: &str, indent: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether `text` is a plain decimal number literal.
pub fn is_number(text: &str) -> bool {
    NUMBER_RE.is_match(text)
}

/// Whether `text` is exactly one double-quoted Java string literal.
pub fn is_string_literal(text: &str) -> bool {
    STRING_LITERAL_RE.is_match(text)
}

/// Render a number field value as a Java numeric literal. Whole numbers
/// outside the `int` range become double literals.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value.fract() != 0.0 {
        format!("{}", value)
    } else if value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX) {
        format!("{}", value as i32)
    } else {
        format!("{}.0", value)
    }
}

/// Collapse runs of two or more blank lines into one.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN_RE.replace_all(text, "\n\n").into_owned()
}

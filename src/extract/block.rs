//! Brace-balanced block location.
//!
//! Braces are counted without regard to quoting: the listings container is
//! itself a Lua string holding a `return {...}` chunk, so string-aware
//! scanning would skip the very data we are after.

use std::sync::OnceLock;

use regex::Regex;

/// Body of the block opening at byte `open`, without the outer braces.
///
/// Returns `None` if `open` is not a `{` or the block never closes.
pub fn balanced_body(text: &str, open: usize) -> Option<&str> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    for (offset, byte) in bytes[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[open + 1..open + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Body of the first table assigned to `["<key>"]`.
pub fn keyed_block<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    let needle = format!(r#"["{key}"]"#);
    let mut from = 0;
    while let Some(found) = text[from..].find(&needle) {
        let after = from + found + needle.len();
        if let Some(open) = table_opening(text, after) {
            return balanced_body(text, open);
        }
        from = after;
    }
    None
}

/// Offset of the `{` when `text[from..]` reads `<ws>=<ws>{`.
fn table_opening(text: &str, from: usize) -> Option<usize> {
    let value = text[from..].trim_start().strip_prefix('=')?.trim_start();
    value.starts_with('{').then(|| text.len() - value.len())
}

/// Body of the table following the first `return` keyword.
pub fn return_block(text: &str) -> Option<&str> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| Regex::new(r"\breturn\s*\{").expect("return pattern"));
    let open = re.find(text)?.end() - 1;
    balanced_body(text, open)
}

/// Bodies of the top-level `{...}` entries inside `text`, in order.
///
/// An entry left open at the end of `text` is dropped.
pub fn child_blocks(text: &str) -> Vec<&str> {
    let mut children = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, byte) in text.bytes().enumerate() {
        match byte {
            b'{' => {
                if depth == 0 {
                    start = i + 1;
                }
                depth += 1;
            }
            // Stray closers at depth 0 are ignored.
            b'}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    children.push(&text[start..i]);
                }
            }
            _ => {}
        }
    }
    children
}

//! Char-boundary-safe slicing and whitespace helpers.

use std::ops::Range;

/// Largest char boundary `<= i`.
pub(crate) fn floor_boundary(s: &str, i: usize) -> usize {
    if i >= s.len() {
        return s.len();
    }
    let mut i = i;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Smallest char boundary `>= i`.
pub(crate) fn ceil_boundary(s: &str, i: usize) -> usize {
    if i >= s.len() {
        return s.len();
    }
    let mut i = i;
    while !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// First `n` chars of `s`, and whether anything was cut off.
pub(crate) fn head_chars(s: &str, n: usize) -> (&str, bool) {
    match s.char_indices().nth(n) {
        Some((i, _)) => (&s[..i], true),
        None => (s, false),
    }
}

/// Last `n` chars of `s`, and whether anything was cut off.
pub(crate) fn tail_chars(s: &str, n: usize) -> (&str, bool) {
    let count = s.chars().count();
    if count <= n {
        return (s, false);
    }
    let start = s
        .char_indices()
        .nth(count - n)
        .map(|(i, _)| i)
        .unwrap_or(0);
    (&s[start..], true)
}

pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace control characters and U+FFFD left behind by lossy decoding.
pub(crate) fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\n' | '\t' | '\r' => c,
            '\u{FFFD}' => ' ',
            c if c.is_control() => ' ',
            c => c,
        })
        .collect()
}

/// Replace each span with a single space, keeping token boundaries intact.
///
/// Spans must be sorted and non-overlapping.
pub(crate) fn remove_spans(text: &str, spans: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in spans {
        if span.start < last {
            continue;
        }
        out.push_str(&text[last..span.start]);
        out.push(' ');
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Overwrite each span with spaces of the same byte length, so offsets into
/// the result stay valid in `text`.
///
/// Spans must be sorted, non-overlapping and on char boundaries.
pub(crate) fn blank_spans(text: &str, spans: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in spans {
        if span.start < last {
            continue;
        }
        out.push_str(&text[last..span.start]);
        out.extend(std::iter::repeat_n(' ', span.end - span.start));
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

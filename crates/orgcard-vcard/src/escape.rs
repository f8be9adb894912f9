//! Escaping is applied per component, never to a whole line, so a
//! component may carry its own delimiter as `\;` or `\,`.

/// Escapes a single value or component.
///
/// Carriage returns (alone or in CRLF pairs) are folded into `\n` first; the
/// wire format has no escape for them. A value holding `\r` therefore comes
/// back from a parse with `\n` in its place: the exact round trip covers
/// CR-free values only.
pub fn escape(value: &str) -> String {
    let normalized = value.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(normalized.len());
    for ch in normalized.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            other => out.push(other),
        }
    }
    out
}

/// Reverses [`escape`]. Unknown escape pairs are kept verbatim.
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(',') => out.push(','),
            Some(';') => out.push(';'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Splits `raw` on every `delimiter` that is not backslash-escaped.
///
/// Components are returned still escaped. An empty input yields one empty
/// component.
pub fn split_unescaped(raw: &str, delimiter: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (index, ch) in raw.char_indices() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == delimiter {
            parts.push(&raw[start..index]);
            start = index + ch.len_utf8();
        }
    }
    parts.push(&raw[start..]);
    parts
}

/// Splits and unescapes a structured value.
pub fn split_components(raw: &str, delimiter: char) -> Vec<String> {
    split_unescaped(raw, delimiter)
        .into_iter()
        .map(unescape)
        .collect()
}

/// Escapes each component and joins them with `delimiter`.
pub fn join_components<'a, I>(components: I, delimiter: char) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    components
        .into_iter()
        .map(escape)
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}

/// Escape text for `MarkdownV2`.
///
/// Unlike [`teloxide::utils::markdown::escape`], `*` and `_` are left as is so
/// static texts can use bold and italic.
pub(crate) fn escape(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    for c in text.chars() {
        if is_reserved(c) {
            res.push('\\');
        }
        res.push(c);
    }
    res
}

fn is_reserved(c: char) -> bool {
    matches!(
        c,
        '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '=' | '|' | '{' | '}' | '.' | '!'
    )
}

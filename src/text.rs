//! Substring helpers used by extraction and rewriting.

/// Returns the text before the first `sep`, or `""` when `sep` is absent.
pub fn before<'a>(value: &'a str, sep: &str) -> &'a str {
    value.find(sep).map_or("", |pos| &value[..pos])
}

/// Returns the text after the last `sep`.
///
/// Yields `""` when `sep` is absent or when it ends `value`.
pub fn after<'a>(value: &'a str, sep: &str) -> &'a str {
    value
        .rfind(sep)
        .map_or("", |pos| &value[pos + sep.len()..])
}

/// Returns the text after the first `sep`, or `""` when `sep` is absent.
pub fn after_first<'a>(value: &'a str, sep: &str) -> &'a str {
    value
        .find(sep)
        .map_or("", |pos| &value[pos + sep.len()..])
}

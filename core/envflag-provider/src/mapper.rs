//! Flag key to namespace key mapping.

/// Derives the namespace key for a flag.
///
/// The flag key is uppercased one character at a time and every `-` and `.`
/// becomes `_`. A character whose uppercase form is more than one character
/// (`ß`, `ŉ`) is kept as is, so the key never changes length in characters.
/// A non-empty prefix is prepended verbatim, joined with `_`. No other
/// characters are touched, so keys containing characters the namespace cannot
/// store simply never match.
///
/// ```
/// use envflag_provider::map_to_namespace_key;
///
/// assert_eq!(map_to_namespace_key("my-flag.v2", "APP"), "APP_MY_FLAG_V2");
/// assert_eq!(map_to_namespace_key("beta", ""), "BETA");
/// ```
#[must_use]
pub fn map_to_namespace_key(flag_key: &str, prefix: &str) -> String {
    let name: String = flag_key
        .chars()
        .map(|c| match c {
            '-' | '.' => '_',
            c => upper_char(c),
        })
        .collect();

    if prefix.is_empty() {
        name
    } else {
        format!("{prefix}_{name}")
    }
}

/// Single-character uppercase mapping of `c`, or `c` itself when the
/// uppercase form expands to several characters.
fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

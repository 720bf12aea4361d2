//! Class name sanitization.

/// Normalizes a raw class name.
///
/// Lowercases, replaces every character outside `[a-z0-9_-]` with `-`,
/// collapses runs of `-` and trims leading and trailing `-`. The result may
/// be empty. Idempotent: `sanitize(&sanitize(s)) == sanitize(s)`.
///
/// # Example
///
/// ```rust
/// use stylecast::registry::sanitize;
///
/// assert_eq!(sanitize("My Button!!"), "my-button");
/// assert_eq!(sanitize("--card__title--"), "card__title");
/// ```
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars().flat_map(char::to_lowercase) {
        let c = if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
            c
        } else {
            '-'
        };
        if c == '-' && (out.is_empty() || out.ends_with('-')) {
            continue;
        }
        out.push(c);
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

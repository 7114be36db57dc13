//! AnyScript identifier sanitizing.

/// Replace every character that is not an ASCII letter or digit with `_`.
///
/// Idempotent. Two distinct names can sanitize to the same identifier; that
/// is not detected here.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// True if `name` is already a sanitized identifier.
pub fn is_sanitized(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

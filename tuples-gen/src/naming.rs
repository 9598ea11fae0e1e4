use std::borrow::Cow;

/// Name of the placeholder at zero-based `position` for the given prefix.
///
/// The first placeholder is the bare prefix; later ones carry their 1-based
/// index, so a prefix of `T` yields `T`, `T2`, `T3`, ...
pub fn identifier(prefix: &str, position: usize) -> Cow<'_, str> {
    if position == 0 {
        Cow::Borrowed(prefix)
    } else {
        Cow::Owned(format!("{prefix}{}", position + 1))
    }
}

/// Whether `candidate` is usable as a plain Rust identifier.
pub(crate) fn is_identifier(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    if candidate == "_" {
        return false;
    }
    chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric())
}

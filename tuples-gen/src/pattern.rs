use crate::naming::identifier;
use crate::options::{DEFAULT_PAIRED_PREFIX, DEFAULT_SINGLE_PREFIX};
use crate::GeneratorOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `T, T2, T3`
    Single,
    /// `(T U), (T2 U2), (T3 U3)`
    Paired,
}

/// Build the comma-separated placeholder list for one arity using the
/// default `T`/`U` prefixes.
///
/// `arity` must be at least 1; the document generator only asks for arities
/// in `1..=N`.
pub fn pattern_list(arity: usize, mode: Mode) -> String {
    build(arity, mode, DEFAULT_SINGLE_PREFIX, DEFAULT_PAIRED_PREFIX)
}

/// Same as [`pattern_list`] with the prefixes taken from `options`.
pub fn pattern_list_with(arity: usize, mode: Mode, options: &GeneratorOptions) -> String {
    build(arity, mode, &options.single_prefix, &options.paired_prefix)
}

fn build(arity: usize, mode: Mode, single: &str, paired: &str) -> String {
    debug_assert!(arity >= 1, "pattern lists start at arity 1");
    (0..arity)
        .map(|position| match mode {
            Mode::Single => identifier(single, position).into_owned(),
            Mode::Paired => format!(
                "({} {})",
                identifier(single, position),
                identifier(paired, position)
            ),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_one() {
        assert_eq!(pattern_list(1, Mode::Single), "T");
        assert_eq!(pattern_list(1, Mode::Paired), "(T U)");
    }

    #[test]
    fn arity_two() {
        assert_eq!(pattern_list(2, Mode::Single), "T, T2");
        assert_eq!(pattern_list(2, Mode::Paired), "(T U), (T2 U2)");
    }

    #[test]
    fn double_digit_suffixes() {
        let list = pattern_list(11, Mode::Single);
        assert!(list.ends_with("T10, T11"), "unexpected tail: {list}");
        assert!(!list.ends_with(", "));
    }

    #[test]
    fn custom_prefixes() {
        let mut options = GeneratorOptions::default();
        options.single_prefix = "A".to_string();
        options.paired_prefix = "B".to_string();
        assert_eq!(
            pattern_list_with(3, Mode::Paired, &options),
            "(A B), (A2 B2), (A3 B3)"
        );
    }
}

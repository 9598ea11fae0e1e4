//! Generator for the `all_the_tuples` helper macro.
//!
//! The macro invokes a caller-supplied macro once per tuple arity, first with
//! paired `(T U)` parameters and then with single `T` parameters.

mod count;
mod document;
mod naming;
mod options;
mod pattern;

pub use crate::count::{parse_count, CountError, MAX_COUNT};
pub use crate::document::{generate, generate_with, pattern_line};
pub use crate::naming::identifier;
pub use crate::options::{
    GeneratorOptions, InvocationStyle, OptionsError, DEFAULT_MACRO_NAME, DEFAULT_PAIRED_PREFIX,
    DEFAULT_SINGLE_PREFIX,
};
pub use crate::pattern::{pattern_list, pattern_list_with, Mode};

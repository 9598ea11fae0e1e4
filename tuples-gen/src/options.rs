use thiserror::Error;

use crate::naming::is_identifier;

pub const DEFAULT_MACRO_NAME: &str = "all_the_tuples";
pub const DEFAULT_SINGLE_PREFIX: &str = "T";
pub const DEFAULT_PAIRED_PREFIX: &str = "U";

/// How each pattern line invokes the caller's macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvocationStyle {
    /// `$mac! { 1 T }`
    #[default]
    Brace,
    /// `$mac!( 1 T);`
    Call,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("macro name '{0}' is not a valid identifier")]
    InvalidMacroName(String),
    #[error("placeholder prefix '{0}' is not a valid identifier")]
    InvalidPrefix(String),
    #[error("single and paired placeholders share the prefix '{0}'")]
    DuplicatePrefix(String),
    #[error("placeholder prefixes '{0}' and '{1}' produce overlapping names")]
    OverlappingPrefixes(String, String),
}

/// Knobs for the generated macro. The defaults reproduce `all_the_tuples`
/// with `T`/`U` placeholders and brace-style invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub macro_name: String,
    pub style: InvocationStyle,
    pub single_prefix: String,
    pub paired_prefix: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            macro_name: DEFAULT_MACRO_NAME.to_string(),
            style: InvocationStyle::default(),
            single_prefix: DEFAULT_SINGLE_PREFIX.to_string(),
            paired_prefix: DEFAULT_PAIRED_PREFIX.to_string(),
        }
    }
}

impl GeneratorOptions {
    pub fn with_style(mut self, style: InvocationStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_macro_name(mut self, name: impl Into<String>) -> Self {
        self.macro_name = name.into();
        self
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if !is_identifier(&self.macro_name) {
            return Err(OptionsError::InvalidMacroName(self.macro_name.clone()));
        }
        for prefix in [&self.single_prefix, &self.paired_prefix] {
            if !is_identifier(prefix) {
                return Err(OptionsError::InvalidPrefix(prefix.clone()));
            }
        }
        if self.single_prefix == self.paired_prefix {
            return Err(OptionsError::DuplicatePrefix(self.single_prefix.clone()));
        }
        if numbered_from(&self.single_prefix, &self.paired_prefix)
            || numbered_from(&self.paired_prefix, &self.single_prefix)
        {
            return Err(OptionsError::OverlappingPrefixes(
                self.single_prefix.clone(),
                self.paired_prefix.clone(),
            ));
        }
        Ok(())
    }
}

/// Whether `candidate` is `base` followed by one or more digits, i.e. a name
/// the namer can produce from `base`.
fn numbered_from(base: &str, candidate: &str) -> bool {
    candidate
        .strip_prefix(base)
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}

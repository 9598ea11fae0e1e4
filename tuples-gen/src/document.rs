use std::num::NonZeroUsize;

use tracing::debug;

use crate::options::{GeneratorOptions, InvocationStyle};
use crate::pattern::{pattern_list_with, Mode};

const DOC_LINE: &str = "/// Calls the given macro with all the tuples.";
const SKIP_FORMAT_LINE: &str = "#[rustfmt::skip]";
const ARM_INDENT: &str = "    ";
const CALL_INDENT: &str = "        ";

/// Generate the `all_the_tuples` macro for arities `1..=max` with the default
/// options.
pub fn generate(max: NonZeroUsize) -> String {
    generate_with(max, &GeneratorOptions::default())
}

/// Generate the macro definition for arities `1..=max`.
///
/// The paired arm (`@double`) comes first, then the single arm. The returned
/// text ends with a single newline after the closing brace.
pub fn generate_with(max: NonZeroUsize, options: &GeneratorOptions) -> String {
    let max = max.get();
    let mut lines = Vec::with_capacity(max.saturating_mul(2).saturating_add(10));

    lines.push(DOC_LINE.to_string());
    lines.push(SKIP_FORMAT_LINE.to_string());
    lines.push(format!("macro_rules! {} {{", options.macro_name));

    lines.push(format!("{ARM_INDENT}(@double $mac:path) => {{"));
    push_arm(&mut lines, max, Mode::Paired, options);
    lines.push(format!("{ARM_INDENT}}};"));
    lines.push(String::new());

    lines.push(format!("{ARM_INDENT}($mac:path) => {{"));
    push_arm(&mut lines, max, Mode::Single, options);
    lines.push(format!("{ARM_INDENT}}};"));
    lines.push("}".to_string());
    lines.push(String::new());

    lines.join("\n")
}

fn push_arm(lines: &mut Vec<String>, max: usize, mode: Mode, options: &GeneratorOptions) {
    debug!(?mode, max, style = ?options.style, "emitting macro arm");
    for arity in 1..=max {
        let list = pattern_list_with(arity, mode, options);
        lines.push(pattern_line(arity, &list, options.style));
    }
}

/// Render one invocation of the caller's macro. The arity is right-aligned to
/// two columns.
pub fn pattern_line(arity: usize, list: &str, style: InvocationStyle) -> String {
    match style {
        InvocationStyle::Brace => format!("{CALL_INDENT}$mac! {{ {arity:2} {list} }}"),
        InvocationStyle::Call => format!("{CALL_INDENT}$mac!({arity:2} {list});"),
    }
}

//! Bootstrap script assembly
//!
//! Serializes a script list into an embeddable array literal and fills the
//! placeholder tokens of the bootstrap template. Tokens are matched in
//! textual order, not by name: the Nth match receives the Nth value. A
//! quoted value beginning with the raw-literal prefix is unquoted during
//! substitution, which lets a function expression ride inside an otherwise
//! JSON-shaped array.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::AssetError;

// =============================================================================
// TOKEN PATTERNS
// =============================================================================

/// Prefix marking a quoted string as raw script text.
pub const RAW_PREFIX: &str = "@@";

/// Placeholder token: `##Name##`
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"##\w+?##").unwrap());

/// Quoted raw literal: `"@@<raw text>"`
static RAW_LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r#""{}(.*?)""#, RAW_PREFIX)).unwrap());

// =============================================================================
// ASSEMBLER
// =============================================================================

/// Builds the final bootstrap text from a script list, a base path and a
/// client module name.
pub struct ScriptListAssembler;

impl ScriptListAssembler {
    /// Serialize script identifiers into an array literal.
    ///
    /// Each element lands quoted on its own line, comma-separated; the empty
    /// list yields `[]`. The output re-parses as a JSON string array.
    /// Identifiers containing a double quote would break the literal, so
    /// they are rejected rather than escaped.
    pub fn serialize<S: AsRef<str>>(files: &[S]) -> Result<String, AssetError> {
        let mut literal = String::from("[");
        for (idx, file) in files.iter().enumerate() {
            let file = file.as_ref();
            if file.contains('"') {
                return Err(AssetError::MalformedScriptIdentifier {
                    identifier: file.to_string(),
                });
            }
            if idx > 0 {
                literal.push(',');
            }
            literal.push_str("\n \"");
            literal.push_str(file);
            literal.push('"');
        }
        literal.push(']');
        Ok(literal)
    }

    /// Fill the template's three ordered tokens with the array literal, the
    /// base path and the module name.
    pub fn assemble(
        template: &str,
        array_literal: &str,
        base_path: &str,
        module_name: &str,
    ) -> Result<String, AssetError> {
        substitute_tokens(template, &[array_literal, base_path, module_name])
    }
}

/// Replace each token in `template`, in textual order, with the matching
/// entry of `values`.
///
/// The token count must equal the value count; a mismatch in either
/// direction fails before any output is produced.
pub fn substitute_tokens(template: &str, values: &[&str]) -> Result<String, AssetError> {
    let tokens: Vec<_> = TOKEN_RE.find_iter(template).collect();
    if tokens.len() != values.len() {
        return Err(AssetError::MalformedTemplate {
            expected: values.len(),
            found: tokens.len(),
        });
    }

    let mut out = String::with_capacity(template.len());
    let mut tail = 0;
    for (token, value) in tokens.iter().zip(values.iter().copied()) {
        out.push_str(&template[tail..token.start()]);
        out.push_str(&unescape_raw_literals(value));
        tail = token.end();
    }
    out.push_str(&template[tail..]);
    Ok(out)
}

/// Strip the quotes and prefix from every `"@@..."` substring, leaving the
/// inner text as raw script.
fn unescape_raw_literals(value: &str) -> String {
    RAW_LITERAL_RE.replace_all(value, "$1").into_owned()
}

// =============================================================================
// TESTS
// =============================================================================

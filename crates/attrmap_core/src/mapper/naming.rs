//! Attribute name canonicalization.
//!
//! # Responsibility
//! - Translate external keys (`first_name`, `first-name`, `first name`)
//!   into one PascalCase fragment used to address hooks.
//! - Derive getter/setter hook names from that fragment.
//!
//! # Invariants
//! - Hyphens and underscores are treated exactly like spaces.
//! - Only ASCII letters change case; everything else passes through.
//! - Only spaces are stripped; other whitespace survives canonicalization.

const GETTER_PREFIX: &str = "get";
const SETTER_PREFIX: &str = "set";

/// Returns the PascalCase fragment for an external attribute key.
///
/// `full_name`, `full-name` and `full name` all yield `FullName`.
pub fn canonical_fragment(key: &str) -> String {
    let spaced = key.replace(['-', '_'], " ");

    let mut fragment = String::with_capacity(spaced.len());
    let mut word_start = true;
    for c in spaced.chars() {
        if c == ' ' {
            word_start = true;
            continue;
        }
        if word_start {
            fragment.push(c.to_ascii_uppercase());
        } else {
            fragment.push(c);
        }
        word_start = is_word_delimiter(c);
    }
    fragment
}

/// Hook name consulted by `read` for `key`.
pub fn getter_name(key: &str) -> String {
    format!("{GETTER_PREFIX}{}", canonical_fragment(key))
}

/// Hook name consulted by `write` and `fill` for `key`.
pub fn setter_name(key: &str) -> String {
    format!("{SETTER_PREFIX}{}", canonical_fragment(key))
}

/// Folds a hook name into its lookup key.
///
/// Hook names resolve case-insensitively, so `getFULLNAME` and `getFullName`
/// address the same hook.
pub(crate) fn hook_lookup_key(hook_name: &str) -> String {
    hook_name.to_ascii_lowercase()
}

// Spaces are handled by the caller; these are the remaining word breaks.
fn is_word_delimiter(c: char) -> bool {
    matches!(c, '\t' | '\r' | '\n' | '\u{0B}' | '\u{0C}')
}

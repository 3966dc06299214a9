//! Case-preserving replacement.
//!
//! The casing of a replacement is derived from the text that was actually
//! matched, never from the rule's stored `wrong` form:
//!
//! * `VAI` → fully upper-cased replacement (`VOU`)
//! * `Vai` → first character upper-cased, rest as stored (`Vou`)
//! * anything else (`vai`, `vAi`) → replacement exactly as stored
//!
//! License: MIT OR Apache-2.0

/// True when `s` has at least one cased character and none of them is lower-case.
pub fn is_all_upper(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// True when `s` has at least one cased character and none of them is upper-case.
pub fn is_all_lower(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            return false;
        }
        if c.is_lowercase() {
            cased = true;
        }
    }
    cased
}

fn is_capitalized(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => is_all_lower(chars.as_str()),
        _ => false,
    }
}

/// Upper-cases only the first character of `s`, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Adapts `replacement` to the casing style of `matched`.
///
/// The all-upper check runs first, so a single upper-case character
/// (e.g. a matched `"E"`) upper-cases the whole replacement.
pub fn apply_case_like(matched: &str, replacement: &str) -> String {
    if is_all_upper(matched) {
        return replacement.to_uppercase();
    }
    if is_capitalized(matched) {
        return capitalize_first(replacement);
    }
    replacement.to_string()
}

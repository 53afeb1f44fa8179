//! Literal placeholder substitution for template bodies.

/// Result of substituting a placeholder in one template body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub text: String,
    /// Number of placeholder occurrences replaced.
    pub replacements: usize,
}

/// Replace every non-overlapping occurrence of `placeholder` in `text` with `value`.
///
/// Matching is literal and left to right, across and within lines. All other bytes,
/// including line endings and a missing final newline, are preserved. Callers must not
/// pass an empty placeholder; [`crate::config::GeneratorConfig::validate`] rejects it.
pub fn substitute(text: &str, placeholder: &str, value: &str) -> Substitution {
    debug_assert!(!placeholder.is_empty());
    let replacements = count(text, placeholder);
    let text = if replacements == 0 {
        text.to_string()
    } else {
        text.replace(placeholder, value)
    };
    Substitution { text, replacements }
}

/// Count non-overlapping occurrences of `placeholder` in `text`.
pub fn count(text: &str, placeholder: &str) -> usize {
    if placeholder.is_empty() {
        return 0;
    }
    text.matches(placeholder).count()
}

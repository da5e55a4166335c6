//! Text normalization.
//!
//! Everything the player types is compared in normalized form: lowercase,
//! single spaces, no leading or trailing whitespace.

/// Normalizes a string for comparison.
///
/// Case-folds and collapses every whitespace run to a single space.
///
/// ```
/// assert_eq!(toi_foundation::normalize("  Wood   ELF "), "wood elf");
/// ```
#[must_use]
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Makes a name pretty: strips whitespace and capitalizes each word.
///
/// ```
/// assert_eq!(toi_foundation::pretty_name(" aRAGORN  son of arathorn"), "Aragorn Son Of Arathorn");
/// ```
#[must_use]
pub fn pretty_name(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replaces `{key}` placeholders in a message template.
///
/// Unknown placeholders are left as they are.
///
/// ```
/// let line = toi_foundation::text::interpolate("{name} joins {party}", &[("name", "Bob"), ("party", "Wolves")]);
/// assert_eq!(line, "Bob joins Wolves");
/// ```
#[must_use]
pub fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in values {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

//! Value normalization shared by the extractors: birth-date parsing, name
//! cleaning and casing.

use chrono::NaiveDate;

/// Parses a located date string against `formats` in order. The first format
/// that parses wins; `None` means no format matched.
pub fn normalize_date<S: AsRef<str>>(raw: &str, formats: &[S]) -> Option<NaiveDate> {
    let cleaned = raw.replace('"', "");
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        return None;
    }

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt.as_ref()).ok())
}

/// Keeps letters (any script) and periods from a candidate name line and
/// splits it into words. Tokens left with no letters (stray bullets, lone
/// periods) are dropped.
pub fn name_words(line: &str) -> Vec<String> {
    let kept: String = line
        .chars()
        .map(|c| if c.is_alphabetic() || c == '.' { c } else { ' ' })
        .collect();

    kept.split_whitespace()
        .filter(|w| w.chars().any(char::is_alphabetic))
        .map(String::from)
        .collect()
}

/// All-caps names (periods ignored) become title case; anything else is kept
/// as written.
pub fn normalize_name_case(candidate: &str) -> String {
    let mut letters = candidate.chars().filter(|c| c.is_alphabetic()).peekable();
    let has_letters = letters.peek().is_some();
    if has_letters && letters.all(char::is_uppercase) {
        title_case(candidate)
    } else {
        candidate.to_string()
    }
}

/// Uppercases every letter that follows a non-letter and lowercases the rest,
/// so `J.R. SMITH` becomes `J.R. Smith`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// First letter uppercase, remainder lowercase.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

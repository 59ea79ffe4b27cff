use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Result};

/// Formats tried, in order, when turning a located birth date into ISO form.
pub const DEFAULT_DATE_FORMATS: &[&str] = &["%d %B %Y", "%d %b %Y", "%d %b, %Y", "%d/%m/%Y", "%d-%m-%Y"];

/// Largest accepted `gender_context_window`; wider windows make the
/// profile-context pattern exceed the regex size limit.
pub const MAX_GENDER_CONTEXT_WINDOW: usize = 2000;

/// Acceptance rules for a mobile number candidate.
///
/// Defaults follow the Indian mobile convention: ten digits, first digit 6-9.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneRules {
    /// Exact number of digits kept; longer candidates keep their trailing digits.
    pub digits: usize,
    /// Digits a valid number may start with.
    pub leading_digits: String,
}

impl Default for PhoneRules {
    fn default() -> Self {
        Self {
            digits: 10,
            leading_digits: "6789".into(),
        }
    }
}

impl PhoneRules {
    /// Reduces a raw candidate to its digits and checks it against the rules.
    pub fn accept(&self, candidate: &str) -> Option<String> {
        let digits: String = candidate.chars().filter(char::is_ascii_digit).collect();
        let kept = if digits.len() > self.digits {
            &digits[digits.len() - self.digits..]
        } else {
            digits.as_str()
        };

        if kept.len() != self.digits {
            return None;
        }
        let first = kept.chars().next()?;
        self.leading_digits.contains(first).then(|| kept.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of leading non-empty lines searched for a name.
    pub header_lines: usize,
    /// Documents with less trimmed text than this are rejected before extraction.
    pub min_text_len: usize,
    pub phone: PhoneRules,
    pub date_formats: Vec<String>,
    /// How far past a profile heading the gender token may appear.
    pub gender_context_window: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            header_lines: 10,
            min_text_len: 30,
            phone: PhoneRules::default(),
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| (*f).to_string()).collect(),
            gender_context_window: 120,
        }
    }
}

impl ExtractionConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.header_lines == 0 {
            return Err(Error::InvalidConfig("header_lines must be at least 1".into()));
        }
        if self.phone.digits == 0 {
            return Err(Error::InvalidConfig("phone.digits must be at least 1".into()));
        }
        if self.phone.leading_digits.is_empty()
            || !self.phone.leading_digits.chars().all(|c| c.is_ascii_digit())
        {
            return Err(Error::InvalidConfig(format!(
                "phone.leading_digits must be a non-empty set of digits, got {:?}",
                self.phone.leading_digits
            )));
        }
        if self.gender_context_window > MAX_GENDER_CONTEXT_WINDOW {
            return Err(Error::InvalidConfig(format!(
                "gender_context_window must be at most {MAX_GENDER_CONTEXT_WINDOW}, got {}",
                self.gender_context_window
            )));
        }
        if self.date_formats.is_empty() {
            return Err(Error::InvalidConfig("date_formats must not be empty".into()));
        }
        Ok(())
    }
}

use regex::Regex;
use std::sync::LazyLock;

use super::FieldExtractor;
use crate::ingest::keywords::{find_name_label, is_noise_word, NAME_LABELS};
use crate::ingest::ner::{CapitalizedRunRecognizer, PersonNameRecognizer};
use crate::ingest::normalizer::{capitalize, name_words, normalize_name_case};
use crate::ingest::strategy::Cascade;
use crate::ingest::text::DocumentText;
use crate::record::Field;

const MIN_WORDS: usize = 2;
const MAX_WORDS: usize = 4;

// Everything up to and including the label's last whole-word occurrence,
// plus any trailing separators.
static LABEL_PREFIXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    NAME_LABELS
        .iter()
        .filter_map(|label| {
            Regex::new(&format!(r"(?i)^.*\b{}\b\s*[:\-]*\s*", regex::escape(label))).ok()
        })
        .collect()
});

/// Accepts cleaned words as a name: 2 to 4 words, none of them noise.
fn as_name(words: &[String]) -> Option<String> {
    if !(MIN_WORDS..=MAX_WORDS).contains(&words.len()) || words.iter().any(|w| is_noise_word(w)) {
        return None;
    }
    Some(normalize_name_case(&words.join(" ")))
}

/// Text after the furthest label on the line, or `None` when no label occurs.
fn strip_label(line: &str) -> Option<&str> {
    LABEL_PREFIXES
        .iter()
        .filter_map(|re| re.find(line))
        .map(|m| m.end())
        .max()
        .map(|end| &line[end..])
}

fn from_labeled_lines(header: &[String]) -> Option<String> {
    header
        .iter()
        .filter_map(|line| strip_label(line))
        .find_map(|rest| as_name(&name_words(rest)))
}

fn from_plain_lines(header: &[String]) -> Option<String> {
    header
        .iter()
        .filter(|line| find_name_label(line).is_none() && !line.contains('@'))
        .find_map(|line| as_name(&name_words(line)))
}

/// Guesses a name from an address such as `jane.doe92@...`: digits dropped,
/// split on `.`/`_`, accepted when 2 or 3 parts remain.
fn from_email(email: &str) -> Option<String> {
    let local = email.split('@').next()?;
    let local: String = local.chars().filter(|c| !c.is_ascii_digit()).collect();
    let parts: Vec<&str> = local.split(['.', '_']).filter(|p| !p.is_empty()).collect();

    if !(2..=3).contains(&parts.len()) {
        return None;
    }
    Some(parts.iter().map(|p| capitalize(p)).collect::<Vec<_>>().join(" "))
}

/// Finds the candidate's name in the header window.
///
/// Stages, in order of confidence: explicit label (`Name: ...`), a plain
/// header line that looks like a name, the person-name recognizer over the
/// whole window, and finally a guess from the email address.
pub struct NameExtractor {
    header_lines: usize,
    recognizer: Box<dyn PersonNameRecognizer>,
}

impl NameExtractor {
    #[must_use]
    pub fn new(header_lines: usize) -> Self {
        Self {
            header_lines,
            recognizer: Box::new(CapitalizedRunRecognizer),
        }
    }

    #[must_use]
    pub fn with_recognizer(mut self, recognizer: Box<dyn PersonNameRecognizer>) -> Self {
        self.recognizer = recognizer;
        self
    }

    #[must_use]
    pub fn recognizer_name(&self) -> &'static str {
        self.recognizer.name()
    }

    fn from_recognizer(&self, header: &[String]) -> Option<String> {
        self.recognizer
            .extract_person_names(&header.join(" "))
            .iter()
            .find_map(|candidate| as_name(&name_words(candidate)))
    }

    pub fn extract_with_hint(&self, document: &DocumentText, email_hint: Option<&str>) -> Option<String> {
        Cascade::<[String], String>::new(Field::Name)
            .stage("labeled_line", from_labeled_lines)
            .stage("header_line", from_plain_lines)
            .stage("recognizer", |header| self.from_recognizer(header))
            .stage("email_local_part", |_| email_hint.and_then(from_email))
            .run(document.header_window(self.header_lines))
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new(10)
    }
}

impl std::fmt::Debug for NameExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameExtractor")
            .field("header_lines", &self.header_lines)
            .field("recognizer", &self.recognizer.name())
            .finish()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = String;

    fn field(&self) -> Field {
        Field::Name
    }

    fn extract(&self, document: &DocumentText) -> Option<String> {
        self.extract_with_hint(document, None)
    }
}

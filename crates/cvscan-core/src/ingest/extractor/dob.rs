use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use super::FieldExtractor;
use crate::config::DEFAULT_DATE_FORMATS;
use crate::ingest::normalizer::normalize_date;
use crate::ingest::strategy::Cascade;
use crate::ingest::text::DocumentText;
use crate::record::Field;

// D/M/YYYY, D-M-YYYY, or "D Month[,] YYYY".
const DATE: &str = r"([0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]{4}|[0-9]{1,2}\s+[A-Za-z]{3,9},?\s*[0-9]{4})";
const LABEL: &str = r"(?:DOB|D\.O\.B\.?|Date\s+of\s+Birth|Birth\s+Date)";

fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern).ok()
}

static RE_LABELED: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(&format!(r"(?i)\b{LABEL}[:\s]+{DATE}")));

static RE_LOOSE: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(&format!(r"(?i)\b{LABEL}[\s:\-=.|]*{DATE}")));

static RE_CONTEXT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)\b(?:DOB|Date\s+of\s+Birth|Birth\s+Date|birth|born(?:\s+on)?|date)\W*{DATE}"
    ))
});

static RE_ANY_DATE: LazyLock<Option<Regex>> = LazyLock::new(|| compile(&format!(r"\b{DATE}\b")));

fn first_capture(re: &LazyLock<Option<Regex>>, text: &str) -> Option<String> {
    re.as_ref()?
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Finds the raw birth-date string, most trustworthy context first.
pub fn locate_dob(text: &str) -> Option<String> {
    Cascade::<str, String>::new(Field::Dob)
        .stage("labeled", |t| first_capture(&RE_LABELED, t))
        .stage("loose_label", |t| first_capture(&RE_LOOSE, t))
        .stage("context", |t| first_capture(&RE_CONTEXT, t))
        .stage("any_date", |t| first_capture(&RE_ANY_DATE, t))
        .run(text)
}

#[derive(Debug, Clone)]
pub struct DobExtractor {
    formats: Vec<String>,
}

impl DobExtractor {
    #[must_use]
    pub fn new(formats: Vec<String>) -> Self {
        Self { formats }
    }
}

impl Default for DobExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMATS.iter().map(|f| (*f).to_string()).collect())
    }
}

impl FieldExtractor for DobExtractor {
    type Output = NaiveDate;

    fn field(&self) -> Field {
        Field::Dob
    }

    /// A located date that matches no format is treated as absent; the search
    /// does not continue to later stages.
    fn extract(&self, document: &DocumentText) -> Option<NaiveDate> {
        let raw = locate_dob(document.as_str())?;
        let date = normalize_date(&raw, &self.formats);
        if date.is_none() {
            tracing::debug!(raw = %raw, "located birth date did not match any format");
        }
        date
    }
}

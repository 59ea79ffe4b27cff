use regex::Regex;
use std::sync::LazyLock;

use super::FieldExtractor;
use crate::config::PhoneRules;
use crate::ingest::strategy::Cascade;
use crate::ingest::text::DocumentText;
use crate::record::{Field, MobileNumber};

// Contact label, optional "No"/"Number", optional separator, then 10-15
// characters of digits, blanks, '+', '-' or parentheses on the same line.
static RE_LABELED: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:mobile|phone|contact|tel(?:ephone)?)(?:[ \t]*(?:no\.?|number|num|#))?[ \t]*[:\-]?\s*(\+?[0-9 \t()+\-]{10,15})",
    )
    .ok()
});

static RE_DIGIT_RUN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\+?[0-9]{10,13}").ok());

#[derive(Debug, Clone, Default)]
pub struct PhoneExtractor {
    rules: PhoneRules,
}

impl PhoneExtractor {
    #[must_use]
    pub fn new(rules: PhoneRules) -> Self {
        Self { rules }
    }

    fn labeled(&self, text: &str) -> Option<String> {
        RE_LABELED
            .as_ref()?
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .find_map(|m| self.rules.accept(m.as_str()))
    }

    fn unlabeled(&self, text: &str) -> Option<String> {
        let digits_only: String = text
            .chars()
            .map(|c| if c.is_ascii_digit() || c == '+' { c } else { ' ' })
            .collect();

        RE_DIGIT_RUN
            .as_ref()?
            .find_iter(&digits_only)
            .find_map(|m| self.rules.accept(m.as_str()))
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = MobileNumber;

    fn field(&self) -> Field {
        Field::Mobile
    }

    fn extract(&self, document: &DocumentText) -> Option<MobileNumber> {
        Cascade::<str, String>::new(self.field())
            .stage("labeled", |text| self.labeled(text))
            .stage("digit_run", |text| self.unlabeled(text))
            .run(document.as_str())
            .map(MobileNumber::new_unchecked)
    }
}

use regex::Regex;
use std::sync::LazyLock;

use super::FieldExtractor;
use crate::ingest::strategy::Cascade;
use crate::ingest::text::DocumentText;
use crate::record::Field;

static RE_EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}").ok());

/// First email-shaped substring in `text`. Résumé headers list the personal
/// address first, so no disambiguation is attempted.
pub fn find_email(text: &str) -> Option<&str> {
    RE_EMAIL.as_ref()?.find(text).map(|m| m.as_str())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailExtractor;

impl FieldExtractor for EmailExtractor {
    type Output = String;

    fn field(&self) -> Field {
        Field::Email
    }

    fn extract(&self, document: &DocumentText) -> Option<String> {
        Cascade::<str, String>::new(self.field())
            .stage("shape", |text| find_email(text).map(String::from))
            .run(document.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_compiles() {
        assert!(RE_EMAIL.is_some());
    }

    #[test]
    fn test_first_email_wins() {
        let text = "Jane Doe\njane.doe+cv@gmail.com | work: jdoe@corp.example.org";
        assert_eq!(EmailExtractor.extract_text(text).as_deref(), Some("jane.doe+cv@gmail.com"));
    }

    #[test]
    fn test_subdomain_and_trailing_period() {
        assert_eq!(find_email("Mail me at a_b-c@mail.iitb.ac.in."), Some("a_b-c@mail.iitb.ac.in"));
    }

    #[test]
    fn test_no_email() {
        assert_eq!(EmailExtractor.extract_text("user at example dot com"), None);
        assert_eq!(find_email("broken@localhost"), None);
        assert_eq!(find_email("x@y.c"), None);
    }
}

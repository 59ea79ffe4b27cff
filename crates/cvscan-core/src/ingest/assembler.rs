use super::extractor::{
    DobExtractor, EmailExtractor, FieldExtractor, GenderExtractor, NameExtractor, PhoneExtractor,
};
use super::ner::PersonNameRecognizer;
use super::text::DocumentText;
use crate::config::ExtractionConfig;
use crate::record::{BirthDate, ExtractedRecord};

/// Runs the five field extractors over one document and applies field
/// defaults. Holds no per-document state, so one instance may be shared
/// across threads.
#[derive(Debug)]
pub struct EntityAssembler {
    email: EmailExtractor,
    phone: PhoneExtractor,
    dob: DobExtractor,
    gender: GenderExtractor,
    name: NameExtractor,
}

impl EntityAssembler {
    #[must_use]
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            email: EmailExtractor,
            phone: PhoneExtractor::new(config.phone.clone()),
            dob: DobExtractor::new(config.date_formats.clone()),
            gender: GenderExtractor::new(config.gender_context_window),
            name: NameExtractor::new(config.header_lines),
        }
    }

    #[must_use]
    pub fn with_recognizer(mut self, recognizer: Box<dyn PersonNameRecognizer>) -> Self {
        self.name = self.name.with_recognizer(recognizer);
        self
    }

    pub fn assemble(&self, text: &str) -> ExtractedRecord {
        self.assemble_document(&DocumentText::new(text))
    }

    pub fn assemble_document(&self, document: &DocumentText) -> ExtractedRecord {
        let email = self.email.extract(document);
        let mobile = self.phone.extract(document);
        let dob = BirthDate::from(self.dob.extract(document));
        let gender = self.gender.extract(document).unwrap_or_default();
        let name = self.name.extract_with_hint(document, email.as_deref());

        let record = ExtractedRecord::new(name, email, mobile, dob, gender);
        tracing::debug!(
            populated = record.populated_fields(),
            recognizer = self.name.recognizer_name(),
            "assembled record"
        );
        record
    }
}

impl Default for EntityAssembler {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ner::NoRecognizer;
    use crate::record::{Gender, MobileNumber};

    const RESUME: &str = r#"
        ARCHANA BHAGAT
        B.Tech Computer Science
        archana.bhagat@gmail.com | Mobile: +91 98765 43210
        Pune, Maharashtra

        PROFILE
        Backend developer with 3 years of experience.

        PERSONAL DETAILS
        Date of Birth: 19 November 2004
        Gender: Female
    "#;

    #[test]
    fn test_full_record() {
        let record = EntityAssembler::default().assemble(RESUME);

        assert_eq!(record.name(), Some("Archana Bhagat"));
        assert_eq!(record.email(), Some("archana.bhagat@gmail.com"));
        assert_eq!(record.mobile().map(MobileNumber::as_str), Some("9876543210"));
        assert_eq!(record.dob().to_string(), "2004-11-19");
        assert_eq!(record.gender(), Gender::Female);
        assert_eq!(record.populated_fields(), 5);
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let record = EntityAssembler::default().assemble("nothing useful here at all, just prose");

        assert_eq!(record.name(), None);
        assert_eq!(record.email(), None);
        assert_eq!(record.mobile(), None);
        assert_eq!(record.dob(), BirthDate::NotAvailable);
        assert_eq!(record.gender(), Gender::NotSpecified);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["dob"], "NA");
        assert_eq!(json["gender"], "Not Specified");
    }

    #[test]
    fn test_unparseable_dob_is_sentinel() {
        let record = EntityAssembler::default().assemble("DOB: 31/02/2001\nJane Doe");
        assert_eq!(record.dob().to_string(), "NA");
    }

    #[test]
    fn test_email_hint_feeds_name_fallback() {
        let assembler = EntityAssembler::default().with_recognizer(Box::new(NoRecognizer));
        let record = assembler.assemble("RESUME\nrohit_verma21@yahoo.com\nObjective");
        assert_eq!(record.name(), Some("Rohit Verma"));
    }

    #[test]
    fn test_idempotent() {
        let assembler = EntityAssembler::default();
        let first = assembler.assemble(RESUME);
        let second = assembler.assemble(RESUME);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_configured_rules_flow_through() {
        let mut config = ExtractionConfig::default();
        config.phone.leading_digits = "7".into();
        let record = EntityAssembler::new(&config).assemble(RESUME);
        assert_eq!(record.mobile(), None);
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EntityAssembler>();

        let assembler = std::sync::Arc::new(EntityAssembler::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let assembler = std::sync::Arc::clone(&assembler);
                std::thread::spawn(move || assembler.assemble(RESUME))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().name(), Some("Archana Bhagat"));
        }
    }
}

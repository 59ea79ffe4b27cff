#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod ingest;
pub mod record;

pub use config::{ExtractionConfig, PhoneRules, DEFAULT_DATE_FORMATS, MAX_GENDER_CONTEXT_WINDOW};
pub use error::{Error, Result};
pub use ingest::{
    BatchIngestResult, EntityAssembler, FileReport, IngestError, IngestOutput, IngestPipeline,
    PersonNameRecognizer,
};
pub use record::{BirthDate, ExtractedRecord, Field, Gender, MobileNumber, DOB_SENTINEL};

/// Extracts contact fields from decoded résumé text with default settings.
pub fn extract(text: &str) -> ExtractedRecord {
    EntityAssembler::default().assemble(text)
}

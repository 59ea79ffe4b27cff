mod assembler;
mod extractor;
mod keywords;
mod ner;
mod normalizer;
mod parser;
mod pipeline;
mod strategy;
mod text;

pub use assembler::EntityAssembler;
pub use extractor::{
    find_email, locate_dob, DobExtractor, EmailExtractor, FieldExtractor, GenderExtractor,
    NameExtractor, PhoneExtractor,
};
pub use keywords::{find_name_label, is_noise_word, NAME_LABELS, NOISE_WORDS};
pub use ner::{CapitalizedRunRecognizer, NoRecognizer, PersonNameRecognizer};
pub use normalizer::{normalize_date, normalize_name_case, title_case};
pub use parser::{
    CompositeParser, DocumentFormat, ParseError, ParseResult, ParsedDocument, Parser,
    PlainTextParser,
};
pub use pipeline::{
    file_label, BatchIngestResult, FileReport, IngestError, IngestOutput, IngestPipeline,
    IngestResult,
};
pub use strategy::{Cascade, Stage};
pub use text::DocumentText;

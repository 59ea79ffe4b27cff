use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse failed: {0}")]
    ParseFailed(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    PlainText,
    Markdown,
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" | "text" => Some(Self::PlainText),
            "md" | "markdown" => Some(Self::Markdown),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Format for `path`; unknown or missing extensions are read as plain text.
    pub fn from_path(path: &Path) -> Self {
        let ext = path.extension().and_then(|e| e.to_str());
        match ext.and_then(Self::from_extension) {
            Some(format) => format,
            None => {
                tracing::warn!(
                    path = %path.display(),
                    extension = ext.unwrap_or(""),
                    "unrecognized extension, decoding as plain text"
                );
                Self::PlainText
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub format: DocumentFormat,
    pub full_text: String,
}

impl ParsedDocument {
    #[must_use]
    pub fn new(format: DocumentFormat, full_text: String) -> Self {
        Self { format, full_text }
    }
}

#[async_trait::async_trait]
pub trait Parser: Send + Sync {
    fn supported_formats(&self) -> &[DocumentFormat];

    fn can_parse(&self, format: DocumentFormat) -> bool {
        self.supported_formats().contains(&format)
    }

    async fn parse_bytes(&self, data: &[u8], format: DocumentFormat) -> ParseResult<ParsedDocument>;

    async fn parse_file(&self, path: &Path) -> ParseResult<ParsedDocument> {
        let format = DocumentFormat::from_path(path);

        if !self.can_parse(format) {
            return Err(ParseError::UnsupportedFormat(format!("{format:?}")));
        }

        let data = tokio::fs::read(path).await?;
        self.parse_bytes(&data, format).await
    }
}

/// Decodes UTF-8 text and Markdown. Invalid byte sequences are replaced
/// rather than rejected, since résumé exports are frequently mis-encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextParser;

impl PlainTextParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Parser for PlainTextParser {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::PlainText, DocumentFormat::Markdown]
    }

    async fn parse_bytes(&self, data: &[u8], format: DocumentFormat) -> ParseResult<ParsedDocument> {
        if !self.can_parse(format) {
            return Err(ParseError::UnsupportedFormat(format!("{format:?}")));
        }
        if data.contains(&0) {
            return Err(ParseError::ParseFailed("binary content in text document".into()));
        }

        let text = String::from_utf8_lossy(data);
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text).to_string();

        Ok(ParsedDocument::new(format, text))
    }
}

pub struct CompositeParser {
    parsers: Vec<Box<dyn Parser>>,
}

impl CompositeParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parser(mut self, parser: Box<dyn Parser>) -> Self {
        self.parsers.push(parser);
        self
    }

    fn find_parser(&self, format: DocumentFormat) -> Option<&dyn Parser> {
        self.parsers.iter().find(|p| p.can_parse(format)).map(AsRef::as_ref)
    }
}

impl Default for CompositeParser {
    fn default() -> Self {
        Self::new().with_parser(Box::new(PlainTextParser::new()))
    }
}

#[async_trait::async_trait]
impl Parser for CompositeParser {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[
            DocumentFormat::PlainText,
            DocumentFormat::Markdown,
            DocumentFormat::Pdf,
            DocumentFormat::Docx,
        ]
    }

    fn can_parse(&self, format: DocumentFormat) -> bool {
        self.find_parser(format).is_some()
    }

    async fn parse_bytes(&self, data: &[u8], format: DocumentFormat) -> ParseResult<ParsedDocument> {
        let parser = self
            .find_parser(format)
            .ok_or_else(|| ParseError::UnsupportedFormat(format!("{format:?}")))?;

        parser.parse_bytes(data, format).await
    }
}

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use thiserror::Error;
use uuid::Uuid;

use super::assembler::EntityAssembler;
use super::parser::{CompositeParser, DocumentFormat, ParsedDocument, Parser};
use super::text::DocumentText;
use crate::config::ExtractionConfig;
use crate::record::ExtractedRecord;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Parse error: {0}")]
    Parse(#[from] super::parser::ParseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Extracted text too short ({len} chars, need at least {min})")]
    TextTooShort { len: usize, min: usize },
}

pub type IngestResult<T> = Result<T, IngestError>;

/// Result of running one document through the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct IngestOutput {
    pub document_id: Uuid,
    pub source: String,
    pub content_hash: String,
    pub record: ExtractedRecord,
}

/// Decode, guard, extract. Holds no per-document state.
pub struct IngestPipeline {
    parser: Box<dyn Parser>,
    assembler: EntityAssembler,
    min_text_len: usize,
}

impl IngestPipeline {
    #[must_use]
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            parser: Box::new(CompositeParser::default()),
            assembler: EntityAssembler::new(config),
            min_text_len: config.min_text_len,
        }
    }

    #[must_use]
    pub fn with_parser(mut self, parser: Box<dyn Parser>) -> Self {
        self.parser = parser;
        self
    }

    #[must_use]
    pub fn with_assembler(mut self, assembler: EntityAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    pub async fn ingest_file(&self, path: &Path) -> IngestResult<IngestOutput> {
        let start = Instant::now();
        let document = self.parser.parse_file(path).await?;
        self.ingest_document(&document, path.to_string_lossy().into_owned(), start)
    }

    pub async fn ingest_bytes(
        &self,
        data: &[u8],
        format: DocumentFormat,
        source: &str,
    ) -> IngestResult<IngestOutput> {
        let start = Instant::now();
        let document = self.parser.parse_bytes(data, format).await?;
        self.ingest_document(&document, source.to_string(), start)
    }

    /// Runs extraction over already-decoded text.
    pub fn ingest_text(&self, text: &str, source: &str) -> IngestResult<IngestOutput> {
        let document = ParsedDocument::new(DocumentFormat::PlainText, text.to_string());
        self.ingest_document(&document, source.to_string(), Instant::now())
    }

    fn ingest_document(
        &self,
        document: &ParsedDocument,
        source: String,
        start: Instant,
    ) -> IngestResult<IngestOutput> {
        let text = DocumentText::new(&document.full_text);
        let len = text.trimmed_len();
        if len < self.min_text_len {
            return Err(IngestError::TextTooShort {
                len,
                min: self.min_text_len,
            });
        }

        let record = self.assembler.assemble_document(&text);
        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        tracing::info!(
            source = %source,
            format = ?document.format,
            fields = record.populated_fields(),
            duration_ms,
            "ingested document"
        );

        Ok(IngestOutput {
            document_id: Uuid::now_v7(),
            source,
            content_hash: compute_hash(&document.full_text),
            record,
        })
    }
}

impl Default for IngestPipeline {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

fn compute_hash(content: &str) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

/// Label a report uses for `path`: its file name, or the whole path when it
/// has none.
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Outcome for one input, as printed by the command-line tool. A success
/// carries the document's assigned id and content hash alongside the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileReport {
    Success {
        file: String,
        id: Uuid,
        content_hash: String,
        data: ExtractedRecord,
    },
    Failed {
        file: String,
        error: String,
    },
}

impl FileReport {
    #[must_use]
    pub fn file(&self) -> &str {
        match self {
            Self::Success { file, .. } | Self::Failed { file, .. } => file,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Per-input results in the order the inputs were given.
#[derive(Debug, Default)]
pub struct BatchIngestResult {
    entries: Vec<(String, IngestResult<IngestOutput>)>,
}

impl BatchIngestResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, file: String, result: IngestResult<IngestOutput>) {
        if let Err(e) = &result {
            tracing::warn!(file = %file, error = %e, "failed to ingest");
        }
        self.entries.push((file, result));
    }

    pub fn extend(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[(String, IngestResult<IngestOutput>)] {
        &self.entries
    }

    pub fn success_count(&self) -> usize {
        self.entries.iter().filter(|(_, r)| r.is_ok()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.entries.len() - self.success_count()
    }

    pub fn reports(&self) -> Vec<FileReport> {
        self.entries
            .iter()
            .map(|(file, result)| match result {
                Ok(output) => FileReport::Success {
                    file: file.clone(),
                    id: output.document_id,
                    content_hash: output.content_hash.clone(),
                    data: output.record.clone(),
                },
                Err(e) => FileReport::Failed {
                    file: file.clone(),
                    error: e.to_string(),
                },
            })
            .collect()
    }
}

impl IngestPipeline {
    /// Ingests every regular file directly inside `dir`, sorted by name.
    pub async fn ingest_directory(&self, dir: &Path) -> IngestResult<BatchIngestResult> {
        let mut paths = Vec::new();
        let mut entries = tokio::fs::read_dir(dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort();

        let mut result = BatchIngestResult::new();
        for path in &paths {
            result.push(file_label(path), self.ingest_file(path).await);
        }

        Ok(result)
    }

    pub async fn ingest_files(&self, paths: &[&Path]) -> BatchIngestResult {
        let mut result = BatchIngestResult::new();

        for path in paths {
            result.push(file_label(path), self.ingest_file(path).await);
        }

        result
    }
}

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tokio::io::AsyncReadExt;

use cvscan_core::ingest::{file_label, DocumentFormat, NoRecognizer};
use cvscan_core::{BatchIngestResult, EntityAssembler, ExtractionConfig, IngestPipeline};

const STDIN_PATH: &str = "-";
const STDIN_LABEL: &str = "<stdin>";

#[derive(Parser)]
#[command(
    name = "cvscan",
    about = "Extract name, email, mobile, birth date and gender from résumé text",
    version
)]
struct Cli {
    /// Files or directories to scan; `-` reads from stdin
    #[arg(required = true)]
    paths: Vec<String>,
    /// JSON file overriding extraction settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
    /// Skip the person-name recognizer fallback
    #[arg(long = "no-ner")]
    no_ner: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let mut assembler = EntityAssembler::new(&config);
    if cli.no_ner {
        assembler = assembler.with_recognizer(Box::new(NoRecognizer));
    }
    let pipeline = IngestPipeline::new(&config).with_assembler(assembler);

    let batch = run(&pipeline, &cli.paths).await?;
    let reports = batch.reports();

    let json = if cli.pretty {
        serde_json::to_string_pretty(&reports)?
    } else {
        serde_json::to_string(&reports)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    stdout.flush()?;

    tracing::debug!(
        succeeded = batch.success_count(),
        failed = batch.failure_count(),
        "scan finished"
    );

    if batch.success_count() == 0 {
        bail!("no input could be processed ({} failed)", batch.failure_count());
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ExtractionConfig> {
    match path {
        Some(path) => ExtractionConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(ExtractionConfig::default()),
    }
}

async fn run(pipeline: &IngestPipeline, paths: &[String]) -> Result<BatchIngestResult> {
    let mut batch = BatchIngestResult::new();

    for arg in paths {
        if arg == STDIN_PATH {
            let mut data = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut data)
                .await
                .context("reading stdin")?;
            let result = pipeline
                .ingest_bytes(&data, DocumentFormat::PlainText, STDIN_LABEL)
                .await;
            batch.push(STDIN_LABEL.to_string(), result);
            continue;
        }

        let path = Path::new(arg);
        if path.is_dir() {
            match pipeline.ingest_directory(path).await {
                Ok(dir_batch) => batch.extend(dir_batch),
                Err(e) => batch.push(file_label(path), Err(e)),
            }
        } else {
            batch.push(file_label(path), pipeline.ingest_file(path).await);
        }
    }

    Ok(batch)
}

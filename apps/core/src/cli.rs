//! Command line front end: argument parsing, input loading and command execution.

use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::ai::ClassificationOrchestrator;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::nlp::{ExtractorConfig, TextPipeline};

/// Shortest e-mail text accepted for classification, in characters
pub const MIN_TEXT_CHARS: usize = 10;

/// Mailsort - classify Portuguese e-mails and suggest a reply
#[derive(Parser, Debug, Clone)]
#[command(name = "mailsort")]
#[command(about = "Classify e-mails as Produtivo/Improdutivo and suggest a reply")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct MailsortArgs {
    /// Verbosity level (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl MailsortArgs {
    /// Default log directive when RUST_LOG is not set
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify e-mails and print the analysis as JSON
    Classify(ClassifyArgs),

    /// Run only the NLP pipeline and print the processed document
    Process(ProcessArgs),

    /// Show whether the AI provider is configured
    Status,
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// E-mail text given inline
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Plain-text file(s) to read; stdin is used when neither --text nor --file is given
    #[arg(short, long)]
    pub file: Vec<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Never call the AI service
    #[arg(long)]
    pub offline: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Keep stopwords in the token stream
    #[arg(long)]
    pub keep_stopwords: bool,

    /// Skip suffix stemming
    #[arg(long)]
    pub no_stemming: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Execute a parsed command and return what should be printed on stdout.
pub async fn execute(args: &MailsortArgs) -> Result<String, AppError> {
    match &args.command {
        Command::Classify(cmd) => {
            let texts = read_inputs(&cmd.input)?;
            for text in &texts {
                validate_text(text)?;
            }

            let config = if cmd.offline {
                AppConfig::offline()
            } else {
                AppConfig::from_env().unwrap_or_else(|e| {
                    warn!("Invalid configuration, running in fallback mode: {}", e);
                    AppConfig::offline()
                })
            };
            let orchestrator = ClassificationOrchestrator::from_config(&config);

            let analyses = orchestrator.analyze_many(&texts).await;
            render(&analyses, cmd.pretty)
        }
        Command::Process(cmd) => {
            let texts = read_inputs(&cmd.input)?;
            let pipeline = TextPipeline::new(ExtractorConfig {
                remove_stopwords: !cmd.keep_stopwords,
                apply_stemming: !cmd.no_stemming,
            });
            let orchestrator = ClassificationOrchestrator::offline().with_pipeline(pipeline);

            let documents: Vec<_> = texts.iter().map(|t| orchestrator.process(t)).collect();
            render(&documents, cmd.pretty)
        }
        Command::Status => {
            let config = AppConfig::from_env().unwrap_or_else(|e| {
                warn!("Invalid configuration: {}", e);
                AppConfig::offline()
            });
            let status = ClassificationOrchestrator::from_config(&config).status();
            to_json(&status, true)
        }
    }
}

/// Reject texts too short to classify.
pub fn validate_text(text: &str) -> Result<(), AppError> {
    if text.trim().chars().count() < MIN_TEXT_CHARS {
        return Err(AppError::Validation(format!(
            "e-mail text is empty or shorter than {} characters",
            MIN_TEXT_CHARS
        )));
    }
    Ok(())
}

/// Collect the input texts named by the arguments (inline, files, or stdin).
pub fn read_inputs(input: &InputArgs) -> Result<Vec<String>, AppError> {
    if let Some(text) = &input.text {
        return Ok(vec![text.clone()]);
    }

    if !input.file.is_empty() {
        return input.file.iter().map(|p| read_text_file(p)).collect();
    }

    let mut buffer = Vec::new();
    std::io::stdin().read_to_end(&mut buffer)?;
    Ok(vec![decode_text(buffer)])
}

/// Read a plain-text file, accepting UTF-8 or Latin-1.
pub fn read_text_file(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path)?;
    info!("Read {} bytes from {:?}", bytes.len(), path);
    Ok(decode_text(bytes))
}

/// Decode UTF-8, falling back to Latin-1, and trim surrounding whitespace.
fn decode_text(bytes: Vec<u8>) -> String {
    let text: String = match String::from_utf8(bytes) {
        Ok(text) => text,
        // every byte is a valid Latin-1 code point
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    };
    text.trim().to_string()
}

fn render<T: Serialize>(items: &[T], pretty: bool) -> Result<String, AppError> {
    match items {
        [single] => to_json(single, pretty),
        many => to_json(&many, pretty),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, AppError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(|e| AppError::Internal(format!("Failed to serialize output: {}", e)))
}

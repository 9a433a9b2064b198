mod analyze;
mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use plainlaw_ai::{
    MAX_DOCUMENT_CHARS, analysis_prompt, classification_prompt, load_document, prepare_text,
};
use plainlaw_core::{DocumentKind, normalize_response};
use tracing_subscriber::EnvFilter;

use crate::analyze::{AnalyzeOptions, read_reply, run_analyze};

#[derive(Parser)]
#[command(name = "plainlaw", version, about = "Plain-language legal document analysis")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalise a model reply (file or stdin) into the canonical result.
    Normalize {
        /// Reply file; reads stdin when omitted.
        path: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Output::Json)]
        output: Output,
    },
    /// Print document text as it would be sent for analysis.
    Prepare {
        document: PathBuf,
        #[arg(long, default_value_t = MAX_DOCUMENT_CHARS)]
        max_chars: usize,
    },
    /// Print the classification prompt, or the analysis prompt when --kind is given.
    Prompt {
        document: PathBuf,
        #[arg(long, value_parser = parse_kind)]
        kind: Option<DocumentKind>,
        #[arg(long, default_value_t = MAX_DOCUMENT_CHARS)]
        max_chars: usize,
    },
    /// Combine a document and its model replies into a report.
    Analyze {
        #[arg(long)]
        document: PathBuf,
        /// File holding the model's analysis reply.
        #[arg(long)]
        response: PathBuf,
        /// The classifier's reply (a document category name).
        #[arg(long)]
        kind_reply: Option<String>,
        #[arg(long, env = "PLAINLAW_MODEL", default_value = "gemini-1.5-flash")]
        model: String,
        #[arg(long, default_value_t = MAX_DOCUMENT_CHARS)]
        max_chars: usize,
        #[arg(long, value_enum, default_value_t = Output::Json)]
        output: Output,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Output {
    Json,
    Card,
}

fn parse_kind(s: &str) -> Result<DocumentKind, String> {
    DocumentKind::from_name(&s.to_lowercase()).ok_or_else(|| {
        let names: Vec<&str> = DocumentKind::ALL.iter().map(|k| k.as_str()).collect();
        format!("unknown document kind '{s}' (expected one of: {})", names.join(", "))
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("plainlaw v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Normalize { path, output } => {
            let reply = read_reply(path.as_deref())?;
            let result = normalize_response(&reply);
            match output {
                Output::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                Output::Card => display::print_result_card(&result),
            }
        }
        Command::Prepare {
            document,
            max_chars,
        } => {
            let text = load_document(&document)?;
            println!("{}", prepare_text(&text, max_chars).text);
        }
        Command::Prompt {
            document,
            kind,
            max_chars,
        } => {
            let text = load_document(&document)?;
            let prepared = prepare_text(&text, max_chars);
            let prompt = match kind {
                Some(kind) => analysis_prompt(&prepared.text, kind),
                None => classification_prompt(&prepared.text),
            };
            println!("{prompt}");
        }
        Command::Analyze {
            document,
            response,
            kind_reply,
            model,
            max_chars,
            output,
        } => {
            let report = run_analyze(&AnalyzeOptions {
                document: &document,
                response: &response,
                kind_reply: kind_reply.as_deref(),
                model: &model,
                max_chars,
            })?;
            match output {
                Output::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                Output::Card => display::print_report_card(&report),
            }
        }
    }

    Ok(())
}

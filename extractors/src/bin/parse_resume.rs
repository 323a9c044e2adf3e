use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use extractors::ResumeParser;
use shared_types::ResumeTextError;
use std::io::Read;
use std::path::PathBuf;

/// Caller-side budget on extracted text, mirroring the upload cap of the
/// hosting deployment. The pipeline itself places no limit.
const MAX_TEXT_BYTES: usize = 5 * 1024 * 1024;

#[derive(Parser, Debug)]
#[command(name = "parse-resume", about = "Run the resume extraction pipeline on plain text")]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["path", "text", "stdin"]),
))]
struct Cli {
    /// Path to a plain-text file with the extracted resume content
    #[arg(long, value_name = "PATH", group = "input")]
    path: Option<PathBuf>,

    /// Raw resume text passed directly on the command line
    #[arg(long, group = "input")]
    text: Option<String>,

    /// Read the resume text from stdin
    #[arg(long, group = "input")]
    stdin: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let text = match (&cli.path, &cli.text, cli.stdin) {
        (Some(path), None, false) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read text file at {:?}", path))?;
            into_text(bytes)?
        }
        (None, Some(text), false) => text.clone(),
        (None, None, true) => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read stdin")?;
            into_text(bytes)?
        }
        _ => unreachable!("clap enforces exactly one input"),
    };

    let parser = ResumeParser::new();
    let resume = parser.parse(&text);

    let output = if cli.pretty {
        serde_json::to_string_pretty(&resume)?
    } else {
        serde_json::to_string(&resume)?
    };
    println!("{output}");

    Ok(())
}

/// Payload checks the upstream converter normally guarantees: text must be
/// UTF-8 and inside the caller budget.
fn into_text(bytes: Vec<u8>) -> Result<String, ResumeTextError> {
    if bytes.len() > MAX_TEXT_BYTES {
        return Err(ResumeTextError::TooLarge {
            size: bytes.len(),
            limit: MAX_TEXT_BYTES,
        });
    }
    String::from_utf8(bytes).map_err(|_| ResumeTextError::NotText)
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gtl")]
#[command(about = "Translate text with a Groq-hosted language model")]
#[command(version)]
pub struct Args {
    /// Text to translate (reads --file or stdin if not provided)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// File to translate
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Target language name or code (e.g., French, Japanese, fr)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// API endpoint URL (OpenAI-compatible)
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Suppress status output (spinner, hints)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Log request details to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive translation form
    Form {
        /// Default target language name or code
        #[arg(short = 't', long = "to")]
        to: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,

        /// API endpoint URL (OpenAI-compatible)
        #[arg(short = 'e', long)]
        endpoint: Option<String>,

        /// Request timeout in seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Compose the text in $EDITOR instead of a single-line prompt
        #[arg(long)]
        editor: bool,
    },
    /// Configure default settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List known language codes
    Languages,
}

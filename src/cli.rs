use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bca")]
#[command(
    version,
    about = "Brand Compliance Auditor - Score a scraped website against brand guidelines",
    long_about = "Brand Compliance Auditor (BCA)\n\nModes:\n- audit: score scraped design data (colors, typography, logo, layout) against extracted brand guidelines and emit a compliance report.\n- inspect: show the normalized brand profile extracted from a guidelines snapshot, useful for debugging extraction.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) to set defaults for threshold/weights/color matching; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Audit scraped design data against brand guidelines
    Audit {
        #[arg(long, help = "Brand guidelines snapshot (JSON or YAML)")]
        guidelines: PathBuf,

        #[arg(long, help = "Scraped design data snapshot (JSON or YAML)")]
        scraped: PathBuf,

        #[arg(
            long,
            default_value = "0.75",
            help = "Compliance threshold for pass/fail (score >= threshold passes)"
        )]
        threshold: f32,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Show the normalized brand profile extracted from a guidelines snapshot
    Inspect {
        #[arg(long, help = "Brand guidelines snapshot (JSON or YAML)")]
        guidelines: PathBuf,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}

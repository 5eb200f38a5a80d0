mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_audit, run_inspect};

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}

async fn run() -> ExitCode {
    let raw_args: Vec<String> = std::env::args().collect();
    let args = cli::parse();

    match args.command {
        Commands::Audit {
            guidelines,
            scraped,
            threshold,
            format,
            output,
        } => {
            run_audit(
                &raw_args,
                args.config,
                args.verbose,
                guidelines,
                scraped,
                threshold,
                format,
                output,
            )
            .await
        }
        Commands::Inspect {
            guidelines,
            format,
            output,
        } => run_inspect(args.verbose, guidelines, format, output).await,
    }
}

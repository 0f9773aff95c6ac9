use clap::error::ErrorKind;
use clap::Parser;
use java2yaml::cli::{run, summary_line, Cli};
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the status lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let watch = Instant::now();

    let succeeded = match Cli::try_parse() {
        Ok(cli) => {
            tracing::info!("CLI arguments parsed, invoking run");
            match run(cli).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!(error = %e, "java2yaml failed");
                    false
                }
            }
        }
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            eprintln!("Unrecognized parameters. Usage: java2yaml [code2yaml.json repo.json]");
            false
        }
    };

    println!("{}", summary_line(succeeded, watch.elapsed()));
    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use vision_read_rust::{config, Credentials, ReadError};

#[derive(Parser, Debug)]
#[command(
    name = "vision-read-rust",
    version,
    about = "Read printed text in an image with Azure AI Vision"
)]
struct Cli {
    /// Image file to analyze
    #[arg(default_value = "images/Lincoln.jpg")]
    image: PathBuf,

    /// Enable verbose logging
    #[arg(long = "verbose")]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    vision_read_rust::logging::init(cli.verbose);
    config::load_dotenv();

    let result = match Credentials::from_env() {
        Ok(credentials) => vision_read_rust::run(&credentials, &cli.image).await,
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        report_failure(&err);
        std::process::exit(err.exit_code());
    }
}

fn report_failure(err: &ReadError) {
    eprintln!("Error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}

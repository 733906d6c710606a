use std::fs;
use std::path::Path;

pub mod annotate;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
#[cfg(test)]
mod test_util;

pub use annotate::Granularity;
pub use client::VisionClient;
pub use config::Credentials;
pub use error::ReadError;

/// Full run: read the image, send it for analysis, print the text report,
/// and write the two annotated copies into the working directory.
pub async fn run(credentials: &Credentials, image_path: &Path) -> Result<(), ReadError> {
    let image_bytes = fs::read(image_path).map_err(|source| ReadError::ImageRead {
        path: image_path.to_path_buf(),
        source,
    })?;
    println!("\nReading text in {}", image_path.display());

    let client = VisionClient::new(credentials);
    let analysis = client.analyze_read(image_bytes).await?;
    let page = analysis.read_result.as_ref();

    let output_dir = Path::new(".");
    if let Some(page) = page {
        print!("{}", report::lines_report(page));
    }
    println!("\nAnnotating lines of text in image...");
    annotate::annotate(image_path, page, Granularity::Lines, output_dir)?;
    println!("  Results saved in {}", Granularity::Lines.output_file());

    if let Some(page) = page {
        print!("{}", report::words_report(page));
    }
    println!("\nAnnotating individual words in image...");
    annotate::annotate(image_path, page, Granularity::Words, output_dir)?;
    println!("  Results saved in {}", Granularity::Words.output_file());

    Ok(())
}

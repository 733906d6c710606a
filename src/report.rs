use std::fmt::Write;

use crate::models::ReadResult;

/// Recognized lines of the first block, one per row under a `Text:` header.
pub fn lines_report(page: &ReadResult) -> String {
    let mut out = String::from("\nText:\n");
    for line in page.first_block_lines() {
        let _ = writeln!(out, " {}", line.text);
    }
    out
}

/// Every word of the first block with its confidence as a percentage,
/// in line order then word order.
pub fn words_report(page: &ReadResult) -> String {
    let mut out = String::from("\nIndividual words:\n");
    for line in page.first_block_lines() {
        for word in &line.words {
            let _ = writeln!(
                out,
                "  {} (Confidence: {:.2}%)",
                word.text,
                word.confidence * 100.0
            );
        }
    }
    out
}

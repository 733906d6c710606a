use tracing_subscriber::fmt;

/// Opt-in diagnostics; the normal report output stays on plain stdout.
pub fn init(verbose: bool) {
    if !verbose {
        return;
    }
    let _ = fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}

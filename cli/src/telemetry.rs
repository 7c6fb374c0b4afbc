use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. Logs go to stderr so they never
/// mix with command output.
pub fn init(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

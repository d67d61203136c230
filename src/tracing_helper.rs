use tracing::Subscriber;

/// Builds the fmt subscriber. `filter` uses the `EnvFilter` directive syntax,
/// e.g. `warn,bidcalc=debug`. Logs go to stderr so stdout only carries the
/// selection result.
pub fn subscriber(filter: &str) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_writer(std::io::stderr)
        .finish()
}

/// Installs the global subscriber. Later calls are ignored.
pub fn initialize(filter: &str) {
    if let Err(err) = tracing::subscriber::set_global_default(subscriber(filter)) {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}

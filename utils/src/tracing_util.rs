//! Helpers related to tracing, used by main entrypoints

/// Initialize tracing with the default configuration.
///
/// Everything goes to stderr; stdout belongs to the program we hand off to.
/// The level is fixed at `WARN`: the launcher runs setuid, so nothing in the
/// caller's environment (such as `RUST_LOG`) may suppress the diagnostic
/// printed on failure.
pub fn initialize_tracing() {
    // Don't include timestamps and such because they're not really useful and
    // too verbose, and plus several log targets such as journald will already
    // include timestamps.
    let format = tracing_subscriber::fmt::format()
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .compact();
    // `try_init` so that a subscriber installed by a test harness wins.
    let _ = tracing_subscriber::fmt()
        .event_format(format)
        .with_writer(std::io::stderr)
        .with_max_level(tracing_subscriber::filter::LevelFilter::WARN)
        .try_init();
}

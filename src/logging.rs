use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Output goes to stderr so stdout stays free
/// for command output and the MCP transport.
///
/// `RUST_LOG` wins when set; otherwise `verbose` switches this crate to debug.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "warn,pokedex_lookup=debug"
    } else {
        "warn,pokedex_lookup=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Use try_init to avoid panicking if another subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

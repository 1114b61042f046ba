//! CLI subcommand implementations for the doctar-sitemap binary.

pub mod generate_cmd;
pub mod output;
pub mod print_cmd;
pub mod static_cmd;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber, logging to stderr.
///
/// `RUST_LOG` wins; otherwise `doctar_sitemap=info` (`warn` when quiet).
pub fn init_tracing(mode: output::OutputMode) {
    let default = if mode.quiet {
        "doctar_sitemap=warn"
    } else {
        "doctar_sitemap=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // try_init: tests and embedders may already have a subscriber.
    let _ = if mode.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

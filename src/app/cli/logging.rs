use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "CUEVENDOR_LOG";

/// Install the stderr subscriber.
///
/// `CUEVENDOR_LOG` wins over `RUST_LOG`; without either, `--verbose` selects
/// debug output for this crate and everything else stays at `warn`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            if verbose {
                EnvFilter::new("warn,cuevendor=debug")
            } else {
                EnvFilter::new("warn")
            }
        });

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

//! Logger bootstrap shared by the demo binary and integration tests.

use env_logger::{Builder, Env};

/// Initialises the global logger.
///
/// The default filter keeps every crate at `info`; `verbose` raises only
/// this crate's target to `debug`, so per-tick takeover decisions become
/// visible without drowning them in host-side noise. `RUST_LOG` still
/// overrides either default.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        concat!("info,", env!("CARGO_PKG_NAME"), "=debug")
    } else {
        "info"
    };
    let env = Env::default().default_filter_or(default_filter);

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = Builder::from_env(env).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn repeated_initialisation_is_tolerated() {
        init(false);
        init(true);
    }
}

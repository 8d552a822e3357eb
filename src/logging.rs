use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "hotkey_dispatch=info,warn";

/// Filter used by `--verbose`
pub const VERBOSE_FILTER: &str = "hotkey_dispatch=debug,warn";

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER })
    })
}

/// Initialize logging with tracing
///
/// Reads the filter from `RUST_LOG` when set, otherwise logs this crate at
/// info (debug when `verbose`) and everything else at warn. Output goes to
/// stderr so command output on stdout stays clean.
///
/// Returns false if a global subscriber was already installed.
///
/// # Example
///
/// ```no_run
/// use hotkey_dispatch::logging::init_logging;
///
/// init_logging(false);
/// ```
pub fn init_logging(verbose: bool) -> bool {
    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter(verbose))
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(verbose, "Logging initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        init_logging(true);
        assert!(!init_logging(false));
    }
}

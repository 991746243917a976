//! Platform abstraction layer
//!
//! Handles browser/native differences. Only logging lives here; input,
//! timing and drawing are wired directly in `main.rs`.

/// Install the logger for the current target
///
/// `verbose` lowers the default level to debug so spawns and scores show
/// up. Calling this twice is harmless.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(verbose: bool) {
    console_error_panic_hook::set_once();
    let level = if verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(level);
}

/// Install the logger for the current target
///
/// `RUST_LOG` wins over `verbose` when set. Calling this twice is harmless.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let env = env_logger::Env::default().default_filter_or(level.to_string());
    let _ = env_logger::Builder::from_env(env).try_init();
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging(true);
        init_logging(false);
        log::debug!("logger installed");
    }
}

//! Logging initialization utilities.

use env_logger::Env;

/// Initialize logging with a default filter level.
///
/// The parser only logs what it silently absorbs (ignored flags, dropped
/// header lines), so the binary stays quiet unless `RUST_LOG` asks otherwise.
pub fn init() {
    let env = Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env).try_init();
}

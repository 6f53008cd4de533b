// logging.rs - Diagnostic logging setup

use env_logger::Env;

/// Install the stderr logger.
///
/// Silent unless `RUST_LOG` asks for output, so stdout and stderr carry
/// nothing beyond the tool's own messages by default. A second call is a
/// no-op.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("off"))
        .format_timestamp(None)
        .try_init();
}

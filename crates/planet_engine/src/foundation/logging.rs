//! Logging utilities and structured logging support
//!
//! The engine itself only talks to the `log` facade. Applications pick the
//! backend; `init` wires up `env_logger` driven by `RUST_LOG`.

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system. Later calls are no-ops.
pub fn init() {
    if env_logger::try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}

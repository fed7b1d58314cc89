//! Tracing/logging setup shared by stockroom binaries.

/// Initialize process-wide logging at the given default level.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init(default_level: &str) {
    tracing::init(default_level, tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

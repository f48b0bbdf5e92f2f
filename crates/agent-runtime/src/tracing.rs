/// Initializes structured logging for the whole process.
///
/// Log verbosity is controlled through the `RUST_LOG` environment
/// variable, e.g.:
/// - `RUST_LOG=info` - lifecycle events (spawn, terminate, registration)
/// - `RUST_LOG=debug` - plus per-message routing decisions
/// - `RUST_LOG=agent_runtime=debug` - debug for the runtime crate only
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

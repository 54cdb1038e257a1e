/// Centralized error mapping for commands.
///
/// The alternate format keeps the context chain ("storage error: read store
/// failed: ...: permission denied").
pub fn map_err(err: impl Into<anyhow::Error>) -> String {
    format!("{:#}", err.into())
}

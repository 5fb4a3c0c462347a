/// Liveness text served at `/`
pub const LIVENESS_MESSAGE: &str = "IRRES Locations API is running";

/// Root liveness check
///
/// Does not touch the upstream; a 200 only means the process is serving.
pub async fn root_handler() -> &'static str {
    LIVENESS_MESSAGE
}

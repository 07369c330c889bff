pub const LIVENESS_MESSAGE: &str = "Safe WebTrust API is running.";

pub async fn health_handler() -> &'static str {
    LIVENESS_MESSAGE
}

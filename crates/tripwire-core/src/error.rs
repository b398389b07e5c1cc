/// Failure of a capture or recognition call; the cycle becomes a no-match
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("screen capture failed: {0}")]
    Capture(String),

    #[error("text recognition failed: {0}")]
    Recognition(String),
}

/// Failure to deliver a notification; never retried
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("token or channel id not configured")]
    MissingCredentials,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),
}

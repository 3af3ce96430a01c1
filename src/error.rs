#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unknown failure reason: {code}")]
    UnknownFailureReason { code: i64 },

    #[error("unknown failure reason name: {name}")]
    UnknownReasonName { name: String },

    #[error("parse error: {reason}")]
    Parse { reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

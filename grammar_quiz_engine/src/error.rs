use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Json error: {}", .0)]
    Json(#[from] serde_json::Error),

    #[error("{}", .0)]
    Resource(#[from] ResourceError),

    #[error("Question {question} has answer index {answer} but only {options} options")]
    AnswerOutOfRange {
        /// 1-based position of the question inside its set
        question: usize,
        answer: usize,
        options: usize,
    },
}

/// Failure reported by a [`crate::resource::ResourceAccess`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("Set not found ({path} returned status {status})")]
    Status { path: String, status: u16 },

    #[error("Network error while fetching {path}: {message}")]
    Transport { path: String, message: String },
}

impl ResourceError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ResourceError::Status { status, .. } => Some(*status),
            ResourceError::Transport { .. } => None,
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset error: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("No open stalls found in {0}")]
    NoOpenStalls(String),

    #[error("Could not open map application: {0}")]
    Launch(String),
}

impl AppError {
    /// Message shown to the user in the session's error slot.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NoOpenStalls(_) | AppError::Launch(_) => self.to_string(),
            AppError::Config(_) | AppError::Io(_) | AppError::Dataset(_) => {
                tracing::error!("{}", self);
                self.to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

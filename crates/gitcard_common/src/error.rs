//! Error types for GitCard.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("No access token configured for the contribution calendar")]
    MissingToken,

    #[error("Render error: {0}")]
    Render(String),
}

impl CardError {
    /// Message shown inside the fallback error card.
    ///
    /// Only the user-not-found case leaks detail to the viewer; everything
    /// else collapses to a generic message.
    pub fn display_message(&self) -> String {
        match self {
            CardError::UserNotFound(login) => format!("User not found: {}", login),
            _ => "Error generating card".to_string(),
        }
    }
}

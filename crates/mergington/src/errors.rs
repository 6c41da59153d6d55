//! Shared error types and utilities for the mergington project.
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures of directory operations. The messages are returned to clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_error_messages() {
        assert_eq!(ActivityError::ActivityNotFound.to_string(), "Activity not found");
        assert_eq!(
            ActivityError::AlreadySignedUp.to_string(),
            "Student already signed up for this activity"
        );
        assert_eq!(
            ActivityError::NotSignedUp.to_string(),
            "Student is not signed up for this activity"
        );
    }
}

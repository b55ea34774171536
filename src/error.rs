//! Error types and handling for the trip wizard
//!
//! The planning core never fails; these errors belong to the layers around it
//! (configuration, form validation, session storage and the CLI).

use thiserror::Error;

/// Main error type for the trip wizard
#[derive(Error, Debug)]
pub enum TripWizardError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Form input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Session storage errors
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripWizardError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripWizardError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TripWizardError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripWizardError::Storage { .. } => {
                "Saved trip could not be read or written. Try `tripwizard reset`.".to_string()
            }
            TripWizardError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripWizardError::General { message } => message.clone(),
        }
    }
}

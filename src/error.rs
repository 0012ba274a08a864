use thiserror::Error;

/// Errors that can occur while loading recipes from the sheet
#[derive(Error, Debug)]
pub enum LoadError {
    /// The CSV URL is missing or is not a valid absolute URL
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The server answered with a non-success status
    #[error("Failed to download CSV: HTTP {status} {reason}")]
    Fetch {
        status: u16,
        reason: String,
        /// First characters of the response body, for diagnostics
        body: String,
    },

    /// The document was fetched but contains nothing but whitespace
    #[error("The downloaded CSV document is empty")]
    EmptyDocument,

    /// Anything else: transport failures, unreadable bodies, parser failures
    #[error("Unknown failure while retrieving recipes: {0}")]
    Unknown(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Unknown(err.to_string())
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Unknown(err.to_string())
    }
}

impl From<config::ConfigError> for LoadError {
    fn from(err: config::ConfigError) -> Self {
        LoadError::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message_contains_status() {
        let err = LoadError::Fetch {
            status: 404,
            reason: "Not Found".to_string(),
            body: "missing".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("Not Found"));
    }

    #[test]
    fn test_empty_document_message() {
        assert_eq!(
            LoadError::EmptyDocument.to_string(),
            "The downloaded CSV document is empty"
        );
    }
}

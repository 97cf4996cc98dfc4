use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    NotFound(String),
    ParseCommand(String),
    Validation(String),
    Serialization(serde_json::Error),
    FailedRequest(reqwest::Error),
    InvalidUrl(url::ParseError),
    Regex(regex::Error),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FailedRequest(err)
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::InvalidUrl(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
            AppError::Serialization(e) => {
                write!(f, "Failed to (de)serialize contacts: {}", e)
            }
            AppError::FailedRequest(e) => {
                write!(f, "Remote request failed: {}", e)
            }
            AppError::InvalidUrl(e) => {
                write!(f, "Invalid URL: {}", e)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid pattern: {}", e)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Serialization(e) => Some(e),
            AppError::FailedRequest(e) => Some(e),
            AppError::InvalidUrl(e) => Some(e),
            AppError::Regex(e) => Some(e),
            AppError::NotFound(_) | AppError::ParseCommand(_) | AppError::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_invalid_url_message() {
        let err = AppError::from(url::Url::parse("not a url").unwrap_err());

        assert!(format!("{}", err).starts_with("Invalid URL: "));
    }

    #[test]
    fn confirm_not_found_message() {
        let err = AppError::NotFound("Contact".to_string());

        assert_eq!(format!("{}", err), "Contact Not found");
    }

    #[test]
    fn serde_errors_convert_into_app_error() {
        let result: Result<Vec<u8>, AppError> =
            serde_json::from_str::<Vec<u8>>("invalid json").map_err(AppError::from);

        match result {
            Err(AppError::Serialization(_)) => {}
            other => panic!("expected serialization error, got {:?}", other),
        }
    }
}

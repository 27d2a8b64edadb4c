use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Invalid number '{raw}': {reason}")]
    InvalidInputError { raw: String, reason: String },

    #[error("Missing required query parameter: {param}")]
    MissingInputError { param: String },

    #[error("Malformed query string")]
    MalformedQueryError,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl ClassifierError {
    /// 是否屬於呼叫端的輸入錯誤 (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ClassifierError::InvalidInputError { .. }
                | ClassifierError::MissingInputError { .. }
                | ClassifierError::MalformedQueryError
        )
    }

    /// 對外顯示的訊息，內部錯誤不洩漏細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            ClassifierError::InvalidInputError { .. }
            | ClassifierError::MissingInputError { .. }
            | ClassifierError::MalformedQueryError => self.to_string(),
            ClassifierError::ConfigError { .. }
            | ClassifierError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            _ => "internal server error".to_string(),
        }
    }
}

/// Failure modes of a single outbound fun-fact lookup.
///
/// These never reach the request boundary: the fetcher turns each one into a
/// placeholder string inside an otherwise successful response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactError {
    #[error("fact lookup timed out")]
    Timeout,

    #[error("fact service responded with status {0}")]
    Status(u16),

    #[error("fact service unreachable: {0}")]
    Transport(String),
}

impl FactError {
    pub fn placeholder(&self) -> String {
        match self {
            FactError::Timeout => {
                "Could not fetch fun fact: the trivia service timed out.".to_string()
            }
            FactError::Status(code) => {
                format!("Could not fetch fun fact: the trivia service returned status {}.", code)
            }
            FactError::Transport(detail) => {
                format!("Could not fetch fun fact: {}.", detail)
            }
        }
    }
}

impl From<reqwest::Error> for FactError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FactError::Timeout
        } else if let Some(status) = err.status() {
            FactError::Status(status.as_u16())
        } else {
            FactError::Transport(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        let invalid = ClassifierError::InvalidInputError {
            raw: "abc".to_string(),
            reason: "not an integer".to_string(),
        };
        assert!(invalid.is_client_error());
        assert!(invalid.user_friendly_message().contains("abc"));

        let internal = ClassifierError::InternalError {
            message: "worker panicked at src/core/classifier.rs".to_string(),
        };
        assert!(!internal.is_client_error());
        assert_eq!(internal.user_friendly_message(), "internal server error");
    }

    #[test]
    fn test_fact_placeholders_are_distinct() {
        let timeout = FactError::Timeout.placeholder();
        let status = FactError::Status(503).placeholder();
        let transport = FactError::Transport("connection refused".to_string()).placeholder();

        assert!(timeout.contains("timed out"));
        assert!(status.contains("503"));
        assert!(transport.contains("connection refused"));
        assert_ne!(timeout, status);
        assert_ne!(status, transport);
    }
}

use crate::utils::error::{ClassifierError, Result};
use regex::Regex;
use std::net::SocketAddr;
use std::sync::LazyLock;
use url::Url;

static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("number pattern is a valid regex"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses the raw `number` query value.
///
/// Accepts an optional leading `-` followed by ASCII digits only. Signs like
/// `+`, whitespace, decimals and exponents are rejected, as are values that
/// do not fit in an `i64`.
pub fn parse_number(raw: &str) -> Result<i64> {
    if !NUMBER_PATTERN.is_match(raw) {
        return Err(ClassifierError::InvalidInputError {
            raw: raw.to_string(),
            reason: "expected an integer made of digits with an optional leading '-'".to_string(),
        });
    }

    raw.parse::<i64>()
        .map_err(|e| ClassifierError::InvalidInputError {
            raw: raw.to_string(),
            reason: format!("integer out of range: {}", e),
        })
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ClassifierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ClassifierError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ClassifierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<()> {
    validate_non_empty_string(field_name, addr)?;

    addr.parse::<SocketAddr>()
        .map(|_| ())
        .map_err(|e| ClassifierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClassifierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ClassifierError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_integers() {
        assert_eq!(parse_number("371").unwrap(), 371);
        assert_eq!(parse_number("0").unwrap(), 0);
        assert_eq!(parse_number("-45").unwrap(), -45);
        assert_eq!(parse_number("007").unwrap(), 7);
        assert_eq!(parse_number("-9223372036854775808").unwrap(), i64::MIN);
    }

    #[test]
    fn test_parse_number_rejects_malformed_input() {
        for raw in ["abc", "", "-", "+5", " 5", "5 ", "3.14", "1e3", "12a", "--1", "٣"] {
            match parse_number(raw) {
                Err(ClassifierError::InvalidInputError { raw: echoed, .. }) => {
                    assert_eq!(echoed, raw)
                }
                other => panic!("expected invalid input for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_parse_number_rejects_overflow() {
        assert!(parse_number("9223372036854775808").is_err());
        assert!(parse_number("99999999999999999999999").is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("trivia.base_url", "http://numbersapi.com").is_ok());
        assert!(validate_url("trivia.base_url", "https://example.com").is_ok());
        assert!(validate_url("trivia.base_url", "").is_err());
        assert!(validate_url("trivia.base_url", "invalid-url").is_err());
        assert!(validate_url("trivia.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_socket_addr() {
        assert!(validate_socket_addr("server.bind", "0.0.0.0:8000").is_ok());
        assert!(validate_socket_addr("server.bind", "[::1]:8080").is_ok());
        assert!(validate_socket_addr("server.bind", "").is_err());
        assert!(validate_socket_addr("server.bind", "localhost").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("cache.capacity", 1000usize, 1, 1_000_000).is_ok());
        assert!(validate_range("cache.capacity", 0usize, 1, 1_000_000).is_err());
    }
}

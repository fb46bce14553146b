//! JSON helpers backed by sonic-rs.

use crate::{Error, Result};
use serde::{Serialize, de::DeserializeOwned};

/// Deserialize JSON bytes.
///
/// # Errors
/// Returns error if JSON is invalid.
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    sonic_rs::from_slice(bytes).map_err(Error::from)
}

/// Serialize to compact JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    sonic_rs::to_string(value).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Repository {
        url: String,
    }

    #[test]
    fn compact_output() {
        let json = to_json(&Repository {
            url: "https://github.com/acme/widget".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"url":"https://github.com/acme/widget"}"#);
    }

    #[test]
    fn invalid_input_is_json_error() {
        let err = from_json_slice::<Repository>(b"<html>").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}

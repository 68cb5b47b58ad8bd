//! Response envelope shared by every `/sdk` endpoint

use serde::Deserialize;

/// Value of `Result` that marks a successful call
pub const RESULT_OK: i64 = 0;

/// `{Result, Token?, Data?, Details?}` as returned by the backend
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SdkEnvelope<T> {
    /// Embedded result code, `0` on success
    #[serde(default)]
    pub result: Option<i64>,

    /// Access token (login only)
    #[serde(default)]
    pub token: Option<String>,

    /// Payload
    #[serde(default = "Option::default")]
    pub data: Option<T>,

    /// Human-readable failure description
    #[serde(default)]
    pub details: Option<String>,
}

impl<T> SdkEnvelope<T> {
    /// Whether the backend reported success
    pub fn is_success(&self) -> bool {
        self.result == Some(RESULT_OK)
    }

    /// Failure text for a logical error, with a placeholder when absent
    pub fn failure_details(&self) -> String {
        match (&self.details, self.result) {
            (Some(details), _) if !details.trim().is_empty() => details.clone(),
            (_, Some(code)) => format!("result code {} (no details)", code),
            (_, None) => "missing result code (no details)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_with_null_data() {
        let env: SdkEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"Result": 0, "Data": null}"#).unwrap();
        assert!(env.is_success());
        assert!(env.data.is_none());
    }

    #[test]
    fn test_logical_failure_uses_details() {
        let env: SdkEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"Result": 3, "Details": "Organization not found"}"#)
                .unwrap();
        assert!(!env.is_success());
        assert_eq!(env.failure_details(), "Organization not found");
    }

    #[test]
    fn test_logical_failure_without_details() {
        let env: SdkEnvelope<Vec<u32>> = serde_json::from_str(r#"{"Result": 7}"#).unwrap();
        assert_eq!(env.failure_details(), "result code 7 (no details)");
    }

    #[test]
    fn test_missing_result_is_not_success() {
        let env: SdkEnvelope<Vec<u32>> = serde_json::from_str(r#"{"Data": [1]}"#).unwrap();
        assert!(!env.is_success());
    }
}

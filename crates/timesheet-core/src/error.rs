//! Service errors
//!
//! The server reports failures as `{status: "error", code, message, error,
//! errorActionMessage, detail: {field}}`. Transport problems on the client side
//! are folded into the same shape with their own codes.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Error codes the client reacts to. Anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    FetchFailed,
    InvalidContentType,
    InvalidJsonResponse,
    MissingToken,
    TokenExpired,
    InvalidToken,
    ProfileNotFound,
    ProfileLocked,
    ProfileInactive,
    IncorrectPassword,
    InvalidPassword,
    InvalidEmail,
    FieldSize,
    AccountExists,
    EmailExistsInAccount,
    Other(String),
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        match code {
            "FETCH_FAILED" => ErrorCode::FetchFailed,
            "INVALID_CONTENT_TYPE" => ErrorCode::InvalidContentType,
            "INVALID_JSON_RESPONSE" => ErrorCode::InvalidJsonResponse,
            "MissingToken" => ErrorCode::MissingToken,
            "TokenExpired" => ErrorCode::TokenExpired,
            "InvalidToken" => ErrorCode::InvalidToken,
            "ProfileNotFound" => ErrorCode::ProfileNotFound,
            "ProfileLocked" => ErrorCode::ProfileLocked,
            "ProfileInactive" => ErrorCode::ProfileInactive,
            "IncorrectPassword" => ErrorCode::IncorrectPassword,
            "InvalidPassword" => ErrorCode::InvalidPassword,
            "InvalidEmail" => ErrorCode::InvalidEmail,
            "FieldSize" => ErrorCode::FieldSize,
            "AccountExists" => ErrorCode::AccountExists,
            "EmailExistsInAccount" => ErrorCode::EmailExistsInAccount,
            other => ErrorCode::Other(other.to_string()),
        }
    }
}

impl ErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::FetchFailed => "FETCH_FAILED",
            ErrorCode::InvalidContentType => "INVALID_CONTENT_TYPE",
            ErrorCode::InvalidJsonResponse => "INVALID_JSON_RESPONSE",
            ErrorCode::MissingToken => "MissingToken",
            ErrorCode::TokenExpired => "TokenExpired",
            ErrorCode::InvalidToken => "InvalidToken",
            ErrorCode::ProfileNotFound => "ProfileNotFound",
            ErrorCode::ProfileLocked => "ProfileLocked",
            ErrorCode::ProfileInactive => "ProfileInactive",
            ErrorCode::IncorrectPassword => "IncorrectPassword",
            ErrorCode::InvalidPassword => "InvalidPassword",
            ErrorCode::InvalidEmail => "InvalidEmail",
            ErrorCode::FieldSize => "FieldSize",
            ErrorCode::AccountExists => "AccountExists",
            ErrorCode::EmailExistsInAccount => "EmailExistsInAccount",
            ErrorCode::Other(code) => code,
        }
    }

    /// Codes meaning the session is gone and the user must log in again
    pub fn is_session_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::MissingToken
                | ErrorCode::TokenExpired
                | ErrorCode::InvalidToken
                | ErrorCode::ProfileNotFound
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error body as the server sends it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
    pub error_action_message: Option<String>,
    pub detail: Option<ErrorDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    pub field: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{code} ({status}): {message}")]
pub struct ServiceError {
    pub code: ErrorCode,
    pub status: u16,
    pub message: String,
    /// Human readable error text shown in the server error modal
    pub error_message: Option<String>,
    pub error_action_message: Option<String>,
    /// Offending field for `FieldSize` and similar validation codes
    pub field: Option<String>,
}

impl ServiceError {
    pub fn new(code: ErrorCode, status: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            status,
            message: message.into(),
            error_message: None,
            error_action_message: None,
            field: None,
        }
    }

    pub fn fetch_failed(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        let mut err = Self::new(ErrorCode::FetchFailed, 500, reason.clone());
        err.error_message = Some(reason);
        err
    }

    pub fn invalid_content_type(content_type: &str) -> Self {
        Self::new(
            ErrorCode::InvalidContentType,
            500,
            format!("Invalid content type: {}", content_type),
        )
    }

    pub fn invalid_json(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        let mut err = Self::new(ErrorCode::InvalidJsonResponse, 500, reason.clone());
        err.error_message = Some(reason);
        err
    }

    /// Build from an error response body and its HTTP status
    pub fn from_body(body: ErrorBody, status: u16) -> Self {
        let code = body
            .code
            .as_deref()
            .map(ErrorCode::from)
            .unwrap_or_else(|| ErrorCode::Other(status.to_string()));
        Self {
            code,
            status,
            message: body.message.unwrap_or_default(),
            error_message: body.error,
            error_action_message: body.error_action_message,
            field: body.detail.and_then(|d| d.field),
        }
    }

    pub fn from_json(raw: &str, status: u16) -> Self {
        match serde_json::from_str::<ErrorBody>(raw) {
            Ok(body) => Self::from_body(body, status),
            Err(e) => Self::invalid_json(e.to_string()),
        }
    }

    pub fn is_session_error(&self) -> bool {
        self.code.is_session_error()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body() {
        let err = ServiceError::from_json(
            r#"{"status":"error","code":"FieldSize","message":"bad","error":"Too long","detail":{"field":"email"}}"#,
            400,
        );
        assert_eq!(err.code, ErrorCode::FieldSize);
        assert_eq!(err.status, 400);
        assert_eq!(err.field(), Some("email"));
        assert_eq!(err.error_message.as_deref(), Some("Too long"));
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let code = ErrorCode::from("SomethingNew");
        assert_eq!(code, ErrorCode::Other("SomethingNew".into()));
        assert_eq!(code.to_string(), "SomethingNew");
    }

    #[test]
    fn test_session_codes() {
        for code in ["MissingToken", "TokenExpired", "InvalidToken", "ProfileNotFound"] {
            assert!(ErrorCode::from(code).is_session_error(), "{}", code);
        }
        assert!(!ErrorCode::FieldSize.is_session_error());
        assert!(!ErrorCode::FetchFailed.is_session_error());
    }

    #[test]
    fn test_transport_errors() {
        assert_eq!(ServiceError::fetch_failed("offline").code, ErrorCode::FetchFailed);
        let err = ServiceError::invalid_content_type("text/html");
        assert_eq!(err.message, "Invalid content type: text/html");
        assert_eq!(ServiceError::from_json("<html>", 502).code, ErrorCode::InvalidJsonResponse);
    }

    #[test]
    fn test_missing_code_uses_status() {
        let err = ServiceError::from_json("{}", 404);
        assert_eq!(err.code, ErrorCode::Other("404".into()));
    }
}

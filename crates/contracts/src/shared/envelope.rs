//! Standard response envelope shared with the backend.
//!
//! Every API endpoint answers with `{ success, data?, message?, errors? }`.
//! `errors` maps a form-field name to the validation messages for that field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Validation errors keyed by form-field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

// No `default` on `data`: a missing `Option` field already deserializes to
// `None`, and a `default` attribute would put a `T: Default` bound on the
// generated `Deserialize` impl.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

/// Successful outcome of an API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiPayload<T> {
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiPayload<T> {
    /// Unwraps the payload body, failing when the endpoint answered
    /// `success:true` without a `data` field.
    pub fn require_data(self) -> Result<T, ApiError> {
        self.data
            .ok_or_else(|| ApiError::Transport("응답에 데이터가 없습니다.".to_string()))
    }
}

/// Normalized failure of an API call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Connectivity failure, timeout, or a body that is not a valid envelope.
    #[error("{0}")]
    Transport(String),
    /// The backend answered `success:false`.
    #[error("{message}")]
    Server {
        message: String,
        fields: Option<FieldErrors>,
    },
}

impl ApiError {
    pub fn server(message: impl Into<String>) -> Self {
        ApiError::Server {
            message: message.into(),
            fields: None,
        }
    }

    pub fn fields(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Server { fields, .. } => fields.as_ref(),
            ApiError::Transport(_) => None,
        }
    }

    /// Text shown to the user in a toast. Validation failures are flattened
    /// into a single string with all field messages.
    pub fn notification_text(&self) -> String {
        match self {
            ApiError::Transport(message) => message.clone(),
            ApiError::Server { message, fields } => {
                let joined = fields
                    .as_ref()
                    .map(|f| {
                        f.values()
                            .flatten()
                            .cloned()
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .unwrap_or_default();
                if joined.is_empty() {
                    message.clone()
                } else {
                    joined
                }
            }
        }
    }
}

impl<T> ApiEnvelope<T> {
    /// Collapses the envelope into the normalized result: `success:false`
    /// becomes an error carrying the backend message and any field map.
    pub fn into_result(self) -> Result<ApiPayload<T>, ApiError> {
        if self.success {
            Ok(ApiPayload {
                data: self.data,
                message: self.message,
            })
        } else {
            Err(ApiError::Server {
                message: self
                    .message
                    .unwrap_or_else(|| "요청을 처리하지 못했습니다.".to_string()),
                fields: self.errors,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_empty_list() {
        let envelope: ApiEnvelope<Vec<i64>> =
            serde_json::from_str(r#"{"success":true,"data":[]}"#).unwrap();
        let payload = envelope.into_result().unwrap();
        assert_eq!(payload.data, Some(vec![]));
        assert_eq!(payload.message, None);
    }

    #[test]
    fn failure_carries_backend_message() {
        let envelope: ApiEnvelope<Vec<i64>> =
            serde_json::from_str(r#"{"success":false,"message":"권한이 없습니다"}"#).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.to_string(), "권한이 없습니다");
        assert_eq!(err.notification_text(), "권한이 없습니다");
    }

    #[test]
    fn validation_errors_are_flattened() {
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(
            r#"{"success":false,"message":"입력값을 확인하세요","errors":{"name":["필수입니다"]}}"#,
        )
        .unwrap();
        let err = envelope.into_result().unwrap_err();
        assert!(err.notification_text().contains("필수입니다"));
        assert_eq!(
            err.fields().unwrap().get("name").unwrap(),
            &vec!["필수입니다".to_string()]
        );
    }

    #[test]
    fn failure_without_message_gets_a_default() {
        let envelope: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":false}"#).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.to_string(), "요청을 처리하지 못했습니다.");
    }

    #[test]
    fn envelope_decodes_payloads_without_a_default_impl() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Row {
            id: i64,
            name: String,
        }

        // Generic like the client-side decoder: only DeserializeOwned, no
        // Default bound available.
        fn decode<T: serde::de::DeserializeOwned>(body: &str) -> ApiEnvelope<T> {
            serde_json::from_str(body).unwrap()
        }

        let envelope: ApiEnvelope<Row> =
            decode(r#"{"success":true,"data":{"id":1,"name":"포터2"}}"#);
        assert_eq!(
            envelope.data,
            Some(Row {
                id: 1,
                name: "포터2".to_string()
            })
        );

        let empty: ApiEnvelope<Row> = decode(r#"{"success":true}"#);
        assert!(empty.data.is_none());
    }

    #[test]
    fn success_without_data_is_not_an_error_until_required() {
        let envelope: ApiEnvelope<Vec<i64>> =
            serde_json::from_str(r#"{"success":true,"message":"등록되었습니다"}"#).unwrap();
        let payload = envelope.into_result().unwrap();
        assert_eq!(payload.message.as_deref(), Some("등록되었습니다"));
        assert!(payload.clone().require_data().is_err());
    }
}

//! HTTP client wrapper for frontend-backend communication.
//!
//! Performs one round-trip and returns the normalized envelope result, or an
//! `ApiError` when the transport fails or the backend answers `success:false`.
//! Presentation (toasts, placeholders) stays with the caller; this layer never
//! touches the DOM and never retries.

use contracts::shared::envelope::{ApiEnvelope, ApiError, ApiPayload};
use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Marker header identifying the request as a same-origin AJAX call.
const AJAX_MARKER: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// Payload type for write endpoints whose `data` the caller does not use.
pub type NoData = serde_json::Value;

/// Origin of the current document, empty outside a browser context.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a root-relative path like `/holidays/3`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<ApiPayload<T>, ApiError> {
    let request = Request::get(&api_url(path))
        .header(AJAX_MARKER.0, AJAX_MARKER.1)
        .build()
        .map_err(build_error)?;
    dispatch(request).await
}

/// GET with query parameters serialized from `query` (empty fields skipped).
pub async fn get_with_query<T, Q>(path: &str, query: &Q) -> Result<ApiPayload<T>, ApiError>
where
    T: DeserializeOwned,
    Q: Serialize,
{
    let qs = serde_qs::to_string(query)
        .map_err(|e| ApiError::Transport(format!("요청을 만들지 못했습니다: {e}")))?;
    let full = if qs.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{qs}")
    };
    get(&full).await
}

pub async fn post<T, B>(path: &str, body: &B) -> Result<ApiPayload<T>, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let request = Request::post(&api_url(path))
        .header(AJAX_MARKER.0, AJAX_MARKER.1)
        .json(body)
        .map_err(build_error)?;
    dispatch(request).await
}

/// POST without a body, used by action endpoints like `/requests/{id}/approve`.
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<ApiPayload<T>, ApiError> {
    let request = Request::post(&api_url(path))
        .header(AJAX_MARKER.0, AJAX_MARKER.1)
        .build()
        .map_err(build_error)?;
    dispatch(request).await
}

pub async fn put<T, B>(path: &str, body: &B) -> Result<ApiPayload<T>, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let request = Request::put(&api_url(path))
        .header(AJAX_MARKER.0, AJAX_MARKER.1)
        .json(body)
        .map_err(build_error)?;
    dispatch(request).await
}

pub async fn delete<T: DeserializeOwned>(path: &str) -> Result<ApiPayload<T>, ApiError> {
    let request = Request::delete(&api_url(path))
        .header(AJAX_MARKER.0, AJAX_MARKER.1)
        .build()
        .map_err(build_error)?;
    dispatch(request).await
}

fn build_error(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(format!("요청을 만들지 못했습니다: {e}"))
}

async fn dispatch<T: DeserializeOwned>(request: Request) -> Result<ApiPayload<T>, ApiError> {
    let send = Box::pin(request.send());
    let timeout = Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS));

    let response = match select(send, timeout).await {
        Either::Left((result, _)) => result
            .map_err(|e| ApiError::Transport(format!("서버에 연결하지 못했습니다: {e}")))?,
        Either::Right(_) => return Err(ApiError::Transport("요청 시간 초과".to_string())),
    };

    read_envelope(response).await
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<ApiPayload<T>, ApiError> {
    let ok = response.ok();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(format!("응답을 읽지 못했습니다: {e}")))?;
    decode_envelope(ok, status, &body)
}

/// Decode a response body into the normalized result.
///
/// A non-2xx status may still carry a valid envelope (validation failures do);
/// the envelope message wins over the generic status text in that case.
fn decode_envelope<T: DeserializeOwned>(
    ok: bool,
    status: u16,
    body: &str,
) -> Result<ApiPayload<T>, ApiError> {
    match serde_json::from_str::<ApiEnvelope<T>>(body) {
        Ok(envelope) => envelope.into_result(),
        Err(_) if !ok => Err(status_error(status)),
        Err(e) => Err(ApiError::Transport(format!(
            "응답 형식이 올바르지 않습니다: {e}"
        ))),
    }
}

fn status_error(status: u16) -> ApiError {
    if status >= 500 {
        ApiError::Transport("서버 내부 오류".to_string())
    } else {
        ApiError::Transport(format!("서버 통신 오류: {status}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_failure_message_is_surfaced() {
        let err = decode_envelope::<Vec<i64>>(true, 200, r#"{"success":false,"message":"권한이 없습니다"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "권한이 없습니다");
    }

    #[test]
    fn envelope_on_error_status_beats_generic_text() {
        let err = decode_envelope::<NoData>(
            false,
            422,
            r#"{"success":false,"message":"입력값을 확인하세요","errors":{"name":["필수입니다"]}}"#,
        )
        .unwrap_err();
        assert!(err.notification_text().contains("필수입니다"));
    }

    #[test]
    fn non_json_body_on_error_status_maps_to_status_text() {
        let err = decode_envelope::<NoData>(false, 404, "<html>not found</html>").unwrap_err();
        assert_eq!(err.to_string(), "서버 통신 오류: 404");

        let err = decode_envelope::<NoData>(false, 503, "bad gateway").unwrap_err();
        assert_eq!(err.to_string(), "서버 내부 오류");
    }

    #[test]
    fn non_json_body_on_success_status_is_a_transport_error() {
        let err = decode_envelope::<NoData>(true, 200, "<html></html>").unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn success_payload_round_trips() {
        let payload =
            decode_envelope::<Vec<i64>>(true, 200, r#"{"success":true,"data":[1,2,3]}"#).unwrap();
        assert_eq!(payload.data, Some(vec![1, 2, 3]));
    }
}

// src/api/parser.rs
//! Turns raw HTTP results into payloads or typed errors.

use super::client::ApiResponse;
use super::responses::FigmaErrorBody;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, FigmaErrorCode};
use crate::types::Fetched;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse any Figma API response into an untyped JSON payload.
///
/// An empty success body is returned as `Value::Null`.
pub fn parse_json_payload(result: ApiResponse<String>) -> Result<Value, AppError> {
    if !result.status.is_success() {
        return Err(parse_error_response(&result));
    }
    if result.data.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&result.data).map_err(|e| malformed(&result, e))
}

/// Parse a `{ "meta": { "<field>": [...] } }` listing.
///
/// Returns `Fetched::Empty` when the body is empty or `null`, or when
/// `meta.<field>` is absent or `null`.
pub fn parse_meta_listing<T>(result: ApiResponse<String>, field: &str) -> Result<Fetched<T>, AppError>
where
    T: DeserializeOwned,
{
    let url = result.url.clone();
    let payload = parse_json_payload(result)?;

    let pointer = format!("/meta/{}", field);
    match payload.pointer(&pointer) {
        None | Some(Value::Null) => {
            log::debug!("No {} in response from {}", field, url);
            Ok(Fetched::Empty)
        }
        Some(_) => serde_json::from_value(payload).map(Fetched::Data).map_err(|e| {
            log::error!("Failed to parse {} from {}: {}", field, url, e);
            AppError::MalformedResponse(format!("{} listing from {}: {}", field, url, e))
        }),
    }
}

/// Builds the error for a non-2xx response from its body, falling back to the status.
fn parse_error_response(result: &ApiResponse<String>) -> AppError {
    let status = result.status.as_u16();
    let message = serde_json::from_str::<FigmaErrorBody>(&result.data)
        .ok()
        .and_then(|body| body.message().map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {} from {}", result.status, result.url));

    AppError::FigmaService {
        code: FigmaErrorCode::from_http_status(status),
        message,
        status,
    }
}

fn malformed(result: &ApiResponse<String>, e: serde_json::Error) -> AppError {
    log::error!("Failed to parse response from {}: {}", result.url, e);
    AppError::MalformedResponse(format!(
        "{} (body: {})",
        e,
        preview(&result.data, ERROR_BODY_PREVIEW_LENGTH)
    ))
}

fn preview(body: &str, limit: usize) -> String {
    if body.chars().count() > limit {
        let cut: String = body.chars().take(limit).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::responses::StylesResponse;
    use reqwest::StatusCode;

    fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status,
            url: "https://api.figma.com/v1/files/abc/styles".to_string(),
        }
    }

    #[test]
    fn test_listing_with_styles() {
        let body = r#"{"meta":{"styles":[{"node_id":"1:1","name":"Primary","style_type":"FILL"}]}}"#;
        let fetched: Fetched<StylesResponse> =
            parse_meta_listing(response(StatusCode::OK, body), "styles").unwrap();
        let styles = &fetched.as_data().unwrap().meta.styles;
        assert_eq!(styles.len(), 1);
        assert_eq!(styles[0].name.as_deref(), Some("Primary"));
    }

    #[test]
    fn test_zero_styles_is_data_not_empty() {
        let fetched: Fetched<StylesResponse> =
            parse_meta_listing(response(StatusCode::OK, r#"{"meta":{"styles":[]}}"#), "styles")
                .unwrap();
        assert_eq!(fetched, Fetched::Data(StylesResponse::default()));
    }

    #[test]
    fn test_absent_payload_is_empty() {
        for body in ["", "null", "{}", r#"{"meta":{}}"#, r#"{"meta":{"styles":null}}"#] {
            let fetched: Fetched<StylesResponse> =
                parse_meta_listing(response(StatusCode::OK, body), "styles").unwrap();
            assert!(fetched.is_empty(), "body {:?} should be empty", body);
        }
    }

    #[test]
    fn test_error_status_uses_figma_message() {
        let err = parse_json_payload(response(
            StatusCode::NOT_FOUND,
            r#"{"status":404,"err":"Not found"}"#,
        ))
        .unwrap_err();
        match err {
            AppError::FigmaService {
                code,
                message,
                status,
            } => {
                assert_eq!(code, FigmaErrorCode::NotFound);
                assert_eq!(message, "Not found");
                assert_eq!(status, 404);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_status_without_body() {
        let err = parse_json_payload(response(StatusCode::BAD_GATEWAY, "<html>")).unwrap_err();
        assert!(matches!(
            err,
            AppError::FigmaService {
                code: FigmaErrorCode::ServerError,
                status: 502,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_success_body() {
        let err = parse_json_payload(response(StatusCode::OK, "{not json")).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }
}

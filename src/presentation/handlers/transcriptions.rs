use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap};
use axum::Json;
use serde_json::Value;

use crate::application::services::{dispatch, validate_parameters, TranscriptionForm};
use crate::domain::UploadedFile;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

/// `POST /v1/transcriptions`: bearer auth, multipart extraction, parameter
/// validation, then concurrent per-file dispatch.
#[tracing::instrument(skip_all)]
pub async fn transcriptions_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, ApiError> {
    authenticate(&headers, &state.settings.api_key)?;

    let multipart = multipart
        .map_err(|e| ApiError::unprocessable(format!("Invalid multipart request: {e}"), ""))?;
    let form = parse_form(multipart).await?;

    tracing::debug!(files = form.files.len(), model = %form.model, "Transcription request accepted");

    let options = validate_parameters(&form)?;

    // One fresh engine instance per request, built only after validation.
    let engine = state.engine_factory.create(&options.model).await?;

    let response = dispatch(engine, form.files, options, state.settings.max_workers).await?;
    Ok(Json(response))
}

/// Exact-equality bearer token check. Wrong scheme, missing header and
/// mismatched key are indistinguishable to the client.
fn authenticate(headers: &HeaderMap, api_key: &str) -> Result<(), ApiError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    match token {
        Some(token) if token == api_key => Ok(()),
        _ => {
            tracing::warn!("Rejected request with missing or incorrect API key");
            Err(ApiError::unauthorized("Incorrect API key"))
        }
    }
}

async fn parse_form(mut multipart: Multipart) -> Result<TranscriptionForm, ApiError> {
    let mut form = TranscriptionForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::unprocessable(format!("Malformed multipart body: {e}"), ""))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let data = field.bytes().await.map_err(|e| {
                    ApiError::unprocessable(format!("Failed to read file: {e}"), "file")
                })?;
                form.files.push(UploadedFile { filename, data });
            }
            "model" => form.model = text_field(field, "model").await?,
            "language" => form.language = Some(text_field(field, "language").await?),
            "initial_prompt" => {
                form.initial_prompt = Some(text_field(field, "initial_prompt").await?);
            }
            "vad_filter" => {
                let raw = text_field(field, "vad_filter").await?;
                form.vad_filter = parse_bool(&raw).ok_or_else(|| {
                    ApiError::unprocessable(
                        "Input should be a valid boolean, unable to interpret input",
                        "vad_filter",
                    )
                })?;
            }
            "min_silence_duration_ms" => {
                let raw = text_field(field, "min_silence_duration_ms").await?;
                form.min_silence_duration_ms = raw.trim().parse::<i64>().map_err(|_| {
                    ApiError::unprocessable(
                        "Input should be a valid integer, unable to parse string as an integer",
                        "min_silence_duration_ms",
                    )
                })?;
            }
            "response_format" => form.response_format = text_field(field, "response_format").await?,
            "timestamp_granularities" => {
                form.timestamp_granularities = text_field(field, "timestamp_granularities").await?;
            }
            // Unknown fields are ignored, matching lenient form handling.
            _ => {}
        }
    }

    if form.files.is_empty() {
        return Err(ApiError::unprocessable("Field required", "file"));
    }

    Ok(form)
}

async fn text_field(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::unprocessable(format!("Failed to read field: {e}"), name.to_string()))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

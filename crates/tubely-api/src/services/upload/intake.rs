use super::StagedUpload;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::Multipart;
use axum::http::{header::CONTENT_LENGTH, HeaderMap, StatusCode};
use std::path::Path;
use tubely_core::{AppError, AssetKind, MediaLimits};

/// Normalize a media type by stripping parameters
/// (e.g. "image/png; charset=utf-8" -> "image/png").
pub fn normalize_media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_lowercase()
}

/// Validate a declared content type against the allow-list and return its
/// normalized form.
pub fn validate_content_type(
    content_type: Option<&str>,
    allowed_types: &[String],
) -> Result<String, AppError> {
    let declared = content_type.ok_or_else(|| {
        AppError::UnsupportedMediaType("Missing Content-Type for uploaded file".to_string())
    })?;
    let normalized = normalize_media_type(declared);

    if !allowed_types.iter().any(|ct| normalized == ct.to_lowercase()) {
        return Err(AppError::UnsupportedMediaType(format!(
            "Invalid file type {}. Allowed types: {}",
            normalized,
            allowed_types.join(", ")
        )));
    }

    Ok(normalized)
}

/// Reject a request whose declared `Content-Length` already exceeds the ceiling.
pub fn check_declared_length(headers: &HeaderMap, limits: &MediaLimits) -> Result<(), AppError> {
    let declared = headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    match declared {
        Some(len) if len > limits.max_file_size as u64 => Err(too_large(limits)),
        _ => Ok(()),
    }
}

fn too_large(limits: &MediaLimits) -> AppError {
    AppError::PayloadTooLarge(format!(
        "File size exceeds maximum allowed size of {} bytes",
        limits.max_file_size
    ))
}

/// A body-limit overrun surfaces as a multipart read error; keep it distinct
/// from malformed input.
fn multipart_error(err: MultipartError, limits: &MediaLimits) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        too_large(limits)
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", err.body_text()))
    }
}

pub fn multipart_rejection(rejection: MultipartRejection) -> AppError {
    AppError::InvalidInput(format!("Invalid multipart request: {}", rejection.body_text()))
}

/// Read the asset field fully into memory.
///
/// The bytes are read before the content type is checked so an oversized
/// body reports `PayloadTooLarge` whatever it claims to be.
pub async fn read_file_field(
    multipart: &mut Multipart,
    kind: AssetKind,
    limits: &MediaLimits,
) -> Result<(Vec<u8>, String), AppError> {
    let field_name = kind.form_field();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limits))?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(|e| multipart_error(e, limits))?;
        if data.len() > limits.max_file_size {
            return Err(too_large(limits));
        }

        let media_type =
            validate_content_type(content_type.as_deref(), &limits.allowed_content_types)?;

        return Ok((data.to_vec(), media_type));
    }

    Err(AppError::MissingField(format!(
        "Missing form field '{}'",
        field_name
    )))
}

/// Spool the asset field into a scratch file.
///
/// The content type is checked before anything touches disk, so a rejected
/// upload never creates a staging file.
pub async fn stage_file_field(
    multipart: &mut Multipart,
    kind: AssetKind,
    limits: &MediaLimits,
    temp_dir: Option<&Path>,
) -> Result<(StagedUpload, String), AppError> {
    let field_name = kind.form_field();

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limits))?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        let media_type =
            validate_content_type(field.content_type(), &limits.allowed_content_types)?;

        let mut staged = StagedUpload::create(temp_dir, kind.default_extension())?;
        while let Some(chunk) = field.chunk().await.map_err(|e| multipart_error(e, limits))? {
            if staged.size_bytes() + chunk.len() as u64 > limits.max_file_size as u64 {
                return Err(too_large(limits));
            }
            staged.write_chunk(&chunk).await?;
        }

        return Ok((staged, media_type));
    }

    Err(AppError::MissingField(format!(
        "Missing form field '{}'",
        field_name
    )))
}

use crate::domain::{
    file_extension, ResponseFormat, TimestampGranularity, TranscriptionOptions, UploadedFile,
    SUPPORTED_EXTENSIONS, SUPPORTED_LANGUAGES, SUPPORTED_MODELS,
};

/// The parsed multipart form, before validation. String-typed enum fields are
/// kept raw here; the validator is the single place that checks them against
/// the supported-value catalog.
#[derive(Debug)]
pub struct TranscriptionForm {
    pub files: Vec<UploadedFile>,
    pub model: String,
    pub language: Option<String>,
    pub initial_prompt: Option<String>,
    pub vad_filter: bool,
    pub min_silence_duration_ms: i64,
    pub response_format: String,
    pub timestamp_granularities: String,
}

impl Default for TranscriptionForm {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            model: "base".to_string(),
            language: None,
            initial_prompt: None,
            vad_filter: false,
            min_silence_duration_ms: 1000,
            response_format: "text".to_string(),
            timestamp_granularities: "segment".to_string(),
        }
    }
}

/// First invalid field found, with its public parameter name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub param: &'static str,
}

impl ValidationError {
    fn new(message: String, param: &'static str) -> Self {
        tracing::warn!(param, %message, "Request validation failed");
        Self { message, param }
    }
}

/// Checks every field against its allowed set, in a fixed order, reporting
/// only the first violation. Returns the validated options on success.
pub fn validate_parameters(form: &TranscriptionForm) -> Result<TranscriptionOptions, ValidationError> {
    for file in &form.files {
        let extension = file_extension(&file.filename);
        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ValidationError::new(
                format!(
                    "Invalid file extension. Supported extensions are: {}",
                    SUPPORTED_EXTENSIONS.join(", ")
                ),
                "file",
            ));
        }
    }

    if let Some(language) = &form.language {
        if !SUPPORTED_LANGUAGES.contains(&language.as_str()) {
            return Err(ValidationError::new(
                format!(
                    "Invalid language. Supported languages are: {}",
                    SUPPORTED_LANGUAGES.join(", ")
                ),
                "language",
            ));
        }
    }

    if !SUPPORTED_MODELS.contains(&form.model.as_str()) {
        return Err(ValidationError::new(
            format!(
                "Invalid model size. Supported models are: {}",
                SUPPORTED_MODELS.join(", ")
            ),
            "model",
        ));
    }

    let min_silence_duration_ms = u32::try_from(form.min_silence_duration_ms).map_err(|_| {
        ValidationError::new(
            "Invalid min_silence_duration_ms value. It should be a non-negative integer."
                .to_string(),
            "min_silence_duration_ms",
        )
    })?;

    let response_format = ResponseFormat::parse(&form.response_format).ok_or_else(|| {
        ValidationError::new(
            "Invalid response_format. Supported formats are: text, verbose_json".to_string(),
            "response_format",
        )
    })?;

    let granularity = TimestampGranularity::parse(&form.timestamp_granularities).ok_or_else(|| {
        ValidationError::new(
            "Invalid timestamp_granularities. Supported granularities are: segment, word"
                .to_string(),
            "timestamp_granularities",
        )
    })?;

    Ok(TranscriptionOptions {
        model: form.model.clone(),
        language: form.language.clone(),
        initial_prompt: form.initial_prompt.clone(),
        vad_filter: form.vad_filter,
        min_silence_duration_ms,
        response_format,
        word_timestamps: granularity == TimestampGranularity::Word,
    })
}

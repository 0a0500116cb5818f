use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{
    EngineOutput, EngineRequest, LanguageDetection, RawSegment, RawWord, TranscriptionEngine,
    TranscriptionError,
};

/// Remote inference adapter speaking the OpenAI-compatible
/// `/audio/transcriptions` protocol. Always requests `verbose_json` so the
/// segment structure survives the wire; the API reports no language
/// probability, so detection confidence is fixed at 1.0.
pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiWhisperEngine {
    pub fn new(api_key: String, base_url: Option<String>, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct VerboseResponse {
    language: String,
    #[serde(default)]
    segments: Vec<VerboseSegment>,
}

#[derive(Deserialize)]
struct VerboseSegment {
    text: String,
    start: f64,
    end: f64,
    #[serde(default)]
    words: Vec<VerboseWord>,
}

#[derive(Deserialize)]
struct VerboseWord {
    word: String,
    start: f64,
    end: f64,
}

fn mime_for(extension: &str) -> &'static str {
    match extension {
        "mp3" | "mpga" => "audio/mpeg",
        "mp4" | "m4a" => "audio/mp4",
        "mpeg" => "video/mpeg",
        "wav" => "audio/wav",
        "webm" => "audio/webm",
        "opus" | "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(
        &self,
        audio: &[u8],
        extension: &str,
        request: &EngineRequest,
    ) -> Result<EngineOutput, TranscriptionError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(audio.to_vec())
            .file_name(format!("audio.{extension}"))
            .mime_str(mime_for(extension))
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {e}")))?;

        let mut form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "verbose_json")
            .part("file", file_part);
        if let Some(language) = &request.language {
            form = form.text("language", language.clone());
        }
        if let Some(prompt) = &request.initial_prompt {
            form = form.text("prompt", prompt.clone());
        }
        if request.word_timestamps {
            form = form.text("timestamp_granularities[]", "word");
        }
        // The remote protocol exposes no VAD knobs; vad_filter and
        // min_silence_duration_ms only apply to the local engine.

        tracing::debug!(model = %self.model, bytes = audio.len(), "Sending audio to remote whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {status}: {body}"
            )));
        }

        let parsed: VerboseResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("body: {e}")))?;

        tracing::debug!(
            language = %parsed.language,
            segments = parsed.segments.len(),
            "Remote whisper transcription completed"
        );

        Ok(EngineOutput {
            detection: LanguageDetection {
                language: parsed.language,
                probability: 1.0,
            },
            segments: Box::new(parsed.segments.into_iter().map(|s| {
                Ok(RawSegment {
                    text: s.text,
                    start: s.start,
                    end: s.end,
                    words: s
                        .words
                        .into_iter()
                        .map(|w| RawWord {
                            word: w.word,
                            start: w.start,
                            end: w.end,
                        })
                        .collect(),
                })
            })),
        })
    }
}

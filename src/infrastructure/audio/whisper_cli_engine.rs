use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;

use crate::application::ports::{
    EngineOutput, EngineRequest, LanguageDetection, RawSegment, RawWord, TranscriptionEngine,
    TranscriptionError,
};

use super::Device;

/// Local inference adapter. Persists the audio to a uniquely named temporary
/// file, invokes the whisper bridge binary against it and parses the JSON it
/// prints to stdout. The temporary file is removed on every exit path when
/// the guard drops, and is never reused across calls.
pub struct WhisperCliEngine {
    binary: PathBuf,
    model: String,
    device: Device,
}

impl WhisperCliEngine {
    pub fn new(binary: PathBuf, model: &str, device: Device) -> Self {
        Self {
            binary,
            model: model.to_string(),
            device,
        }
    }
}

#[derive(Deserialize)]
struct BridgeOutput {
    language: String,
    language_probability: f64,
    segments: Vec<BridgeSegment>,
}

#[derive(Deserialize)]
struct BridgeSegment {
    text: String,
    start: f64,
    end: f64,
    #[serde(default)]
    words: Vec<BridgeWord>,
}

#[derive(Deserialize)]
struct BridgeWord {
    word: String,
    start: f64,
    end: f64,
}

impl From<BridgeSegment> for RawSegment {
    fn from(s: BridgeSegment) -> Self {
        Self {
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
        }
    }
}

#[async_trait]
impl TranscriptionEngine for WhisperCliEngine {
    async fn transcribe(
        &self,
        audio: &[u8],
        extension: &str,
        request: &EngineRequest,
    ) -> Result<EngineOutput, TranscriptionError> {
        let temp = tempfile::Builder::new()
            .prefix("sussurro-")
            .suffix(&format!(".{extension}"))
            .tempfile()?;
        tokio::fs::write(temp.path(), audio).await?;

        let mut cmd = Command::new(&self.binary);
        cmd.arg("--model")
            .arg(&self.model)
            .arg("--device")
            .arg(self.device.as_str())
            .arg("--compute-type")
            .arg(self.device.compute_type())
            .arg("--output-json");
        if let Some(language) = &request.language {
            cmd.arg("--language").arg(language);
        }
        if let Some(prompt) = &request.initial_prompt {
            cmd.arg("--initial-prompt").arg(prompt);
        }
        if request.word_timestamps {
            cmd.arg("--word-timestamps");
        }
        if request.vad_filter {
            cmd.arg("--vad-filter")
                .arg("--min-silence-duration-ms")
                .arg(request.min_silence_duration_ms.to_string());
        }
        cmd.arg(temp.path());

        tracing::debug!(
            model = %self.model,
            device = self.device.as_str(),
            bytes = audio.len(),
            "Invoking transcription bridge"
        );

        let output = cmd.output().await.map_err(|e| {
            TranscriptionError::TranscriptionFailed(format!(
                "failed to launch {}: {}",
                self.binary.display(),
                e
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TranscriptionError::TranscriptionFailed(format!(
                "bridge exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let parsed: BridgeOutput = serde_json::from_slice(&output.stdout)
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("bridge output: {e}")))?;

        tracing::debug!(
            language = %parsed.language,
            segments = parsed.segments.len(),
            "Bridge transcription finished"
        );

        Ok(EngineOutput {
            detection: LanguageDetection {
                language: parsed.language,
                probability: parsed.language_probability,
            },
            segments: Box::new(parsed.segments.into_iter().map(|s| Ok(s.into()))),
        })
    }
}

use std::sync::Arc;

use serde_json::{json, Value};
use tokio::sync::{mpsc, Semaphore};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{FileTranscript, ResponseFormat, TranscriptionOptions, UploadedFile};

use super::process_file;

/// Default bound on concurrently in-flight per-file transcriptions.
pub const DEFAULT_MAX_WORKERS: usize = 6;

/// Runs the per-file pipeline for every uploaded file under a bounded worker
/// pool and assembles the aggregated response.
///
/// All tasks are spawned up front; a semaphore sized `max_workers` limits how
/// many run at once. Results are consumed in completion order, so the
/// "File i" label names the i-th file to finish, not the i-th uploaded.
///
/// Fail-fast: the first task error aborts aggregation and already-collected
/// results are discarded. Outstanding tasks are detached, not cancelled; they
/// run to completion in the background and their results are dropped when the
/// channel receiver goes away.
pub async fn dispatch(
    engine: Arc<dyn TranscriptionEngine>,
    files: Vec<UploadedFile>,
    options: TranscriptionOptions,
    max_workers: usize,
) -> Result<Value, TranscriptionError> {
    let total = files.len();
    let semaphore = Arc::new(Semaphore::new(max_workers.max(1)));
    let (tx, mut rx) = mpsc::unbounded_channel();

    for file in files {
        let engine = Arc::clone(&engine);
        let options = options.clone();
        let semaphore = Arc::clone(&semaphore);
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = match semaphore.acquire_owned().await {
                Ok(_permit) => process_file(engine.as_ref(), &file, &options).await,
                Err(_) => Err(TranscriptionError::TranscriptionFailed(
                    "worker pool closed before task could start".to_string(),
                )),
            };
            // The receiver is gone once a fail-fast abort happened; the
            // result of a straggler is simply dropped.
            let _ = tx.send(result);
        });
    }
    drop(tx);

    let mut labeled = serde_json::Map::new();
    let mut sole = None;
    for index in 1..=total {
        match rx.recv().await {
            Some(Ok(transcript)) => {
                if total > 1 {
                    labeled.insert(
                        format!("File {index}"),
                        shape_value(transcript, options.response_format)?,
                    );
                } else {
                    sole = Some(transcript);
                }
            }
            Some(Err(e)) => {
                tracing::error!(error = %e, "An error occurred during transcription");
                return Err(e);
            }
            None => {
                return Err(TranscriptionError::TranscriptionFailed(
                    "worker pool terminated before all files completed".to_string(),
                ))
            }
        }
    }

    tracing::info!(files = total, "Transcription completed");

    match sole {
        Some(transcript) => match options.response_format {
            ResponseFormat::Text => Ok(json!({ "text": transcript.text })),
            ResponseFormat::VerboseJson => to_json(&transcript),
        },
        None => Ok(Value::Object(labeled)),
    }
}

fn shape_value(
    transcript: FileTranscript,
    format: ResponseFormat,
) -> Result<Value, TranscriptionError> {
    match format {
        ResponseFormat::Text => Ok(Value::String(transcript.text)),
        ResponseFormat::VerboseJson => to_json(&transcript),
    }
}

fn to_json(transcript: &FileTranscript) -> Result<Value, TranscriptionError> {
    serde_json::to_value(transcript)
        .map_err(|e| TranscriptionError::TranscriptionFailed(format!("result serialization: {e}")))
}

use sussurro::application::services::{validate_parameters, TranscriptionForm};
use sussurro::domain::{file_extension, ResponseFormat, UploadedFile};

fn form_with_files(names: &[&str]) -> TranscriptionForm {
    TranscriptionForm {
        files: names
            .iter()
            .map(|n| UploadedFile::new(n.to_string(), "audio"))
            .collect(),
        ..TranscriptionForm::default()
    }
}

#[test]
fn given_defaults_when_validating_then_returns_segment_granularity_text_options() {
    let form = form_with_files(&["speech.wav"]);

    let options = validate_parameters(&form).expect("defaults should validate");

    assert_eq!(options.model, "base");
    assert_eq!(options.response_format, ResponseFormat::Text);
    assert_eq!(options.min_silence_duration_ms, 1000);
    assert!(!options.word_timestamps);
    assert!(!options.vad_filter);
}

#[test]
fn given_word_granularity_when_validating_then_sets_word_timestamps() {
    let mut form = form_with_files(&["speech.wav"]);
    form.timestamp_granularities = "word".to_string();

    let options = validate_parameters(&form).expect("word granularity is supported");

    assert!(options.word_timestamps);
}

#[test]
fn given_unsupported_extension_when_validating_then_fails_with_file_param() {
    let form = form_with_files(&["notes.txt"]);

    let err = validate_parameters(&form).unwrap_err();

    assert_eq!(err.param, "file");
    assert!(err.message.contains("Invalid file extension"));
}

#[test]
fn given_uppercase_extension_when_validating_then_accepts_it() {
    let form = form_with_files(&["SPEECH.WAV"]);

    assert!(validate_parameters(&form).is_ok());
}

#[test]
fn given_one_bad_file_among_good_ones_when_validating_then_fails() {
    let form = form_with_files(&["a.mp3", "b.exe", "c.flac"]);

    assert_eq!(validate_parameters(&form).unwrap_err().param, "file");
}

#[test]
fn given_bad_extension_and_bad_model_when_validating_then_reports_extension_first() {
    let mut form = form_with_files(&["notes.txt"]);
    form.model = "gigantic".to_string();

    let err = validate_parameters(&form).unwrap_err();

    assert_eq!(err.param, "file");
}

#[test]
fn given_unsupported_language_when_validating_then_fails_with_language_param() {
    let mut form = form_with_files(&["speech.wav"]);
    form.language = Some("xx".to_string());

    let err = validate_parameters(&form).unwrap_err();

    assert_eq!(err.param, "language");
    assert!(err.message.contains("Invalid language"));
}

#[test]
fn given_no_language_when_validating_then_language_check_is_skipped() {
    let form = form_with_files(&["speech.wav"]);

    let options = validate_parameters(&form).expect("absent language means auto-detect");

    assert_eq!(options.language, None);
}

#[test]
fn given_unsupported_model_when_validating_then_fails_with_model_param() {
    let mut form = form_with_files(&["speech.wav"]);
    form.model = "huge".to_string();

    let err = validate_parameters(&form).unwrap_err();

    assert_eq!(err.param, "model");
}

#[test]
fn given_distilled_model_when_validating_then_accepts_it() {
    let mut form = form_with_files(&["speech.wav"]);
    form.model = "distil-large-v3".to_string();

    assert!(validate_parameters(&form).is_ok());
}

#[test]
fn given_negative_min_silence_when_validating_then_fails_even_with_valid_fields() {
    let mut form = form_with_files(&["speech.wav"]);
    form.min_silence_duration_ms = -1;

    let err = validate_parameters(&form).unwrap_err();

    assert_eq!(err.param, "min_silence_duration_ms");
}

#[test]
fn given_legacy_json_format_when_validating_then_rejects_it() {
    let mut form = form_with_files(&["speech.wav"]);
    form.response_format = "json".to_string();

    let err = validate_parameters(&form).unwrap_err();

    assert_eq!(err.param, "response_format");
}

#[test]
fn given_verbose_json_format_when_validating_then_accepts_it() {
    let mut form = form_with_files(&["speech.wav"]);
    form.response_format = "verbose_json".to_string();

    let options = validate_parameters(&form).unwrap();

    assert_eq!(options.response_format, ResponseFormat::VerboseJson);
}

#[test]
fn given_unknown_granularity_when_validating_then_fails_with_granularity_param() {
    let mut form = form_with_files(&["speech.wav"]);
    form.timestamp_granularities = "character".to_string();

    let err = validate_parameters(&form).unwrap_err();

    assert_eq!(err.param, "timestamp_granularities");
}

#[test]
fn given_filename_with_many_dots_when_deriving_extension_then_uses_last_segment() {
    assert_eq!(file_extension("archive.tar.mp3"), "mp3");
}

#[test]
fn given_filename_without_dot_when_deriving_extension_then_returns_empty() {
    assert_eq!(file_extension("audio"), "");
}

use sussurro::application::ports::{
    EngineOutput, LanguageDetection, RawSegment, RawWord, TranscriptionError,
};
use sussurro::application::services::shape_transcript;

fn fixture_segments() -> Vec<Result<RawSegment, TranscriptionError>> {
    vec![
        Ok(RawSegment {
            text: "Hello".to_string(),
            start: 0.0,
            end: 0.5,
            words: vec![RawWord {
                word: "Hello".to_string(),
                start: 0.0,
                end: 0.5,
            }],
        }),
        Ok(RawSegment {
            text: "world.".to_string(),
            start: 0.5,
            end: 1.0,
            words: vec![RawWord {
                word: "world.".to_string(),
                start: 0.5,
                end: 1.0,
            }],
        }),
    ]
}

fn output(segments: Vec<Result<RawSegment, TranscriptionError>>) -> EngineOutput {
    EngineOutput {
        segments: Box::new(segments.into_iter()),
        detection: LanguageDetection {
            language: "en".to_string(),
            probability: 0.93,
        },
    }
}

#[test]
fn given_fixture_without_word_granularity_then_joins_text_and_omits_words() {
    let transcript = shape_transcript("fixture.wav", output(fixture_segments()), false).unwrap();

    assert_eq!(transcript.text, "Hello world.");
    assert_eq!(transcript.segments.len(), 2);
    assert!(transcript.segments.iter().all(|s| s.words.is_none()));

    // The words field must be absent from the serialized shape, not null or [].
    let json = serde_json::to_value(&transcript).unwrap();
    assert!(json["segments"][0].get("words").is_none());
}

#[test]
fn given_fixture_with_word_granularity_then_each_segment_carries_its_words() {
    let transcript = shape_transcript("fixture.wav", output(fixture_segments()), true).unwrap();

    let words: Vec<_> = transcript
        .segments
        .iter()
        .map(|s| s.words.as_ref().expect("words requested"))
        .collect();
    assert_eq!(words[0][0].word, "Hello");
    assert_eq!(words[0][0].start, 0.0);
    assert_eq!(words[0][0].end, 0.5);
    assert_eq!(words[1][0].word, "world.");
    assert_eq!(words[1][0].start, 0.5);
    assert_eq!(words[1][0].end, 1.0);
}

#[test]
fn given_untrimmed_engine_text_when_shaping_then_trims_every_field() {
    let segments = vec![Ok(RawSegment {
        text: "  padded text \n".to_string(),
        start: 0.0,
        end: 1.0,
        words: vec![RawWord {
            word: " padded ".to_string(),
            start: 0.0,
            end: 0.4,
        }],
    })];

    let transcript = shape_transcript("pad.wav", output(segments), true).unwrap();

    assert_eq!(transcript.text, "padded text");
    assert_eq!(transcript.segments[0].text, "padded text");
    assert_eq!(
        transcript.segments[0].words.as_ref().unwrap()[0].word,
        "padded"
    );
}

#[test]
fn given_empty_segment_sequence_when_shaping_then_text_is_empty() {
    let transcript = shape_transcript("silence.wav", output(Vec::new()), false).unwrap();

    assert_eq!(transcript.text, "");
    assert!(transcript.segments.is_empty());
}

#[test]
fn given_language_detection_when_shaping_then_metadata_is_carried_through() {
    let transcript = shape_transcript("fixture.wav", output(fixture_segments()), false).unwrap();

    assert_eq!(transcript.filename, "fixture.wav");
    assert_eq!(transcript.detected_language, "en");
    assert!((transcript.language_probability - 0.93).abs() < f64::EPSILON);
}

#[test]
fn given_failing_segment_stream_when_shaping_then_error_propagates() {
    let segments = vec![
        Ok(RawSegment {
            text: "ok".to_string(),
            start: 0.0,
            end: 0.5,
            words: Vec::new(),
        }),
        Err(TranscriptionError::TranscriptionFailed(
            "decoder gave up".to_string(),
        )),
    ];

    let err = shape_transcript("broken.wav", output(segments), false).unwrap_err();

    assert!(err.to_string().contains("decoder gave up"));
}

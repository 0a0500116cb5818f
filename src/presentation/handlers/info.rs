use axum::extract::State;
use axum::response::{Html, Redirect};

use crate::presentation::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn root_handler() -> Redirect {
    Redirect::to("/docs")
}

pub async fn info_handler(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        r#"<h1>sussurro is running on <span style="color: blue;">{device}</span>!</h1>
<p>Version: <strong>{VERSION}</strong></p>
<p>See <a href="/docs">/docs</a> for the API reference.</p>"#,
        device = state.device.as_str(),
    ))
}

pub async fn docs_handler() -> Html<&'static str> {
    Html(
        r#"<h1>sussurro API</h1>
<h2>POST /v1/transcriptions</h2>
<p>Transcribes one or more uploaded audio files. Requires an
<code>Authorization: Bearer &lt;token&gt;</code> header.</p>
<p>Multipart form fields:</p>
<ul>
    <li><code>file</code>: one or more audio files to transcribe. Required.
        Supported extensions: mp3, mp4, mpeg, mpga, m4a, wav, webm, opus, flac, ogg.</li>
    <li><code>model</code>: model size to use. Optional, default <code>base</code>.</li>
    <li><code>language</code>: lowercase ISO-639-1 code of the audio language.
        Optional; auto-detected when omitted.</li>
    <li><code>initial_prompt</code>: free text guiding the transcription
        (spelling hints, context). Optional.</li>
    <li><code>vad_filter</code>: apply a voice activity detection filter.
        Optional, default <code>false</code>.</li>
    <li><code>min_silence_duration_ms</code>: minimum silence treated as a pause.
        Optional, default <code>1000</code>.</li>
    <li><code>response_format</code>: <code>text</code> or <code>verbose_json</code>.
        Optional, default <code>text</code>.</li>
    <li><code>timestamp_granularities</code>: <code>segment</code> or <code>word</code>.
        Optional, default <code>segment</code>.</li>
</ul>
<h2>GET /info</h2>
<p>Status page with the active inference device.</p>
<h2>GET /</h2>
<p>Redirects here.</p>
<h3>Example</h3>
<pre>curl -X POST "http://localhost:8000/v1/transcriptions" \
    -H "Authorization: Bearer $API_KEY" \
    -F "file=@audio1.wav;type=audio/wav" \
    -F "file=@audio2.wav;type=audio/wav" \
    -F "model=base" \
    -F "response_format=verbose_json" \
    -F "timestamp_granularities=word"</pre>"#,
    )
}

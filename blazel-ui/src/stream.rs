//! Streaming client for draft generation
//!
//! `GET /generate/stream` delivers one JSON event per `data: `-prefixed
//! line. The decoder here is plain byte-in/event-out so it can be tested
//! without a browser; the fetch plumbing around it lives in
//! [`start_generate_stream`].

use shared_types::{StreamEvent, StreamedDraft};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::api::api_base;
use crate::auth::stored_token;

const DATA_PREFIX: &str = "data: ";

/// Incremental line-delimited SSE decoder.
///
/// Accepts raw byte chunks as they arrive, buffering both partial lines
/// and partial UTF-8 sequences across pushes. Lines that carry the data
/// prefix but fail to parse are skipped and counted rather than aborting
/// the stream.
#[derive(Debug, Default)]
pub struct EventStreamDecoder {
    pending: Vec<u8>,
    line: String,
    dropped_lines: u64,
}

impl EventStreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk of bytes; returns the events completed by it.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<StreamEvent> {
        self.pending.extend_from_slice(chunk);

        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(text) => {
                    self.line.push_str(text);
                    self.pending.clear();
                    break;
                }
                Err(err) => {
                    let valid = err.valid_up_to();
                    if let Ok(text) = std::str::from_utf8(&self.pending[..valid]) {
                        self.line.push_str(text);
                    }
                    match err.error_len() {
                        // Garbage bytes: decode as a replacement character,
                        // matching lossy text decoding
                        Some(len) => {
                            self.pending.drain(..valid + len);
                            self.line.push(char::REPLACEMENT_CHARACTER);
                        }
                        // Multi-byte character split across chunks: keep the
                        // tail for the next push
                        None => {
                            self.pending.drain(..valid);
                            break;
                        }
                    }
                }
            }
        }

        let mut events = Vec::new();
        self.drain_lines(&mut events);
        events
    }

    /// Data-prefixed lines that failed to parse so far
    pub fn dropped_lines(&self) -> u64 {
        self.dropped_lines
    }

    fn drain_lines(&mut self, events: &mut Vec<StreamEvent>) {
        while let Some(newline) = self.line.find('\n') {
            let mut line: String = self.line.drain(..=newline).collect();
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }

            // Blank separators, comments, and other SSE fields carry no payload
            let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
                continue;
            };

            match serde_json::from_str::<StreamEvent>(payload) {
                Ok(event) => events.push(event),
                Err(_) => self.dropped_lines += 1,
            }
        }
    }
}

/// Cancellation handle for an in-flight generation stream.
///
/// Aborting is a normal termination: neither the error nor the done
/// callback fires for it.
#[derive(Clone)]
pub struct StreamHandle {
    controller: web_sys::AbortController,
}

impl StreamHandle {
    pub fn abort(&self) {
        self.controller.abort();
    }
}

/// Open the generation stream and dispatch its events to the callbacks.
///
/// Returns immediately with the cancellation handle; the reader runs as a
/// detached task until the stream ends or the handle aborts it.
pub fn start_generate_stream(
    topic: &str,
    context: Option<&str>,
    variations: u32,
    customer_id: Option<&str>,
    on_draft: impl FnMut(StreamedDraft) + 'static,
    on_error: impl FnMut(String) + 'static,
    on_done: impl FnMut() + 'static,
) -> Result<StreamHandle, String> {
    let controller = web_sys::AbortController::new()
        .map_err(|_| "AbortController unavailable".to_string())?;

    let mut url = format!(
        "{}/generate/stream?topic={}&variations={}",
        api_base(),
        encode_query(topic),
        variations
    );
    if let Some(context) = context.filter(|c| !c.trim().is_empty()) {
        url.push_str("&context=");
        url.push_str(&encode_query(context));
    }
    if let Some(customer_id) = customer_id {
        url.push_str("&customer_id=");
        url.push_str(&encode_query(customer_id));
    }

    let headers =
        web_sys::Headers::new().map_err(|_| "Failed to build request headers".to_string())?;
    let _ = headers.append("Accept", "text/event-stream");
    if let Some(token) = stored_token() {
        let _ = headers.append("Authorization", &format!("Bearer {token}"));
    }

    let init = web_sys::RequestInit::new();
    init.set_method("GET");
    init.set_headers(headers.as_ref());
    init.set_signal(Some(&controller.signal()));

    let request = web_sys::Request::new_with_str_and_init(&url, &init)
        .map_err(|_| "Failed to build stream request".to_string())?;

    wasm_bindgen_futures::spawn_local(run_stream(
        request,
        Box::new(on_draft),
        Box::new(on_error),
        Box::new(on_done),
    ));

    Ok(StreamHandle { controller })
}

async fn run_stream(
    request: web_sys::Request,
    mut on_draft: Box<dyn FnMut(StreamedDraft)>,
    mut on_error: Box<dyn FnMut(String)>,
    mut on_done: Box<dyn FnMut()>,
) {
    if let Err(err) = drive_stream(request, &mut on_draft, &mut on_error, &mut on_done).await {
        if !is_abort_error(&err) {
            on_error(js_error_message(&err));
        }
    }
}

async fn drive_stream(
    request: web_sys::Request,
    on_draft: &mut dyn FnMut(StreamedDraft),
    on_error: &mut dyn FnMut(String),
    on_done: &mut dyn FnMut(),
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    if !response.ok() {
        on_error(stream_http_error(&response).await);
        return Ok(());
    }

    let Some(body) = response.body() else {
        on_error("No response body".to_string());
        return Ok(());
    };

    let reader: web_sys::ReadableStreamDefaultReader = body.get_reader().dyn_into()?;
    let mut decoder = EventStreamDecoder::new();
    let mut reported_drops = 0;
    let mut done_signalled = false;

    loop {
        let chunk = JsFuture::from(reader.read()).await?;
        let finished = js_sys::Reflect::get(&chunk, &JsValue::from_str("done"))?
            .as_bool()
            .unwrap_or(true);
        if finished {
            break;
        }

        let value = js_sys::Reflect::get(&chunk, &JsValue::from_str("value"))?;
        let bytes = js_sys::Uint8Array::new(&value).to_vec();

        for event in decoder.push(&bytes) {
            match event {
                StreamEvent::Draft(draft) => on_draft(draft),
                StreamEvent::Error { error } => {
                    on_error(error.unwrap_or_else(|| "Unknown error".to_string()));
                }
                StreamEvent::Done => {
                    if !done_signalled {
                        done_signalled = true;
                        on_done();
                    }
                }
            }
        }

        if decoder.dropped_lines() > reported_drops {
            reported_drops = decoder.dropped_lines();
            log::warn!("Skipped {} malformed generation stream line(s)", reported_drops);
        }
    }

    if !done_signalled {
        on_done();
    }

    Ok(())
}

async fn stream_http_error(response: &web_sys::Response) -> String {
    let Ok(promise) = response.json() else {
        return "Stream failed".to_string();
    };
    match JsFuture::from(promise).await {
        Ok(body) => js_sys::Reflect::get(&body, &JsValue::from_str("detail"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| "Generation failed".to_string()),
        Err(_) => "Stream failed".to_string(),
    }
}

fn is_abort_error(err: &JsValue) -> bool {
    js_sys::Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string())
        .is_some_and(|name| name == "AbortError")
}

fn js_error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| "Stream error".to_string())
}

fn encode_query(value: &str) -> String {
    js_sys::encode_uri_component(value)
        .as_string()
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_line(id: &str, text: &str) -> String {
        format!("data: {{\"event\":\"draft\",\"draft_id\":\"{id}\",\"text\":\"{text}\"}}\n")
    }

    #[test]
    fn complete_line_yields_one_event() {
        let mut decoder = EventStreamDecoder::new();
        let events = decoder.push(draft_line("d1", "Hello").as_bytes());
        assert_eq!(events.len(), 1);
        match &events[0] {
            StreamEvent::Draft(draft) => {
                assert_eq!(draft.draft_id, "d1");
                assert_eq!(draft.text, "Hello");
            }
            other => panic!("expected draft event, got {other:?}"),
        }
        assert_eq!(decoder.dropped_lines(), 0);
    }

    #[test]
    fn partial_line_buffers_until_newline() {
        let mut decoder = EventStreamDecoder::new();
        let line = draft_line("d1", "Hello");
        let (head, tail) = line.split_at(line.len() / 2);

        assert!(decoder.push(head.as_bytes()).is_empty());
        let events = decoder.push(tail.as_bytes());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn split_multibyte_character_decodes_once_complete() {
        let mut decoder = EventStreamDecoder::new();
        let line = draft_line("d1", "café ☕");
        let bytes = line.as_bytes();
        // Split inside the multi-byte coffee cup character
        let cut = line.find('☕').unwrap() + 1;

        assert!(decoder.push(&bytes[..cut]).is_empty());
        let events = decoder.push(&bytes[cut..]);
        assert_eq!(events.len(), 1);
        match &events[0] {
            StreamEvent::Draft(draft) => assert_eq!(draft.text, "café ☕"),
            other => panic!("expected draft event, got {other:?}"),
        }
    }

    #[test]
    fn malformed_data_line_is_skipped_and_counted() {
        let mut decoder = EventStreamDecoder::new();
        let mut input = String::from("data: {not json}\n");
        input.push_str(&draft_line("d2", "Still fine"));

        let events = decoder.push(input.as_bytes());
        assert_eq!(events.len(), 1);
        assert_eq!(decoder.dropped_lines(), 1);
    }

    #[test]
    fn non_data_lines_are_ignored_without_counting() {
        let mut decoder = EventStreamDecoder::new();
        let input = ": keep-alive\nevent: noise\n\ndata: {\"event\":\"done\"}\n";

        let events = decoder.push(input.as_bytes());
        assert_eq!(events, vec![StreamEvent::Done]);
        assert_eq!(decoder.dropped_lines(), 0);
    }

    #[test]
    fn error_and_done_events_parse() {
        let mut decoder = EventStreamDecoder::new();
        let input = "data: {\"event\":\"error\",\"error\":\"out of capacity\"}\ndata: {\"event\":\"done\"}\n";

        let events = decoder.push(input.as_bytes());
        assert_eq!(
            events,
            vec![
                StreamEvent::Error {
                    error: Some("out of capacity".to_string())
                },
                StreamEvent::Done,
            ]
        );
    }

    #[test]
    fn crlf_line_endings_are_tolerated() {
        let mut decoder = EventStreamDecoder::new();
        let events = decoder.push(b"data: {\"event\":\"done\"}\r\n");
        assert_eq!(events, vec![StreamEvent::Done]);
    }

    #[test]
    fn events_split_across_many_chunks_arrive_in_order() {
        let mut decoder = EventStreamDecoder::new();
        let mut input = draft_line("d1", "first");
        input.push_str(&draft_line("d2", "second"));

        let mut collected = Vec::new();
        for byte in input.as_bytes() {
            collected.extend(decoder.push(std::slice::from_ref(byte)));
        }

        let ids: Vec<_> = collected
            .iter()
            .map(|e| match e {
                StreamEvent::Draft(d) => d.draft_id.as_str(),
                other => panic!("expected draft events, got {other:?}"),
            })
            .collect();
        assert_eq!(ids, vec!["d1", "d2"]);
    }

    #[test]
    fn invalid_bytes_become_replacement_characters() {
        let mut decoder = EventStreamDecoder::new();
        // 0xFF can never begin a UTF-8 sequence; the line it corrupts
        // fails to parse and is counted as dropped
        let mut input = b"data: {\"event\":\"d".to_vec();
        input.push(0xFF);
        input.extend_from_slice(b"one\"}\n");
        input.extend_from_slice(draft_line("d1", "ok").as_bytes());

        let events = decoder.push(&input);
        assert_eq!(events.len(), 1);
        assert_eq!(decoder.dropped_lines(), 1);
    }
}

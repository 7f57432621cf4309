//! Mock chat-completion endpoint for CLI runs.

use mockito::{Mock, Server};

/// Answer every completion request with `content`.
pub(crate) fn answering(server: &mut Server, content: &str, expected_calls: usize) -> Mock {
    let body = serde_json::json!({ "choices": [{ "message": { "content": content } }] });
    server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(expected_calls)
        .create()
}

/// Answer every completion request with `status`.
pub(crate) fn failing(server: &mut Server, status: usize) -> Mock {
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(status)
        .with_body(r#"{"error":{"message":"The server had an error"}}"#)
        .create()
}

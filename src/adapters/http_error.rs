//! Error body handling shared by the HTTP adapters.

use reqwest::StatusCode;

/// Best human-readable message for a failed response.
///
/// Prefers `{"error": {"message": ...}}` or `{"message": ...}` bodies, then the raw
/// body, then a description of the status class.
pub(crate) fn failure_message(status: StatusCode, body: &str, default_message: &str) -> String {
    extract_error_message(body).unwrap_or_else(|| {
        if !body.trim().is_empty() {
            body.trim().to_string()
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            "Unauthorized".to_string()
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            "Rate limited".to_string()
        } else if status.is_server_error() {
            "Server error".to_string()
        } else {
            default_message.to_string()
        }
    })
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

//! Best-effort decoding of free-text model output.
//!
//! The model is asked for bare JSON but regularly wraps it in markdown fences
//! or surrounds it with prose. Cleanup removes the fences, then keeps the
//! span from the first `{` to the last `}`. The match is greedy, not balanced:
//! stray braces in prose before the real object end up in the extracted span
//! and make the decode fail.

use crate::error::{AireError, Result};
use crate::models::AssistantReply;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

fn object_span() -> &'static Regex {
    static SPAN: OnceLock<Regex> = OnceLock::new();
    // Constant pattern, compiled once; it cannot fail at runtime
    SPAN.get_or_init(|| Regex::new(r"\{[\s\S]*\}").expect("valid object-span regex"))
}

/// Strip fences and surrounding prose, returning the text to decode
pub fn extract_json(raw: &str) -> String {
    let unfenced = raw.replace("```json", "").replace("```", "");
    let trimmed = unfenced.trim();

    match object_span().find(trimmed) {
        Some(span) => span.as_str().to_string(),
        None => trimmed.to_string(),
    }
}

/// Decode raw completion text into a reply
pub fn normalize(raw: &str) -> Result<AssistantReply> {
    let candidate = extract_json(raw);
    let reply: AssistantReply =
        serde_json::from_str(&candidate).map_err(AireError::MalformedReply)?;

    debug!("Decoded reply with {} properties", reply.properties.len());
    Ok(reply)
}

/// Message shown in the chat when the reply could not be decoded
pub fn diagnostic(error: &AireError) -> String {
    format!(
        "I apologize, but I encountered an error processing the response. \n\nError: {}\n\nPlease try rephrasing your question or ask about specific property features like location, price range, or number of bedrooms.",
        error
    )
}

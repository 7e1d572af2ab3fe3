//! Code extraction from model responses
//!
//! The model is asked for bare code but often wraps its answer in a fenced
//! markdown block anyway. Extraction prefers the interior of the first fence
//! and falls back to the whole trimmed text.

/// Fence delimiter used by markdown code blocks
const FENCE: &str = "```";

/// Language tag the model tends to annotate its fences with
const FENCE_LANG_TAG: &str = "python";

/// Extract the code payload from a model's free-form answer
///
/// Returns the trimmed interior of the first triple-backtick fenced block if
/// it is non-empty, otherwise the whole text trimmed of leading/trailing
/// whitespace. A `python` tag immediately after the opening fence is skipped.
/// Any fenced blocks after the first are ignored.
pub fn extract_code(response_text: &str) -> String {
    if let Some(interior) = first_fenced_block(response_text) {
        let trimmed = interior.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    response_text.trim().to_string()
}

/// Slice out the interior of the first fenced block, if any
///
/// Explicit two-step scan: find the opening fence, skip the optional language
/// tag, then find the next closing fence. An unterminated fence counts as no
/// fence at all.
fn first_fenced_block(text: &str) -> Option<&str> {
    let open = text.find(FENCE)? + FENCE.len();
    let rest = &text[open..];
    let rest = rest.strip_prefix(FENCE_LANG_TAG).unwrap_or(rest);
    let close = rest.find(FENCE)?;
    Some(&rest[..close])
}

//! Decoding raw model replies into [`RawAnalysis`].
//!
//! Models asked for JSON frequently wrap it in a markdown code fence, or
//! ignore the instruction and answer in header + bullet text. Both are
//! accepted here; the choice between them is made once, per reply.

use serde_json::Value;
use tracing::{debug, warn};

use crate::analysis::AnalysisResult;
use crate::normalize::{RawAnalysis, normalize};

const FENCE: &str = "```";

/// Remove a surrounding markdown code fence, if present.
///
/// The opening line (```` ``` ```` or ```` ```json ````) is dropped, as is a
/// following line consisting only of `json`. Everything from the last
/// closing fence onward is dropped; an unclosed fence keeps the rest of
/// the reply.
pub fn strip_code_fence(reply: &str) -> &str {
    let reply = reply.trim();
    if !reply.starts_with(FENCE) {
        return reply;
    }

    let mut body = match reply.split_once('\n') {
        Some((_, rest)) => rest,
        None => return "",
    };

    if let Some((first, rest)) = body.split_once('\n')
        && first.trim().eq_ignore_ascii_case("json")
    {
        body = rest;
    }

    // The closing fence is the last line that is a bare fence once trimmed.
    let mut end = body.len();
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        if line.trim() == FENCE {
            end = offset;
        }
        offset += line.len();
    }

    body[..end].trim()
}

/// Classify a model reply as structured JSON or delimited text.
///
/// Only a JSON *object* counts as structured; any other JSON value, or text
/// that fails to parse, is handed to the text path.
pub fn decode_response(reply: &str) -> RawAnalysis {
    let body = strip_code_fence(reply);

    match serde_json::from_str::<Value>(body) {
        Ok(value @ Value::Object(_)) => {
            debug!(chars = body.len(), "decoded structured reply");
            RawAnalysis::Structured(value)
        }
        Ok(_) => {
            debug!("reply is JSON but not an object, treating as text");
            RawAnalysis::Text(body.to_string())
        }
        Err(e) => {
            if body.starts_with('{') {
                warn!(error = %e, "reply looks like JSON but failed to parse, treating as text");
            } else {
                debug!("decoded text reply");
            }
            RawAnalysis::Text(body.to_string())
        }
    }
}

/// Decode and normalise a model reply in one step.
pub fn normalize_response(reply: &str) -> AnalysisResult {
    normalize(&decode_response(reply))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unfenced_reply_untouched() {
        assert_eq!(strip_code_fence("  {\"a\": 1}  "), "{\"a\": 1}");
        assert_eq!(strip_code_fence("Summary:\nText"), "Summary:\nText");
    }

    #[test]
    fn strips_json_fence() {
        let reply = "```json\n{\"summary\": \"S\"}\n```";
        assert_eq!(strip_code_fence(reply), "{\"summary\": \"S\"}");
    }

    #[test]
    fn strips_bare_fence_and_separate_language_line() {
        let reply = "```\njson\n{\"summary\": \"S\"}\n```\n";
        assert_eq!(strip_code_fence(reply), "{\"summary\": \"S\"}");
    }

    #[test]
    fn trailing_prose_after_fence_dropped() {
        let reply = "```json\n{\"risks\": []}\n```\nLet me know if you need more.";
        assert_eq!(strip_code_fence(reply), "{\"risks\": []}");
    }

    #[test]
    fn closing_fence_may_be_indented() {
        let reply = "```json\n{\"summary\": \"S\"}\n  ```";
        assert_eq!(strip_code_fence(reply), "{\"summary\": \"S\"}");
        assert_eq!(normalize_response(reply).summary, "S");
    }

    #[test]
    fn fence_mentioned_in_trailing_prose_ignored() {
        let reply = "```json\n{\"summary\": \"S\"}\n```\nWrap code in ``` fences.";
        assert_eq!(strip_code_fence(reply), "{\"summary\": \"S\"}");
        assert_eq!(normalize_response(reply).summary, "S");
    }

    #[test]
    fn unclosed_fence_keeps_body() {
        let reply = "```json\n{\"summary\": \"S\"}";
        assert_eq!(strip_code_fence(reply), "{\"summary\": \"S\"}");
    }

    #[test]
    fn fence_only_is_empty() {
        assert_eq!(strip_code_fence("```"), "");
        assert_eq!(strip_code_fence("```\n```"), "");
    }

    #[test]
    fn decodes_object_as_structured() {
        let raw = decode_response("```json\n{\"documentType\": \"NDA\"}\n```");
        assert_eq!(raw, RawAnalysis::Structured(json!({ "documentType": "NDA" })));
    }

    #[test]
    fn decodes_non_object_json_as_text() {
        assert_eq!(
            decode_response("[\"a\", \"b\"]"),
            RawAnalysis::Text("[\"a\", \"b\"]".into())
        );
        assert_eq!(decode_response("42"), RawAnalysis::Text("42".into()));
    }

    #[test]
    fn malformed_json_falls_back_to_text() {
        let raw = decode_response("{\"summary\": \"unterminated");
        assert!(matches!(raw, RawAnalysis::Text(_)));
        assert!(normalize(&raw).is_empty());
    }

    #[test]
    fn normalises_fenced_text_reply() {
        let r = normalize_response("```\nSummary:\nShort.\nRisks:\n- One\n```");
        assert_eq!(r.summary, "Short.");
        assert_eq!(r.risks, vec!["One".to_string()]);
    }

    #[test]
    fn normalises_structured_reply() {
        let r = normalize_response(
            r#"```json
{
    "documentType": "Loan Agreement",
    "summary": "A secured loan.",
    "parties": ["Lender Bank", "Borrower"],
    "loanAmount": "50,000",
    "risks": ["Variable rate"]
}
```"#,
        );
        assert_eq!(r.document_type, "Loan Agreement");
        assert_eq!(r.parties, vec!["Lender Bank".to_string(), "Borrower".to_string()]);
        assert_eq!(r.risks, vec!["Variable rate".to_string()]);
        assert!(r.key_points.is_empty());
    }

    #[test]
    fn garbage_gives_defaults() {
        assert!(normalize_response("").is_empty());
        assert!(normalize_response("I'm sorry, I can't help with that.").is_empty());
    }
}

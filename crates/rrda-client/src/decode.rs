//! Response body decoding.

use serde_json::Value;

use crate::error::DecodeError;
use crate::logging::targets;
use crate::model::Answer;

/// Decode a raw response body into an [`Answer`].
///
/// The body must be a JSON object. Missing or `null` sections decode as
/// empty, so error answers from the service (NXDOMAIN, SERVFAIL) that only
/// echo the question still decode successfully.
pub fn decode(body: &[u8]) -> Result<Answer, DecodeError> {
    // Anything not opening with `{` is classified without building an answer.
    if first_significant_byte(body) != Some(b'{') {
        let value: Value = serde_json::from_slice(body)?;
        let found = json_kind(&value);
        tracing::trace!(target: targets::DECODE, found, "response is not a JSON object");
        return Err(DecodeError::NotAnObject { found });
    }

    // Decoding straight from the bytes keeps line and column on errors.
    let answer: Answer = serde_json::from_slice(body)?;
    tracing::trace!(
        target: targets::DECODE,
        questions = answer.question.len(),
        answers = answer.answer.len(),
        authority = answer.authority.len(),
        additional = answer.additional.len(),
        "decoded response"
    );
    Ok(answer)
}

fn first_significant_byte(body: &[u8]) -> Option<u8> {
    body.iter()
        .copied()
        .find(|&b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

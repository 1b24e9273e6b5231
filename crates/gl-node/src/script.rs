//! # Invocation Scripts
//!
//! One JSON object per line in, one JSON object per line out.
//!
//! ```text
//! {"channel":"invoke","function":"approve_new_request","args":["alice","bob","req-1"]}
//! {"channel":"query","function":"get_request_status","args":["alice","bob","req-1"]}
//! ```
//!
//! ```text
//! {"ok":null}
//! {"ok":"approved"}
//! ```
//!
//! JSON document payloads are emitted as-is. Raw byte payloads (a request
//! status, a user record) are always emitted as a JSON string, so a stored
//! status of `null` reads `{"ok":"null"}` and never collides with a miss.

use gl_chaincode::{Channel, Payload, PayloadKind};
use serde::{Deserialize, Serialize};
use serde_json::value::{to_raw_value, RawValue};

/// A single operation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub channel: Channel,
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Invocation {
    pub fn invoke(function: &str, args: &[&str]) -> Self {
        Self::new(Channel::Invoke, function, args)
    }

    pub fn query(function: &str, args: &[&str]) -> Self {
        Self::new(Channel::Query, function, args)
    }

    fn new(channel: Channel, function: &str, args: &[&str]) -> Self {
        Self {
            channel,
            function: function.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Option<serde_json::Result<Invocation>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(serde_json::from_str(line))
}

/// Result line for one invocation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Ok(Option<Box<RawValue>>),
    Error(String),
}

impl Outcome {
    pub fn from_payload(payload: Payload, kind: PayloadKind) -> Self {
        let Some(bytes) = payload else {
            return Outcome::Ok(None);
        };
        let raw = match (kind, String::from_utf8(bytes)) {
            (PayloadKind::Json, Ok(text)) => RawValue::from_string(text),
            (PayloadKind::Bytes, Ok(text)) => to_raw_value(&text),
            (_, Err(e)) => to_raw_value(&String::from_utf8_lossy(e.as_bytes())),
        };
        match raw {
            Ok(raw) => Outcome::Ok(Some(raw)),
            Err(e) => Outcome::Error(format!("unrepresentable payload: {e}")),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Payload text, if any.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Outcome::Ok(Some(raw)) => Some(raw.get()),
            _ => None,
        }
    }
}

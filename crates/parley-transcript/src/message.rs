use serde::{Deserialize, Serialize};

/// A single speaker turn in a call transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// `minutes:seconds` token exactly as it appeared in the source header,
    /// brackets stripped. Opaque: never converted to a duration.
    pub timestamp: String,
    /// Display name of the person speaking. Non-empty, verbatim.
    pub speaker: String,
    /// Role label from the header parentheses (e.g. "Buyer 0"), when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_role: Option<String>,
    /// Full body of the turn. Leading/trailing whitespace trimmed,
    /// internal blank lines preserved.
    pub content: String,
}

/// Ordered speaker turns parsed from one raw transcript.
///
/// Derived data: always reconstructible from the raw text, never mutated
/// independently of it. Order equals header order in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTranscript {
    pub messages: Vec<Message>,
}

impl ParsedTranscript {
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

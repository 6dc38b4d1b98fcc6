use crate::message::{Message, ParsedTranscript};

// Pure derivations over the parsed turns. None of these re-derive ordering
// or mutate the transcript.

impl ParsedTranscript {
    /// Render as `[timestamp] speaker: content` blocks separated by a blank
    /// line. A view, not a lossless export: the speaker role is not emitted.
    pub fn to_plain_text(&self) -> String {
        self.messages
            .iter()
            .map(|m| format!("[{}] {}: {}", m.timestamp, m.speaker, m.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Render as Markdown: bold speaker, timestamp in parentheses, content on
    /// the following line. The two trailing spaces are a Markdown hard break.
    pub fn to_markdown(&self) -> String {
        self.messages
            .iter()
            .map(|m| format!("**{}** ({})  \n{}", m.speaker, m.timestamp, m.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// All turns from one speaker, in original order. Exact string match;
    /// no fuzzy or case-insensitive lookup.
    pub fn messages_by_speaker(&self, speaker: &str) -> Vec<&Message> {
        self.messages
            .iter()
            .filter(|m| m.speaker == speaker)
            .collect()
    }
}

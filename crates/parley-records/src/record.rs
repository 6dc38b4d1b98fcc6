use std::sync::OnceLock;

use parley_transcript::{parse, ParsedTranscript};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Profile details for a call participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub job_title: String,
    pub location: String,
    pub photo_url: String,
    pub linkedin_url: String,
}

/// One participant in a call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

/// Call metadata as stored in the records file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallMetadata {
    pub title: String,
    /// Call length in seconds.
    pub duration: i64,
    /// RFC 3339 timestamp string, kept verbatim from the records file.
    pub start_time: String,
    pub parties: Vec<Party>,
}

impl CallMetadata {
    /// `YYYY-MM-DD HH:MM:SS` display of `start_time`; falls back to the raw
    /// string when it does not parse as RFC 3339.
    pub fn start_time_display(&self) -> String {
        let format = time::format_description::parse(
            "[year]-[month]-[day] [hour]:[minute]:[second]",
        );
        match (OffsetDateTime::parse(&self.start_time, &Rfc3339), format) {
            (Ok(dt), Ok(format)) => dt
                .format(&format)
                .unwrap_or_else(|_| self.start_time.clone()),
            _ => self.start_time.clone(),
        }
    }
}

/// Prior inference results stored alongside the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceResults {
    pub call_summary: String,
}

/// Raw transcript text plus its parsed projection.
///
/// The raw text is the single source of truth and is immutable after load.
/// The projection is computed on first access and cached write-once; there
/// is no invalidation path because the text never changes.
#[derive(Debug, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    #[serde(skip)]
    parsed: OnceLock<ParsedTranscript>,
}

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parsed: OnceLock::new(),
        }
    }

    /// The parsed projection. First call parses, later calls return the
    /// cached value.
    pub fn parsed(&self) -> &ParsedTranscript {
        self.parsed.get_or_init(|| parse(&self.text))
    }
}

/// One recorded sales call.
#[derive(Debug, Serialize, Deserialize)]
pub struct CallRecord {
    pub id: String,
    pub created_at_utc: String,
    pub call_metadata: CallMetadata,
    pub transcript: Transcript,
    pub inference_results: InferenceResults,
}

/// Find a call by 1-based index or exact title. A selector that parses as a
/// number is treated as an index.
pub fn select_call<'a>(calls: &'a [CallRecord], selector: &str) -> Option<&'a CallRecord> {
    if let Ok(index) = selector.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| calls.get(i));
    }
    calls.iter().find(|c| c.call_metadata.title == selector)
}

/// `m:ss` display for a duration in seconds.
pub fn format_duration(seconds: i64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_call(title: &str) -> CallRecord {
        CallRecord {
            id: "call_001".into(),
            created_at_utc: "2026-03-02T09:00:00Z".into(),
            call_metadata: CallMetadata {
                title: title.into(),
                duration: 125,
                start_time: "2026-03-01T14:30:00Z".into(),
                parties: vec![Party {
                    name: "Alice".into(),
                    email: Some("alice@example.com".into()),
                    profile: None,
                }],
            },
            transcript: Transcript::new("<0:05> Alice (Buyer 0):\nHello."),
            inference_results: InferenceResults {
                call_summary: "Intro call.".into(),
            },
        }
    }

    #[test]
    fn parsed_projection_is_cached_write_once() {
        let call = sample_call("Discovery call");
        let first = call.transcript.parsed();
        let second = call.transcript.parsed();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.messages[0].speaker, "Alice");
    }

    #[test]
    fn select_call_by_title_and_index() {
        let calls = vec![sample_call("Discovery call"), sample_call("Demo call")];
        assert_eq!(
            select_call(&calls, "Demo call").unwrap().call_metadata.title,
            "Demo call"
        );
        assert_eq!(
            select_call(&calls, "1").unwrap().call_metadata.title,
            "Discovery call"
        );
        assert!(select_call(&calls, "0").is_none());
        assert!(select_call(&calls, "3").is_none());
        assert!(select_call(&calls, "Missing call").is_none());
    }

    #[test]
    fn duration_display_pads_seconds() {
        assert_eq!(format_duration(125), "2:05");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(600), "10:00");
    }

    #[test]
    fn start_time_display_formats_rfc3339() {
        let call = sample_call("Discovery call");
        assert_eq!(call.call_metadata.start_time_display(), "2026-03-01 14:30:00");
    }

    #[test]
    fn start_time_display_falls_back_to_raw() {
        let mut call = sample_call("Discovery call");
        call.call_metadata.start_time = "yesterday".into();
        assert_eq!(call.call_metadata.start_time_display(), "yesterday");
    }
}

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::record::CallRecord;

/// Failure loading the call records file. Record loading is the boundary
/// where bad data is reported; nothing downstream re-validates.
#[derive(Debug, Error)]
pub enum RecordLoadError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed call records in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load validated call records from a JSON array file (`calls.json`).
pub fn load_calls(path: &Path) -> Result<Vec<CallRecord>, RecordLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| RecordLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| RecordLoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CALLS_JSON: &str = r#"[
      {
        "id": "call_001",
        "created_at_utc": "2026-03-02T09:00:00Z",
        "call_metadata": {
          "title": "Discovery call",
          "duration": 1800,
          "start_time": "2026-03-01T14:30:00Z",
          "parties": [
            {
              "name": "Alice",
              "email": "alice@example.com",
              "profile": {
                "job_title": "VP Engineering",
                "location": "Berlin",
                "photo_url": "https://example.com/alice.png",
                "linkedin_url": "https://linkedin.com/in/alice"
              }
            },
            { "name": "Bob" }
          ]
        },
        "transcript": {
          "text": "<0:05> Alice (Buyer 0):\nHello.\n<0:12> Bob (Seller 1):\nHi."
        },
        "inference_results": { "call_summary": "Intro call." }
      }
    ]"#;

    fn write_calls(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("calls.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_calls_parses_records() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_calls(tmp.path(), CALLS_JSON);

        let calls = load_calls(&path).unwrap();
        assert_eq!(calls.len(), 1);
        let call = &calls[0];
        assert_eq!(call.call_metadata.title, "Discovery call");
        assert_eq!(call.call_metadata.parties.len(), 2);
        assert_eq!(call.call_metadata.parties[1].email, None);
        assert_eq!(call.transcript.parsed().len(), 2);
    }

    #[test]
    fn load_calls_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_calls(&tmp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, RecordLoadError::Read { .. }));
    }

    #[test]
    fn load_calls_malformed_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_calls(tmp.path(), "{ not a list");
        let err = load_calls(&path).unwrap_err();
        assert!(matches!(err, RecordLoadError::Malformed { .. }));
    }

    #[test]
    fn load_calls_wrong_shape_is_malformed() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_calls(tmp.path(), r#"[{"id": "call_001"}]"#);
        let err = load_calls(&path).unwrap_err();
        assert!(matches!(err, RecordLoadError::Malformed { .. }));
    }
}

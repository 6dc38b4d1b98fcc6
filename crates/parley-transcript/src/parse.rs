use crate::message::{Message, ParsedTranscript};
use serde::{Deserialize, Serialize};

/// Scan counters for one parse run.
///
/// `lines_dropped` counts lines discarded outside any block: leading text
/// before the first header, plus anything that never matched a header shape.
/// Dropping such text is deliberate permissiveness (the source format is not
/// strictly controlled), so the counters are diagnostic only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    pub lines_scanned: usize,
    pub blocks_matched: usize,
    pub lines_dropped: usize,
}

/// Parse raw transcript text into ordered speaker turns.
///
/// Pure function of the input: same text always yields the same sequence.
/// Never fails; malformed input worst-cases to an empty transcript.
pub fn parse(raw: &str) -> ParsedTranscript {
    parse_with_stats(raw).0
}

/// [`parse`] plus diagnostic counters for dropped lines.
pub fn parse_with_stats(raw: &str) -> (ParsedTranscript, ParseStats) {
    let mut stats = ParseStats::default();
    let mut messages: Vec<Message> = Vec::new();
    let mut current: Option<Block<'_>> = None;

    for line in raw.lines() {
        stats.lines_scanned += 1;
        if let Some(header) = match_header(line) {
            if let Some(block) = current.take() {
                messages.push(block.finish());
            }
            stats.blocks_matched += 1;
            let mut body = Vec::new();
            if let Some(inline) = header.inline {
                body.push(inline);
            }
            current = Some(Block {
                timestamp: header.timestamp,
                speaker: header.speaker,
                speaker_role: header.speaker_role,
                body,
            });
        } else if let Some(block) = current.as_mut() {
            // Body policy: everything up to the next header belongs to the
            // open block. A blank line is body, not a terminator.
            block.body.push(line);
        } else {
            stats.lines_dropped += 1;
        }
    }
    if let Some(block) = current.take() {
        messages.push(block.finish());
    }

    (ParsedTranscript { messages }, stats)
}

/// A block under construction: header fields plus accumulated body lines.
struct Block<'a> {
    timestamp: &'a str,
    speaker: &'a str,
    speaker_role: Option<&'a str>,
    body: Vec<&'a str>,
}

impl Block<'_> {
    fn finish(self) -> Message {
        Message {
            timestamp: self.timestamp.to_string(),
            speaker: self.speaker.to_string(),
            speaker_role: self.speaker_role.map(str::to_string),
            content: self.body.join("\n").trim().to_string(),
        }
    }
}

struct HeaderLine<'a> {
    timestamp: &'a str,
    speaker: &'a str,
    speaker_role: Option<&'a str>,
    /// First content line, when the header carries it (plain form only).
    inline: Option<&'a str>,
}

/// Match one line against the two fixed header shapes.
///
/// Source form, `<MM:SS> NAME (ROLE):` with an angle-bracket timestamp. The
/// name runs to the first ` (`, the role to the trailing `):`, and the line
/// must end at the colon.
///
/// Plain form, `[MM:SS] NAME: content...`, the shape `to_plain_text` emits.
/// The name runs to the first colon, no role is captured, and content starts
/// on the header line itself.
fn match_header(line: &str) -> Option<HeaderLine<'_>> {
    let closing = match *line.as_bytes().first()? {
        b'<' => '>',
        b'[' => ']',
        _ => return None,
    };
    let close_idx = line.find(closing)?;
    let timestamp = &line[1..close_idx];
    if !is_timestamp(timestamp) {
        return None;
    }
    let rest = line.get(close_idx + 1..)?.strip_prefix(' ')?;

    if closing == '>' {
        let inner = rest.strip_suffix("):")?;
        let sep = inner.find(" (")?;
        let speaker = &inner[..sep];
        if speaker.is_empty() {
            return None;
        }
        Some(HeaderLine {
            timestamp,
            speaker,
            speaker_role: Some(&inner[sep + 2..]),
            inline: None,
        })
    } else {
        let colon = rest.find(':')?;
        let speaker = &rest[..colon];
        if speaker.is_empty() {
            return None;
        }
        let after = &rest[colon + 1..];
        let inline = if after.is_empty() {
            ""
        } else {
            after.strip_prefix(' ')?
        };
        Some(HeaderLine {
            timestamp,
            speaker,
            speaker_role: None,
            inline: Some(inline),
        })
    }
}

/// `minutes:seconds`: ASCII digits with exactly one colon, both sides
/// non-empty. The token is preserved verbatim, never parsed to a number.
fn is_timestamp(token: &str) -> bool {
    match token.split_once(':') {
        Some((minutes, seconds)) => {
            !minutes.is_empty()
                && !seconds.is_empty()
                && minutes.bytes().all(|b| b.is_ascii_digit())
                && seconds.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

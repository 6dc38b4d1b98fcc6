use anyhow::Context;
use parley_records::{load_calls, select_call};
use parley_transcript::ParsedTranscript;
use std::collections::HashMap;
use std::path::Path;

/// `parley speakers`: per-speaker message counts in first-appearance order.
pub fn execute(file: &Path, selector: &str) -> anyhow::Result<()> {
    let calls = load_calls(file)?;
    let call =
        select_call(&calls, selector).with_context(|| format!("no call matching '{selector}'"))?;

    for (speaker, count) in speaker_counts(call.transcript.parsed()) {
        println!("{speaker}: {count}");
    }
    Ok(())
}

fn speaker_counts(transcript: &ParsedTranscript) -> Vec<(String, usize)> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for msg in &transcript.messages {
        let entry = counts.entry(msg.speaker.as_str()).or_insert(0);
        if *entry == 0 {
            order.push(&msg.speaker);
        }
        *entry += 1;
    }
    order
        .into_iter()
        .map(|s| (s.to_string(), counts[s]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_transcript::parse;

    #[test]
    fn counts_follow_first_appearance_order() {
        let t = parse(
            "<0:05> Bob (Seller 1):\nHi.\n<0:10> Alice (Buyer 0):\nHello.\n<0:15> Bob (Seller 1):\nSo.",
        );
        assert_eq!(
            speaker_counts(&t),
            vec![("Bob".to_string(), 2), ("Alice".to_string(), 1)]
        );
    }

    #[test]
    fn empty_transcript_has_no_counts() {
        assert!(speaker_counts(&parse("")).is_empty());
    }
}

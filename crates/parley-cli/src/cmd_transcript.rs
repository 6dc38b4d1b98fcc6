use anyhow::Context;
use parley_records::{load_calls, select_call};
use parley_transcript::ParsedTranscript;
use std::path::Path;

/// `parley transcript`: render one call transcript.
pub fn execute(
    file: &Path,
    selector: &str,
    markdown: bool,
    speaker: Option<&str>,
) -> anyhow::Result<()> {
    let calls = load_calls(file)?;
    let call =
        select_call(&calls, selector).with_context(|| format!("no call matching '{selector}'"))?;
    let parsed = call.transcript.parsed();

    let rendered = match speaker {
        Some(name) => {
            let filtered = ParsedTranscript {
                messages: parsed
                    .messages_by_speaker(name)
                    .into_iter()
                    .cloned()
                    .collect(),
            };
            render(&filtered, markdown)
        }
        None => render(parsed, markdown),
    };
    println!("{rendered}");
    Ok(())
}

fn render(transcript: &ParsedTranscript, markdown: bool) -> String {
    if markdown {
        transcript.to_markdown()
    } else {
        transcript.to_plain_text()
    }
}

use parley_records::{format_duration, load_calls};
use std::path::Path;

/// `parley list`: one line per loaded call.
pub fn execute(file: &Path, json: bool) -> anyhow::Result<()> {
    let calls = load_calls(file)?;

    if json {
        let rows: Vec<serde_json::Value> = calls
            .iter()
            .enumerate()
            .map(|(i, call)| {
                let meta = &call.call_metadata;
                serde_json::json!({
                    "index": i + 1,
                    "title": meta.title,
                    "duration": meta.duration,
                    "start_time": meta.start_time,
                    "participants": meta.parties.len(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for (i, call) in calls.iter().enumerate() {
        let meta = &call.call_metadata;
        println!(
            "{:>3}. {}  ({}, {}, {} participants)",
            i + 1,
            meta.title,
            format_duration(meta.duration),
            meta.start_time_display(),
            meta.parties.len(),
        );
    }
    Ok(())
}

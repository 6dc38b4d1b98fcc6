use anyhow::Context;
use parley_records::{format_duration, load_calls, select_call};
use std::path::Path;

/// `parley show`: call details, participants, and stored summary.
pub fn execute(file: &Path, selector: &str, json: bool) -> anyhow::Result<()> {
    let calls = load_calls(file)?;
    let call =
        select_call(&calls, selector).with_context(|| format!("no call matching '{selector}'"))?;
    let meta = &call.call_metadata;

    if json {
        let participants: Vec<serde_json::Value> = meta
            .parties
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "email": p.email,
                    "job_title": p.profile.as_ref().map(|pr| pr.job_title.clone()),
                    "location": p.profile.as_ref().map(|pr| pr.location.clone()),
                })
            })
            .collect();
        let row = serde_json::json!({
            "id": call.id,
            "title": meta.title,
            "duration": meta.duration,
            "start_time": meta.start_time,
            "participants": participants,
            "summary": call.inference_results.call_summary,
        });
        println!("{}", serde_json::to_string_pretty(&row)?);
        return Ok(());
    }

    println!("{}", meta.title);
    println!("Duration: {}", format_duration(meta.duration));
    println!("Date: {}", meta.start_time_display());
    println!("Participants:");
    for party in &meta.parties {
        match &party.profile {
            Some(profile) => println!(
                "  {} ({}, {})",
                party.name, profile.job_title, profile.location
            ),
            None => println!("  {}", party.name),
        }
        if let Some(email) = &party.email {
            println!("    {email}");
        }
    }
    println!();
    println!("Summary: {}", call.inference_results.call_summary);
    Ok(())
}

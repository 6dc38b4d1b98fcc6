use anyhow::Context;
use parley_ask::{AskConfig, CallAnalyzer};
use parley_records::{load_calls, select_call};
use std::path::Path;

/// `parley insights`: run the standard analysis questions.
pub fn execute(file: &Path, selector: &str) -> anyhow::Result<()> {
    let calls = load_calls(file)?;
    let call =
        select_call(&calls, selector).with_context(|| format!("no call matching '{selector}'"))?;

    let analyzer = CallAnalyzer::new(AskConfig::from_env()?);
    let insights = analyzer.key_insights(call)?;
    println!("{insights}");
    Ok(())
}

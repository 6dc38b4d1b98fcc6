use std::time::Duration;

use parley_records::CallRecord;
use thiserror::Error;

// ── Standard questions ───────────────────────────────────────────────

/// The canned analysis questions behind `parley insights`.
pub const STANDARD_QUESTIONS: &[&str] = &[
    "What are the main pain points mentioned by the buyer?",
    "What next steps or action items were agreed upon?",
    "What objections or concerns were raised?",
    "What is the current state of the deal/opportunity?",
    "Were any specific deadlines or timelines mentioned?",
];

// ── Config ───────────────────────────────────────────────────────────

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-3-5-haiku-latest";
const DEFAULT_MAX_TOKENS: u32 = 1000;
const TIMEOUT: Duration = Duration::from_secs(60);

/// Inference client configuration. Built once at process start and handed to
/// [`CallAnalyzer::new`]; there is no global client.
#[derive(Debug, Clone)]
pub struct AskConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
}

impl AskConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Read configuration from the environment. `ANTHROPIC_API_KEY` is
    /// required; `PARLEY_MODEL` and `PARLEY_MAX_TOKENS` override defaults.
    pub fn from_env() -> Result<Self, InferenceError> {
        let api_key =
            std::env::var("ANTHROPIC_API_KEY").map_err(|_| InferenceError::MissingCredential)?;
        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var("PARLEY_MODEL") {
            config.model = model;
        }
        if let Some(max_tokens) = std::env::var("PARLEY_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.max_tokens = max_tokens;
        }
        Ok(config)
    }
}

// ── Errors ───────────────────────────────────────────────────────────

/// Failure of the inference call. Nothing here originates in transcript
/// parsing, which has no error kinds of its own.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("ANTHROPIC_API_KEY is not set")]
    MissingCredential,
    #[error("model provider returned HTTP {status}")]
    Api { status: u16 },
    #[error("inference request failed: {0}")]
    Transport(String),
    #[error("unexpected response from model provider: {0}")]
    MalformedResponse(String),
}

impl From<ureq::Error> for InferenceError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => InferenceError::Api { status },
            other => InferenceError::Transport(other.to_string()),
        }
    }
}

// ── Analyzer ─────────────────────────────────────────────────────────

/// Claude-backed question answering over call records.
pub struct CallAnalyzer {
    config: AskConfig,
    agent: ureq::Agent,
}

impl CallAnalyzer {
    pub fn new(config: AskConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(TIMEOUT))
            .build()
            .new_agent();
        Self { config, agent }
    }

    /// Ask one question about one call. The full raw transcript is the model
    /// context; the parsed projection is not needed here.
    pub fn ask(&self, call: &CallRecord, question: &str) -> Result<String, InferenceError> {
        let prompt = build_prompt(call, question);
        let body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": 0,
            "messages": [{"role": "user", "content": prompt}],
        });

        tracing::debug!(model = %self.config.model, title = %call.call_metadata.title, "sending analysis request");
        let mut response = self
            .agent
            .post(MESSAGES_URL)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .send(body.to_string())?;

        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|e| InferenceError::Transport(e.to_string()))?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;
        extract_answer(&value)
    }

    /// Run every standard question against one call and join the answers.
    pub fn key_insights(&self, call: &CallRecord) -> Result<String, InferenceError> {
        let mut blocks = Vec::new();
        for question in STANDARD_QUESTIONS {
            let answer = self.ask(call, question)?;
            blocks.push(format!("Q: {question}\nA: {answer}\n"));
        }
        Ok(blocks.join("\n"))
    }
}

// ── Prompt and response handling ─────────────────────────────────────

fn build_prompt(call: &CallRecord, question: &str) -> String {
    let meta = &call.call_metadata;
    format!(
        "You are a helpful assistant analyzing sales call transcripts.\n\
         Based on the following call transcript, please answer this question: {question}\n\n\
         Remember to:\n\
         - Be specific and cite relevant parts of the conversation\n\
         - Stay objective and base answers only on what's in the transcript\n\
         - Say \"I cannot determine this from the transcript\" if the information isn't present\n\n\
         Call Title: {title}\n\
         Date: {date}\n\
         Duration: {duration} minutes\n\n\
         Transcript:\n{transcript}",
        question = question,
        title = meta.title,
        date = meta.start_time_display(),
        duration = meta.duration / 60,
        transcript = call.transcript.text,
    )
}

/// Pull the first text content block out of a Messages API response.
fn extract_answer(response: &serde_json::Value) -> Result<String, InferenceError> {
    response
        .get("content")
        .and_then(|c| c.as_array())
        .and_then(|blocks| {
            blocks
                .iter()
                .find(|b| b.get("type").and_then(|t| t.as_str()) == Some("text"))
        })
        .and_then(|b| b.get("text").and_then(|t| t.as_str()))
        .map(str::to_string)
        .ok_or_else(|| InferenceError::MalformedResponse("no text content block".into()))
}

// ── Tests ────────────────────────────────────────────────────────────

mod message;
mod parse;
mod view;

pub use message::{Message, ParsedTranscript};
pub use parse::{parse, parse_with_stats, ParseStats};

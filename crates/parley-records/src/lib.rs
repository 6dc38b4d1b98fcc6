mod load;
mod record;

pub use load::{load_calls, RecordLoadError};
pub use record::{
    format_duration, select_call, CallMetadata, CallRecord, InferenceResults, Party, Profile,
    Transcript,
};

//! The prompt library: durable, structured generation-prompt records.
//!
//! One JSON file per record inside a library directory
//! (`prompts/{comfyui,general,templates}`). The store assumes a single
//! interactive session — one writer, one reader, no locking. All mutation
//! goes through explicit, caller-confirmed save and delete operations.

mod record;
mod store;

pub use record::PromptRecord;
pub use store::{DeleteOutcome, ExportOutcome, ImportReport, PromptStore, SaveOutcome};

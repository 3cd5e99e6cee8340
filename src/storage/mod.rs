//! Flat-file persistence: the record codec and the task-file plumbing.

mod codec;
mod file;

pub use codec::decode;
pub use file::{LoadOutcome, TaskFile};

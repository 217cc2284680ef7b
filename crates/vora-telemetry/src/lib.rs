//! Routing history records and on-disk locations

mod io;
mod paths;
mod types;

pub use io::{append_jsonl, atomic_write, read_jsonl};
pub use paths::Paths;
pub use types::{RoutingRecord, RoutingSource};

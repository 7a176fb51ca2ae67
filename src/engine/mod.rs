mod messages;
mod worker;

pub use messages::{FetchCommand, FetchEvent, FetchSource, PollSettings};
pub use worker::{FetchHandle, run_fetch_loop, spawn_fetch_worker};

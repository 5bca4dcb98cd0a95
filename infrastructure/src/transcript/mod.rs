//! Transcript adapters.

mod memory;

pub use memory::InMemoryTranscript;

//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod quiz_gateway;
pub mod topic_source;
pub mod transcript;
pub mod transcript_logger;

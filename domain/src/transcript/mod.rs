//! Conversation transcript model.
//!
//! The transcript itself is owned by the surrounding conversation
//! engine; this module only defines the entry shapes panels append.

pub mod entities;

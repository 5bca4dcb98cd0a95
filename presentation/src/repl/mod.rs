//! Interactive quiz REPL.

pub mod quiz_repl;

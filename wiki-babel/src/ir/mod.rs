//! Intermediate representation for wiki documents.
//!
//! Tokens are the transient output of the block grammar; nodes are the
//! persistent document tree every format reads from and writes to.

pub mod from_tokens;
pub mod nodes;
pub mod tokens;

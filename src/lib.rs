//! Remember Me (workspace facade crate).
//!
//! Re-exports the workspace crates under short names
//! (`remember_me::{core,input,term,types}`) and hosts the frontend's file logger.

pub mod logging;

pub use remember_me_core as core;
pub use remember_me_input as input;
pub use remember_me_term as term;
pub use remember_me_types as types;

//! dotdash (workspace facade crate).
//!
//! This package keeps the `dotdash::{core,term,input,types}` public API
//! stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use dotdash_core as core;
pub use dotdash_input as input;
pub use dotdash_term as term;
pub use dotdash_types as types;

//! tess (workspace facade crate).
//!
//! Re-exports the member crates as `tess::{types,core,term,input,adapter,engine}`
//! so the binary, benches and integration tests share one import path.

pub use tess_adapter as adapter;
pub use tess_core as core;
pub use tess_engine as engine;
pub use tess_input as input;
pub use tess_term as term;
pub use tess_types as types;

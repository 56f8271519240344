//! Tower of Hanoi (workspace facade crate).
//!
//! Keeps a single `hanoi::{core,engine,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use hanoi_core as core;
pub use hanoi_engine as engine;
pub use hanoi_types as types;

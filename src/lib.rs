//! FFI Arith - integer addition exported over the C ABI
//!
//! Builds as a `cdylib` for native hosts, or for `wasm32-unknown-unknown`
//! when the host is a WebAssembly runtime:
//!
//! ```text
//! cargo build --release --target wasm32-unknown-unknown
//! ```

pub mod arith;
pub mod ffi;

pub use arith::{ArithError, OverflowPolicy};
pub use ffi::*;

/// Name under which `fa_add` is exported.
pub const ADD_SYMBOL: &str = "fa_add";

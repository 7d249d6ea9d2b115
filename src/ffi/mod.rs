//! C FFI layer.
//!
//! All functions are marked with `#[no_mangle]` and use `extern "C"`, so a host
//! (LuaJIT FFI, `dlopen`, a WebAssembly runtime) finds them by their literal name.
//!
//! The actual logic is in the `arith` module. These functions are thin wrappers
//! that handle null checks and map errors to status codes.

#[cfg(feature = "extended-abi")]
pub mod checked;
pub mod simple;

#[cfg(feature = "extended-abi")]
pub use checked::{fa_add_checked, fa_add_saturating, FA_ERR_NULL, FA_ERR_OVERFLOW, FA_OK};
pub use simple::fa_add;

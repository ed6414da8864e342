#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod keys;
pub mod memory;
pub mod traits;

//! WebAssembly bindings for the emulator.
//!
//! JavaScript-callable wrapper around a [`Cpu`](crate::Cpu) over flat memory,
//! enabled with the `wasm` feature.

pub mod api;

pub use api::Emulator;

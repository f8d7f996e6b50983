#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]

//! Utility crate shared by the tessera actor kernel.
//!
//! The `core` module holds runtime-agnostic building blocks (shared handles, spin locks and
//! clock abstractions). The `std` module provides the thread-backed pieces: a monotonic clock
//! driven by `Instant`, a spin-preferring semaphore and the dedicated worker pool
//! the kernel dispatchers execute on.

extern crate alloc;

/// Runtime-agnostic primitives.
pub mod core;
/// Primitives backed by the standard library.
pub mod std;

#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_map)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::match_like_matches_macro)]

//! Actor execution kernel.
//!
//! Every actor gets the illusion of a private, single-threaded execution context while being
//! multiplexed onto a shared pool of worker threads. The kernel is organised leaf-first:
//!
//! - `core::dispatch::mailbox`: per-actor user queue, never-dropped system queue and the atomic
//!   status word whose `Open -> Scheduled` transition guarantees mutual exclusion.
//! - `core::dispatch::dispatcher`: binds runnable mailboxes to an executor and bounds every batch
//!   by a throughput quota so actors sharing a pool are served fairly.
//! - `core::actor_prim`: the actor cell (behavior stack, children, stash, system-message state
//!   machine), actor references and the processing context handed to handlers.
//! - `core::supervision`: directives, strategies and restart budgets.
//! - `core::system`: guardians, registry, dead letters and the event stream.
//!
//! The `std` module adds the thread-pool and tokio executors, `tracing` forwarding and blocking
//! helpers for asks.

extern crate alloc;

/// Runtime-agnostic kernel.
pub mod core;
/// Standard-library executors and integrations.
pub mod std;

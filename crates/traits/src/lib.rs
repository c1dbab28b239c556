//! Core digest trait for sha2core.
//!
//! This crate provides the streaming-digest trait that sha2core hash
//! implementations conform to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! # Lifecycle
//!
//! A hasher moves through three stages: fresh, accumulating, finalized.
//! [`Digest::update`] and [`Digest::finalize`] are fallible so that use of a
//! finalized hasher is an immediate runtime error rather than a silent
//! misuse.
//!
//! # Error Types
//!
//! - [`FinalizedError`] - Opaque error for operations on a finalized hasher
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod digest;
pub mod error;

pub use digest::Digest;
pub use error::FinalizedError;

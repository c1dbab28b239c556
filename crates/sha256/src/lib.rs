//! SHA-256 (FIPS 180-4): one-shot and incremental hashing.
//!
//! This crate is `no_std` compatible and has zero library dependencies
//! outside the sha2core workspace. Dev-only dependencies are used for
//! oracle testing and benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - The SHA-256 context and one-shot API.
//!
//! # Example
//!
//! ```
//! use sha2core::{Digest as _, Sha256};
//!
//! // One-shot.
//! let digest = Sha256::digest(b"abc");
//!
//! // Incremental, any chunking produces the same digest.
//! let mut h = Sha256::new();
//! h.update(b"a")?;
//! h.update(b"bc")?;
//! assert_eq!(h.finalize()?, digest);
//!
//! // A finalized hasher rejects further use.
//! assert!(h.update(b"more").is_err());
//! # Ok::<(), sha2core::FinalizedError>(())
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

pub mod crypto;

mod util;

pub use crypto::Sha256;
pub use sha2core_traits::{Digest, FinalizedError};

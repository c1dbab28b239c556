//! Error types for digest operations.
//!
//! Minimal error surface: in safe Rust the classic handle-API failure modes
//! (null input pointers, allocation failure for an inline context) cannot
//! occur, so the only runtime misuse left is touching a finalized hasher.

use core::fmt;

/// Operation attempted on a finalized hasher.
///
/// Returned by `update` and `finalize` once a hasher has produced its
/// digest. The digest already produced is unaffected; the hasher must be
/// reset (or dropped) before it can absorb data again.
///
/// # Examples
///
/// ```
/// use sha2core_traits::FinalizedError;
///
/// fn guard(finalized: bool) -> Result<(), FinalizedError> {
///   if finalized {
///     Err(FinalizedError::new())
///   } else {
///     Ok(())
///   }
/// }
///
/// assert!(guard(true).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct FinalizedError;

impl FinalizedError {
  /// Create a new finalized-hasher error.
  ///
  /// This is the only way to construct this error from outside the crate,
  /// ensuring forward compatibility if fields are added in the future.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for FinalizedError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for FinalizedError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("hasher already finalized")
  }
}

impl core::error::Error for FinalizedError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    assert_eq!(FinalizedError::new().to_string(), "hasher already finalized");
  }

  #[test]
  fn debug_impl() {
    let dbg = format!("{:?}", FinalizedError::new());
    assert_eq!(dbg, "FinalizedError");
  }

  #[test]
  fn is_copy_and_eq() {
    let e = FinalizedError::new();
    let e2 = e; // Copy
    let e3 = e; // Still valid
    assert_eq!(e2, e3);
  }

  #[test]
  fn default_impl() {
    let err: FinalizedError = Default::default();
    assert_eq!(err, FinalizedError::new());
  }

  #[test]
  fn error_trait_impl() {
    use core::error::Error;

    let err = FinalizedError::new();
    assert!(err.source().is_none());
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<FinalizedError>();
    assert_sync::<FinalizedError>();
  }

  #[test]
  fn size_is_zero() {
    assert_eq!(core::mem::size_of::<FinalizedError>(), 0);
  }
}

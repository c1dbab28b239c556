//! Cryptographic digest trait.
//!
//! Streaming updates with an explicit finalized terminal state: once
//! [`Digest::finalize`] succeeds, further `update`/`finalize` calls fail
//! with [`FinalizedError`] until the hasher is [`Digest::reset`].

use core::fmt::Debug;

use crate::FinalizedError;

/// Cryptographic hash function producing a fixed-size digest.
///
/// Implementations own their entire state inline; creating a hasher cannot
/// fail and dropping it releases everything.
pub trait Digest: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug;

  /// Create a new hasher in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Update the hasher with additional data.
  ///
  /// Accepts empty input as a no-op. Fails with [`FinalizedError`] if the
  /// hasher has already been finalized.
  fn update(&mut self, data: &[u8]) -> Result<(), FinalizedError>;

  /// Update the hasher with multiple non-contiguous buffers.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) -> Result<(), FinalizedError> {
    for buf in bufs {
      self.update(buf)?;
    }
    Ok(())
  }

  /// Finalize and return the digest.
  ///
  /// Succeeds exactly once per lifecycle: a second call fails with
  /// [`FinalizedError`] and leaves the state behind the first digest
  /// untouched.
  fn finalize(&mut self) -> Result<Self::Output, FinalizedError>;

  /// Reset the hasher to its initial state, ready for a new message.
  fn reset(&mut self);

  /// Compute the digest of data in one shot.
  ///
  /// Equivalent to `new` + `update` + `finalize` on a fresh hasher, and
  /// therefore infallible. The result is identical no matter how the same
  /// bytes would have been chunked across streaming updates.
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output;
}

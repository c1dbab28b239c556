#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

//! SHA-256 with an explicit context lifecycle.
//!
//! The context is a plain owned value: creation cannot fail, `Drop` releases
//! it, and exclusive access is enforced by `&mut`. Misuse of a finalized
//! context surfaces as [`FinalizedError`] rather than silent corruption.

use sha2core_traits::{Digest, FinalizedError};

use crate::util::{rotr32, serialize_state, words_from_block};

const BLOCK_LEN: usize = 64;

const H0: [u32; 8] = [
  0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

const K: [u32; 64] = [
  0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5, 0xd807aa98,
  0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174, 0xe49b69c1, 0xefbe4786,
  0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da, 0x983e5152, 0xa831c66d, 0xb00327c8,
  0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967, 0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
  0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85, 0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819,
  0xd6990624, 0xf40e3585, 0x106aa070, 0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a,
  0x5b9cca4f, 0x682e6ff3, 0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7,
  0xc67178f2,
];

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
  rotr32(x, 2) ^ rotr32(x, 13) ^ rotr32(x, 22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
  rotr32(x, 6) ^ rotr32(x, 11) ^ rotr32(x, 25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
  rotr32(x, 7) ^ rotr32(x, 18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
  rotr32(x, 17) ^ rotr32(x, 19) ^ (x >> 10)
}

/// Expand one block's 16 message words into the 64-word round schedule.
///
/// Words 0..16 are the block words; each word `t` in 16..64 is
/// `small_sigma1(w[t-2]) + w[t-7] + small_sigma0(w[t-15]) + w[t-16]`,
/// all modulo 2^32.
#[inline]
fn expand_schedule(words: &[u32; 16]) -> [u32; 64] {
  let mut w = [0u32; 64];
  w[..16].copy_from_slice(words);
  for t in 16..64 {
    w[t] = small_sigma1(w[t - 2])
      .wrapping_add(w[t - 7])
      .wrapping_add(small_sigma0(w[t - 15]))
      .wrapping_add(w[t - 16]);
  }
  w
}

/// Lifecycle stage of a [`Sha256`] context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
  Fresh,
  Accumulating,
  Finalized,
}

/// Streaming SHA-256 context.
///
/// Wraparound in the 64-bit length counter is the standard's limit: messages
/// of 2^64 bits (2^61 bytes) or more are unsupported.
#[derive(Clone)]
pub struct Sha256 {
  state: [u32; 8],
  block: [u8; BLOCK_LEN],
  block_len: usize,
  bytes_hashed: u64,
  stage: Stage,
}

impl Default for Sha256 {
  #[inline]
  fn default() -> Self {
    Self {
      state: H0,
      block: [0u8; BLOCK_LEN],
      block_len: 0,
      bytes_hashed: 0,
      stage: Stage::Fresh,
    }
  }
}

impl Sha256 {
  /// Compute the digest of `data` in one shot.
  ///
  /// Defined as `new` + `update` + `finalize` on a fresh context; the result
  /// is identical to streaming the same bytes in any chunking.
  #[inline]
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; 32] {
    let mut h = Self::default();
    h.absorb(data);
    h.finalize_inner()
  }

  fn compress_block(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    let w = expand_schedule(&words_from_block(block));

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for t in 0..64 {
      let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(K[t])
        .wrapping_add(w[t]);
      let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

      h = g;
      g = f;
      f = e;
      e = d.wrapping_add(t1);
      d = c;
      c = b;
      b = a;
      a = t1.wrapping_add(t2);
    }

    // Single add-back after all 64 rounds; a half-updated state is never
    // observable between compression calls.
    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
  }

  /// Buffer `data`, compressing every filled 64-byte block.
  ///
  /// Invariant on exit: `block_len < 64`.
  fn absorb(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.block_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.block_len, data.len());
      self.block[self.block_len..self.block_len + take].copy_from_slice(&data[..take]);
      self.block_len += take;
      data = &data[take..];

      if self.block_len == BLOCK_LEN {
        let block = self.block;
        Self::compress_block(&mut self.state, &block);
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u64);
        self.block_len = 0;
      }
    }

    // With an empty buffer, full blocks are compressed straight out of the
    // input without the copy through `self.block`.
    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    if !blocks.is_empty() {
      for block in blocks {
        Self::compress_block(&mut self.state, block);
      }
      self.bytes_hashed = self.bytes_hashed.wrapping_add((blocks.len() * BLOCK_LEN) as u64);
    }
    data = rest;

    if !data.is_empty() {
      self.block[..data.len()].copy_from_slice(data);
      self.block_len = data.len();
    }
  }

  /// Pad, compress the closing block(s), and serialize the digest.
  ///
  /// Reads the live state without mutating it, so an already-produced digest
  /// cannot be disturbed by later misuse.
  fn finalize_inner(&self) -> [u8; 32] {
    let mut state = self.state;
    let mut block = self.block;
    let mut block_len = self.block_len;
    let total_len = self.bytes_hashed.wrapping_add(block_len as u64);

    block[block_len] = 0x80;
    block_len += 1;

    // The 8-byte length must land at offset 56; if the marker pushed past
    // that, the padding spills into a second block.
    if block_len > 56 {
      block[block_len..].fill(0);
      Self::compress_block(&mut state, &block);
      block = [0u8; BLOCK_LEN];
      block_len = 0;
    }

    block[block_len..56].fill(0);

    let bit_len = total_len.wrapping_mul(8);
    block[56..64].copy_from_slice(&bit_len.to_be_bytes());
    Self::compress_block(&mut state, &block);

    serialize_state(&state)
  }
}

impl Digest for Sha256 {
  const OUTPUT_SIZE: usize = 32;
  type Output = [u8; 32];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, data: &[u8]) -> Result<(), FinalizedError> {
    if self.stage == Stage::Finalized {
      return Err(FinalizedError::new());
    }
    self.stage = Stage::Accumulating;
    self.absorb(data);
    Ok(())
  }

  fn finalize(&mut self) -> Result<Self::Output, FinalizedError> {
    if self.stage == Stage::Finalized {
      return Err(FinalizedError::new());
    }
    let digest = self.finalize_inner();
    self.stage = Stage::Finalized;
    Ok(digest)
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }

  #[inline]
  fn digest(data: &[u8]) -> Self::Output {
    let mut h = Self::default();
    h.absorb(data);
    h.finalize_inner()
  }
}

#![allow(clippy::indexing_slicing)] // Fixed-size word/byte conversions

//! Big-endian word (de)serialization, kept separate from the arithmetic
//! core so it can be tested on its own.

#[inline(always)]
pub const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n)
}

/// Split one 64-byte block into its 16 big-endian message words.
#[inline]
pub fn words_from_block(block: &[u8; 64]) -> [u32; 16] {
  let mut words = [0u32; 16];
  let (chunks, _) = block.as_chunks::<4>();
  for (i, chunk) in chunks.iter().enumerate() {
    words[i] = u32::from_be_bytes(*chunk);
  }
  words
}

/// Serialize the eight state words big-endian into the 32-byte digest.
#[inline]
pub fn serialize_state(state: &[u32; 8]) -> [u8; 32] {
  let mut out = [0u8; 32];
  for (i, word) in state.iter().copied().enumerate() {
    let offset = i * 4;
    out[offset..offset + 4].copy_from_slice(&word.to_be_bytes());
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rotr32_basics() {
    assert_eq!(rotr32(0x8000_0001, 1), 0xC000_0000);
    assert_eq!(rotr32(0x1234_5678, 0), 0x1234_5678);
    assert_eq!(rotr32(0x1234_5678, 32), 0x1234_5678);
  }

  #[test]
  fn block_words_are_big_endian() {
    let mut block = [0u8; 64];
    block[0] = 0x01;
    block[1] = 0x02;
    block[2] = 0x03;
    block[3] = 0x04;
    block[60] = 0xAA;
    block[63] = 0xBB;

    let words = words_from_block(&block);
    assert_eq!(words[0], 0x0102_0304);
    assert_eq!(words[15], 0xAA00_00BB);
    assert_eq!(words[1..15], [0u32; 14]);
  }

  #[test]
  fn state_serializes_big_endian() {
    let state = [0x0102_0304, 0, 0, 0, 0, 0, 0, 0xDEAD_BEEF];
    let out = serialize_state(&state);
    assert_eq!(out[..4], [0x01, 0x02, 0x03, 0x04]);
    assert_eq!(out[28..], [0xDE, 0xAD, 0xBE, 0xEF]);
  }

  #[test]
  fn word_round_trip() {
    let mut block = [0u8; 64];
    for (i, b) in block.iter_mut().enumerate() {
      *b = (i as u8).wrapping_mul(37).wrapping_add(11);
    }
    let words = words_from_block(&block);
    for (i, word) in words.iter().enumerate() {
      let mut chunk = [0u8; 4];
      chunk.copy_from_slice(&block[i * 4..i * 4 + 4]);
      assert_eq!(*word, u32::from_be_bytes(chunk));
    }
  }
}

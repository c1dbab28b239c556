#![no_main]

use libfuzzer_sys::fuzz_target;
use sha2core::{Digest as _, Sha256};

fuzz_target!(|data: &[u8]| {
  let one_shot = Sha256::digest(data);

  use sha2::Digest as _;
  let reference = sha2::Sha256::digest(data);
  assert_eq!(&one_shot[..], &reference[..]);

  // Chunking invariance with boundaries derived from the input itself.
  let mut h = Sha256::new();
  let mut rest = data;
  while let Some((&lead, _)) = rest.split_first() {
    let step = (lead as usize % 97) + 1;
    let (chunk, tail) = rest.split_at(step.min(rest.len()));
    h.update(chunk).unwrap();
    rest = tail;
  }
  assert_eq!(h.finalize().unwrap(), one_shot);
});

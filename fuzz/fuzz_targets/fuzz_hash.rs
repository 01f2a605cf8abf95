#![no_main]
use libfuzzer_sys::fuzz_target;

use ssdeep::{fuzzy_hash, FuzzyHasher, Signature};

// Exercises the claim that matters most for the hashing engine: the
// signature only depends on the bytes, never on how they were chunked.
fuzz_target!(|data: (Vec<u8>, Vec<usize>)| {
    let (bytes, chunk_sizes) = data;
    let whole = fuzzy_hash(&bytes);

    let mut hasher = FuzzyHasher::new();
    let mut offset = 0;
    let mut i = 0;
    while offset < bytes.len() {
        let raw = chunk_sizes.get(i % chunk_sizes.len().max(1)).copied().unwrap_or(1);
        let len = (raw % 4096).max(1).min(bytes.len() - offset);
        hasher.update(&bytes[offset..offset + len]);
        offset += len;
        i += 1;
    }
    assert_eq!(hasher.finalize(), whole);

    if !whole.is_empty() {
        Signature::parse(&whole).expect("hasher output must always parse");
    }
});

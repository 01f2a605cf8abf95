#![no_main]
use libfuzzer_sys::fuzz_target;

use ssdeep::compare;

// The comparator must never panic on arbitrary strings, and its result is
// always within the documented range.
fuzz_target!(|data: (String, String)| {
    let (a, b) = data;
    let score = compare(&a, &b);
    assert!(score == -1 || (0..=100).contains(&score));
    assert_eq!(score, compare(&b, &a));
});

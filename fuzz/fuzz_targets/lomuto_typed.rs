#![no_main]

use libfuzzer_sys::fuzz_target;

#[path = "../src/util.rs"]
mod util;

fuzz_target!(|data: &[u8]| {
    let mut v: Vec<i32> = util::u8_as_x(data);
    let mut expected = v.clone();
    expected.sort_unstable();

    lomuto::sort(&mut v);
    assert_eq!(v, expected);

    // Key on the low bits only so ties are common, the multiset must survive.
    let mut by_key = v.clone();
    lomuto::sort_by(&mut by_key, |a, b| (a & 3).cmp(&(b & 3)));
    assert!(by_key.windows(2).all(|w| (w[0] & 3) <= (w[1] & 3)));
    by_key.sort_unstable();
    assert_eq!(by_key, expected);
});

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&size, rest)) = data.split_first() else {
        return;
    };
    let size = size as usize % 70;
    let count = if size == 0 { rest.len() } else { rest.len() / size };

    let mut buf = rest.to_vec();
    lomuto::sort_bytes(&mut buf, count, size, |a, b| a.cmp(b))
        .expect("the buffer covers count * size bytes");

    if size == 0 {
        assert_eq!(buf, rest);
        return;
    }

    let extent = count * size;
    let mut expected: Vec<&[u8]> = rest[..extent].chunks_exact(size).collect();
    expected.sort_unstable();
    let got: Vec<&[u8]> = buf[..extent].chunks_exact(size).collect();

    assert_eq!(got, expected);
    assert_eq!(&buf[extent..], &rest[extent..]);
});
